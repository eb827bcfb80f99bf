// Output formatting: terminal tables and score distributions.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Count scores into fixed-width buckets over [0, 1].
///
/// Bucket `i` starts at `i * width`. The last bucket holds exactly 1.0 (and
/// anything above), so with a width of 0.2 the buckets line up with the
/// possible tag match scores 0.0, 0.2, ... 1.0. Non-finite values are skipped.
pub fn score_histogram(values: &[f64], width: f64) -> Vec<(f64, usize)> {
    let buckets = (1.0 / width).round() as usize + 1;
    let mut counts = vec![0usize; buckets];

    for &value in values.iter().filter(|v| v.is_finite()) {
        // Small epsilon so 0.6 / 0.2 lands in bucket 3, not 2.999...
        let idx = ((value.max(0.0) / width) + 1e-9).floor() as usize;
        counts[idx.min(buckets - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (i as f64 * width, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn test_histogram_tag_scores() {
        let hist = score_histogram(&[0.0, 0.2, 0.2, 0.6, 1.0, 0.4], 0.2);
        let counts: Vec<usize> = hist.iter().map(|(_, c)| *c).collect();
        assert_eq!(counts, vec![1, 2, 1, 1, 0, 1]);
        assert!((hist[3].0 - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_histogram_skips_nan() {
        let hist = score_histogram(&[f64::NAN, 0.55], 0.1);
        assert_eq!(hist.len(), 11);
        assert_eq!(hist.iter().map(|(_, c)| c).sum::<usize>(), 1);
        assert_eq!(hist[5].1, 1);
    }
}
