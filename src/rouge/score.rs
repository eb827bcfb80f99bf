// ROUGE-N and ROUGE-L precision, recall and F-measure.
//
// ROUGE-N counts n-grams shared by candidate and reference, clipped to the
// smaller of the two counts for each n-gram. ROUGE-L uses the length of the
// longest common subsequence of tokens. For both:
//
//   precision = overlap / max(candidate size, 1)
//   recall    = overlap / max(reference size, 1)
//   fmeasure  = 2PR / (P + R), or 0 when P + R is 0

use std::collections::HashMap;

use super::tokenize::tokenize;

/// Precision, recall and F-measure for one ROUGE variant. All in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Score {
    pub precision: f64,
    pub recall: f64,
    pub fmeasure: f64,
}

impl Score {
    fn from_overlap(overlap: usize, candidate_len: usize, reference_len: usize) -> Self {
        let precision = overlap as f64 / candidate_len.max(1) as f64;
        let recall = overlap as f64 / reference_len.max(1) as f64;
        let fmeasure = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self {
            precision,
            recall,
            fmeasure,
        }
    }
}

/// ROUGE-N over raw text.
pub fn rouge_n(candidate: &str, reference: &str, n: usize) -> Score {
    rouge_n_tokens(&tokenize(candidate), &tokenize(reference), n)
}

/// ROUGE-L over raw text.
pub fn rouge_l(candidate: &str, reference: &str) -> Score {
    rouge_l_tokens(&tokenize(candidate), &tokenize(reference))
}

fn rouge_n_tokens(candidate: &[String], reference: &[String], n: usize) -> Score {
    let candidate_ngrams = ngram_counts(candidate, n);
    let reference_ngrams = ngram_counts(reference, n);

    let overlap: usize = candidate_ngrams
        .iter()
        .map(|(gram, &count)| count.min(reference_ngrams.get(gram).copied().unwrap_or(0)))
        .sum();

    Score::from_overlap(
        overlap,
        candidate_ngrams.values().sum(),
        reference_ngrams.values().sum(),
    )
}

fn ngram_counts(tokens: &[String], n: usize) -> HashMap<&[String], usize> {
    let mut counts = HashMap::new();
    if n == 0 || tokens.len() < n {
        return counts;
    }
    for gram in tokens.windows(n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

fn rouge_l_tokens(candidate: &[String], reference: &[String]) -> Score {
    let lcs = lcs_length(candidate, reference);
    Score::from_overlap(lcs, candidate.len(), reference.len())
}

/// Length of the longest common subsequence, two-row dynamic programming.
fn lcs_length(a: &[String], b: &[String]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for token_a in a {
        for (j, token_b) in b.iter().enumerate() {
            curr[j + 1] = if token_a == token_b {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
