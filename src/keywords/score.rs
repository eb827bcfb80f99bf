// Tag match score.
//
// The score counts comma-separated keyword tokens that contain the
// ground-truth tag (case-insensitive substring) and divides by a fixed
// keyword count of 5, not by the number of tokens actually returned. A model
// that returns fewer keywords is scored against 5 all the same.

/// The keyword count every response is assumed to contain.
pub const ASSUMED_KEYWORD_COUNT: usize = 5;

/// Count keyword tokens that contain `tag`, case-insensitively.
///
/// The tag is used as-is, surrounding whitespace included. An empty tag
/// matches nothing.
pub fn count_tag_matches(keywords: &str, tag: &str) -> usize {
    let tag = tag.to_lowercase();
    if tag.is_empty() {
        return 0;
    }

    keywords
        .to_lowercase()
        .split(',')
        .filter(|token| token.contains(tag.as_str()))
        .count()
}

/// Fraction of the assumed 5 keywords that contain the tag, rounded to two
/// decimals and capped at 1.0.
pub fn tag_match_score(keywords: &str, tag: &str) -> f64 {
    let matches = count_tag_matches(keywords, tag).min(ASSUMED_KEYWORD_COUNT);
    round2(matches as f64 / ASSUMED_KEYWORD_COUNT as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_scores_zero() {
        let score = tag_match_score("government, health, policy, reform, announcement", "politics");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_substring_match_case_insensitive() {
        let keywords = "Premier League, football, Arsenal, Football transfer, goals";
        assert_eq!(count_tag_matches(keywords, "FOOTBALL"), 2);
        assert_eq!(tag_match_score(keywords, "FOOTBALL"), 0.4);
    }

    #[test]
    fn test_denominator_is_fixed_at_five() {
        // Two keywords returned, one matches: 1/5, not 1/2
        assert_eq!(tag_match_score("tech, gadgets", "tech"), 0.2);
    }

    #[test]
    fn test_more_than_five_matches_capped() {
        let keywords = "tech, tech news, techs, fintech, edtech, tech policy, biotech";
        assert_eq!(count_tag_matches(keywords, "tech"), 7);
        assert_eq!(tag_match_score(keywords, "tech"), 1.0);
    }

    #[test]
    fn test_empty_tag_matches_nothing() {
        assert_eq!(tag_match_score("a, b, c", ""), 0.0);
    }

    #[test]
    fn test_error_marker_scored_like_any_text() {
        assert_eq!(tag_match_score("Error: connection refused", "politics"), 0.0);
    }

    #[test]
    fn test_score_always_in_unit_interval() {
        for n in 0..12 {
            let keywords = vec!["sport"; n].join(",");
            let score = tag_match_score(&keywords, "sport");
            assert!((0.0..=1.0).contains(&score), "score {score} for {n} matches");
        }
    }
}
