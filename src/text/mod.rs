// Text cleaning for article descriptions before they are sent to the model.

/// Normalize article text: drop punctuation, fold newlines and whitespace
/// runs into single spaces, trim the ends.
///
/// A word character is any Unicode letter or digit, or `_`. Everything that
/// is neither a word character nor whitespace is removed. Punctuation goes
/// first so that removing it can never leave a double space behind, which
/// keeps the function idempotent.
pub fn clean_text(text: &str) -> String {
    let without_punct: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    without_punct.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_newlines() {
        let cleaned = clean_text("The government announced\nnew health-policy reforms today.");
        assert_eq!(cleaned, "The government announced new healthpolicy reforms today");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_text("  a \t\t b \r\n\n c  "), "a b c");
    }

    #[test]
    fn test_spaced_dash_leaves_single_space() {
        assert_eq!(clean_text("left - right"), "left right");
    }

    #[test]
    fn test_keeps_unicode_letters_and_underscore() {
        assert_eq!(clean_text("Café über_alles!"), "Café über_alles");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "   ",
            "Hello, world!",
            "a - b -- c",
            "Line one.\nLine two?\n\nLine three...",
            "£100m deal: \"agreed\" (finally)",
        ];
        for sample in samples {
            let once = clean_text(sample);
            assert_eq!(clean_text(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_punctuation_only_is_empty() {
        assert_eq!(clean_text("?!... ---"), "");
    }
}
