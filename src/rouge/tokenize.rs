use std::sync::OnceLock;

use regex_lite::Regex;

fn non_alphanumeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"))
}

/// Split text into ROUGE tokens: lower-case, treat every run of characters
/// outside `[a-z0-9]` as a separator.
///
/// Non-ASCII letters are separators too, matching the reference scorer.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    non_alphanumeric()
        .replace_all(&lower, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
