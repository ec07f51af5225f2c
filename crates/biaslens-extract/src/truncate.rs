//! Word-count truncation

use biaslens_domain::TruncationMetadata;

/// Truncate text to at most `max_words` whitespace-separated words.
///
/// Splits on whitespace, keeps the first `max_words` tokens, and rejoins
/// them with single spaces, so internal whitespace runs are normalized as a
/// side effect. `max_words == 0` yields empty output. Pure function.
pub fn truncate_words(text: &str, max_words: usize) -> (String, TruncationMetadata) {
    let words: Vec<&str> = text.split_whitespace().collect();
    let original = words.len();

    let kept = &words[..original.min(max_words)];
    let truncated = kept.join(" ");

    let metadata = TruncationMetadata::from_counts(original, kept.len());
    (truncated, metadata)
}
