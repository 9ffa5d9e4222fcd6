/// Counts whitespace-separated tokens, the way summary lengths are reported.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
