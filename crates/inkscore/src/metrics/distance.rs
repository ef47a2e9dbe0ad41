//! Generic Levenshtein edit distance.
//!
//! Foundation for every accuracy metric: character-level distance feeds CER
//! and the detailed record, word-level distance feeds WER. The computation is
//! iterative with two rolling rows, so memory stays O(min(|a|, |b|)) and there
//! is no recursion depth to worry about on long transcripts.

/// Minimum number of single-token insertions, deletions, and substitutions
/// required to transform `a` into `b`.
///
/// `distance(&[], b) == b.len()` and `distance(a, &[]) == a.len()`; the
/// result is symmetric in its arguments.
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Keep the shorter sequence on the row axis.
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, long_token) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, short_token) in short.iter().enumerate() {
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            let substitution = prev[j] + usize::from(long_token != short_token);
            curr[j + 1] = deletion.min(insertion).min(substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Character-level edit distance between two strings.
///
/// Compares Unicode scalar values without any normalization, so case and
/// whitespace differences count as edits.
pub fn char_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    levenshtein(&a_chars, &b_chars)
}
