//! Fuzzy similarity scoring.
//!
//! Scores are Ratcliff/Obershelp ratios: the longest common block is found,
//! then the same search runs on the text to its left and to its right. The
//! score is `2 * matched / (len(a) + len(b))`, counted in chars.

pub mod types;
mod utils;

pub use types::*;
use utils::*;

/// Similarity of two strings in `[0.0, 1.0]`, rounded to three decimals.
///
/// Two empty strings score `1.0`; an empty string against a non-empty one
/// scores `0.0`. The score is exactly symmetric in its arguments and
/// case-sensitive.
///
/// # Examples
/// ```
/// use stringext::tools::fuzzy::similarity;
///
/// assert_eq!(similarity("kitten", "sitting"), 0.615);
/// assert_eq!(similarity("hello", "hello"), 1.0);
/// assert_eq!(similarity("abc", "xyz"), 0.0);
/// assert_eq!(similarity("", ""), 1.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let (first, second) = canonical_pair(&a, &b);
    let matched = total_matched(first, second);
    tracing::trace!(matched, total, "similarity blocks");

    round3(2.0 * matched as f64 / total as f64)
}

/// Number of chars covered by matching blocks.
///
/// Uses the same argument ordering as [`similarity`], so
/// `matched_length(a, b) == matched_length(b, a)`. For a few pairs this
/// differs from summing [`matching_blocks`]`(a, b)`, whose recursion follows
/// the arguments as given.
pub fn matched_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (first, second) = canonical_pair(&a, &b);
    total_matched(first, second)
}

/// Matching blocks of `a` against `b`, ordered by position.
///
/// Offsets are char offsets into the arguments in the order given.
///
/// # Examples
/// ```
/// use stringext::tools::fuzzy::{matching_blocks, MatchBlock};
///
/// let blocks = matching_blocks("kitten", "sitting");
/// assert_eq!(blocks, vec![
///     MatchBlock { a: 1, b: 1, size: 3 },
///     MatchBlock { a: 5, b: 5, size: 1 },
/// ]);
/// ```
pub fn matching_blocks(a: &str, b: &str) -> Vec<MatchBlock> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    utils::matching_blocks(&a, &b)
}
