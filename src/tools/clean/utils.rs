//! Private helper functions for text cleaning
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

// Lazy static regex for whitespace normalization
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Code point intervals treated as emoji, inclusive on both ends.
///
/// Fixed snapshot; sequences joined by U+200D or variation selectors keep
/// those joiners since they fall outside every interval.
pub const EMOJI_RANGES: &[(char, char)] = &[
    ('\u{2600}', '\u{26FF}'),   // Miscellaneous Symbols
    ('\u{2702}', '\u{27B0}'),   // Dingbats
    ('\u{1F1E0}', '\u{1F1FF}'), // Regional indicators (flags)
    ('\u{1F300}', '\u{1F5FF}'), // Symbols & pictographs
    ('\u{1F600}', '\u{1F64F}'), // Emoticons
    ('\u{1F680}', '\u{1F6FF}'), // Transport & map
    ('\u{1F900}', '\u{1F9FF}'), // Supplemental symbols & pictographs
    ('\u{1FA00}', '\u{1FAFF}'), // Chess, symbols & pictographs extended-A
];

/// Decode HTML entities (named and numeric).
///
/// Examples:
/// - `&amp;` → `&`
/// - `&lt;` → `<`
/// - `&#39;` → `'`
/// - `&#x27;` → `'`
///
/// Unknown references such as `&bogus;` are left as they are.
pub fn decode_html_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).to_string()
}

/// Remove everything from `<` up to and including the next `>`.
///
/// An unterminated tag swallows the rest of the input and a stray `>` is
/// dropped, so the output never contains either delimiter.
pub fn strip_tags(text: &str) -> String {
    if !text.contains(['<', '>']) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;

    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

pub fn is_emoji(c: char) -> bool {
    EMOJI_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Replace every emoji code point with one space.
pub fn replace_emoji(text: &str) -> String {
    text.chars()
        .map(|c| if is_emoji(c) { ' ' } else { c })
        .collect()
}

/// Normalize Unicode to NFKD (Compatibility Decomposition).
///
/// Precomposed letters split into base + combining mark, and compatibility
/// forms map to their plain equivalents (`ﬁ` → `fi`, `₂` → `2`).
pub fn nfkd(text: &str) -> String {
    text.nfkd().collect::<String>()
}

/// Normalize whitespace by collapsing multiple spaces/newlines and trimming.
///
/// - Multiple spaces → single space
/// - Tabs and newlines → single space
/// - Trim leading/trailing whitespace
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(text, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_html_entities() {
        assert_eq!(decode_html_entities("&amp;"), "&");
        assert_eq!(decode_html_entities("&lt;&gt;"), "<>");
        assert_eq!(decode_html_entities("&quot;"), "\"");
        assert_eq!(decode_html_entities("&#39;"), "'");
        assert_eq!(decode_html_entities("&#x27;"), "'");
        assert_eq!(decode_html_entities("&nbsp;"), "\u{00A0}");
    }

    #[test]
    fn test_decode_unknown_entity_passes_through() {
        assert_eq!(decode_html_entities("&bogus;"), "&bogus;");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>Hello</p>"), "Hello");
        assert_eq!(strip_tags("Hello<br/>World"), "HelloWorld");
        assert_eq!(strip_tags("no tags"), "no tags");
    }

    #[test]
    fn test_strip_tags_unterminated() {
        assert_eq!(strip_tags("Hello <div class=\"x"), "Hello ");
        assert_eq!(strip_tags("<"), "");
    }

    #[test]
    fn test_strip_tags_stray_close() {
        assert_eq!(strip_tags("a > b"), "a  b");
    }

    #[test]
    fn test_emoji_table_is_sorted_and_disjoint() {
        for pair in EMOJI_RANGES.windows(2) {
            assert!(pair[0].0 <= pair[0].1);
            assert!(pair[0].1 < pair[1].0);
        }
    }

    #[test]
    fn test_is_emoji_boundaries() {
        assert!(is_emoji('\u{1F600}'));
        assert!(is_emoji('\u{1F64F}'));
        assert!(!is_emoji('\u{1F650}'));
        assert!(is_emoji('\u{2728}')); // sparkles
        assert!(!is_emoji('\u{200D}')); // zero width joiner
        assert!(!is_emoji('a'));
    }

    #[test]
    fn test_replace_emoji() {
        assert_eq!(replace_emoji("a\u{1F600}b"), "a b");
        assert_eq!(replace_emoji("plain"), "plain");
    }

    #[test]
    fn test_nfkd() {
        assert_eq!(nfkd("\u{00E9}"), "e\u{0301}");
        assert_eq!(nfkd("\u{FB01}"), "fi");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("hello   world"), "hello world");
        assert_eq!(collapse_whitespace("  trim  me  "), "trim me");
        assert_eq!(
            collapse_whitespace("multiple\n\n\nlines"),
            "multiple lines"
        );
        assert_eq!(collapse_whitespace("  lots   of    spaces  "), "lots of spaces");
    }
}
