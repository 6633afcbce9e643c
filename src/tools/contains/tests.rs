#![cfg(test)]
mod tests {
    use crate::tools::contains::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_contains_any() {
        assert!(contains_any("hello world", ["hello"]));
        assert!(contains_any("hello world", ["xyz", "o w", "abc"]));
        assert!(!contains_any("hello world", ["xyz", "abc", "def"]));
        assert!(!contains_any("hello world", NONE));
        assert!(!contains_any("", ["hello"]));
        assert!(!contains_any("", NONE));
    }

    #[test]
    fn test_contains_any_case_sensitive() {
        assert!(!contains_any("Hello World", ["hello"]));
        assert!(contains_any("Hello World", ["Hello"]));
    }

    #[test]
    fn test_contains_any_empty_item() {
        assert!(contains_any("hello", [""]));
        assert!(contains_any("", [""]));
    }

    #[test]
    fn test_contains_all() {
        assert!(contains_all("hello world", ["hello", "world"]));
        assert!(!contains_all("hello world", ["hello", "xyz"]));
        assert!(contains_all("hello world", NONE));
        assert!(contains_all("", NONE));
        assert!(!contains_all("", ["a"]));
    }

    #[test]
    fn test_contains_accepts_owned_and_iterators() {
        let items = vec!["caf\u{00E9}".to_string(), "au".to_string()];
        assert!(contains_all("caf\u{00E9} au lait", &items));
        assert!(contains_any("tab\there", "\t \n".split(' ')));
    }

    #[test]
    fn test_contains_long_text() {
        let text = format!("{}needle{}", "a".repeat(10_000), "b".repeat(10_000));
        assert!(contains_any(&text, ["needle"]));
        assert!(!contains_all(&text, ["aab", "needle", "bb"]));
        assert!(contains_all(&text, ["aneedleb"]));
    }
}
