use regex::Regex;
use std::sync::LazyLock;

// Any char followed by a capitalized word: "HTTPResponse" splits before "Response"
pub static CAPITALIZED_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid regex"));

// Lowercase letter or digit followed by a capital: "getHTTP" splits before "HTTP"
pub static LOWER_UPPER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));

pub static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\-\s]").expect("valid regex"));

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// Uppercase each cased char that follows an uncased one, lowercase the rest.
///
/// `"hELLO"` → `"Hello"`, `"a1b"` → `"A1B"`, `"123"` → `"123"`.
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_cased = false;

    for c in word.chars() {
        let cased = is_cased(c);
        if cased && !prev_cased {
            out.extend(c.to_uppercase());
        } else if cased {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }
    out
}

/// Split on `_`, `-` and whitespace. Consecutive separators yield empty parts.
pub fn split_words(text: &str) -> Vec<&str> {
    SEPARATOR_REGEX.split(text).collect()
}
