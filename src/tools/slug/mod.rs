//! URL slugs.


use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::char::is_combining_mark;

use crate::tools::clean::clean_text;

static NON_ALNUM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Turn text into a lowercase, hyphen-separated slug.
///
/// The text is cleaned first (see [`clean_text`]), so markup, entities and
/// emoji never reach the slug, and accented letters decompose and lose
/// their accents. Every run of characters outside `a-z0-9` becomes one
/// hyphen; hyphens at either end are trimmed.
///
/// Combining marks are dropped rather than hyphenated, so `"Crème"` gives
/// `"creme"`, not `"cre-me"`.
///
/// # Examples
/// ```
/// use stringext::tools::slug::slugify;
///
/// assert_eq!(slugify("Hello, World! \u{2728}"), "hello-world");
/// assert_eq!(slugify("Caf\u{00E9} <b>au</b> lait"), "cafe-au-lait");
/// ```
pub fn slugify(text: &str) -> String {
    crate::pipeline!(text => clean_text -> strip_marks -> lowercase -> hyphenate)
}

/// Drop the combining marks left behind by decomposition (`e\u{301}` → `e`).
fn strip_marks(text: &str) -> String {
    text.chars().filter(|c| !is_combining_mark(*c)).collect()
}

fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

fn hyphenate(text: &str) -> String {
    NON_ALNUM_REGEX
        .replace_all(text, "-")
        .trim_matches('-')
        .to_string()
}
