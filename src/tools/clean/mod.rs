pub mod types;
mod utils;

pub use types::*;
pub use utils::EMOJI_RANGES;
use utils::*;

/// Clean text.
///
/// Performs the following operations in order:
/// 1. Decode HTML entities (`&amp;` → `&`, `&#39;` → `'`)
/// 2. Strip `<...>` tags, keeping the text between them
/// 3. Replace emoji with a space (so `a👋b` never fuses into `ab`)
/// 4. Normalize Unicode to NFKD (compatibility decomposition)
/// 5. Normalize whitespace (collapse runs to one space, trim)
///
/// Entities are decoded before tags are stripped, so escaped markup such as
/// `&lt;b&gt;` is removed as well.
///
/// # Examples
/// ```
/// use stringext::tools::clean::clean_text;
///
/// let dirty = "<p>Hello &amp; welcome \u{1F44B}</p>\n\n  <b>World</b>";
/// assert_eq!(clean_text(dirty), "Hello & welcome World");
/// ```
pub fn clean_text(text: &str) -> String {
    clean_text_with(text, &CleanOptions::default())
}

/// Clean text running only the stages enabled in `options`.
///
/// Enabled stages keep their fixed relative order (see [`Stage::ORDER`]).
pub fn clean_text_with(text: &str, options: &CleanOptions) -> String {
    let mut result = text.to_string();
    for stage in options.stages() {
        result = stage.apply(&result);
    }
    result
}

/// Clean all text strings in a collection.
///
/// # Examples
/// ```
/// use stringext::tools::clean::clean_all;
///
/// let texts = vec![
///     "Text &amp; stuff".to_string(),
///     "<i>More</i>   text".to_string(),
/// ];
/// let cleaned = clean_all(&texts);
/// assert_eq!(cleaned[0], "Text & stuff");
/// assert_eq!(cleaned[1], "More text");
/// ```
pub fn clean_all(texts: &[String]) -> Vec<String> {
    texts.iter().map(|t| clean_text(t)).collect()
}

/// Decode named and numeric HTML character references.
pub fn decode_html_entities(text: &str) -> String {
    utils::decode_html_entities(text)
}

/// Remove HTML tags.
///
/// Attribute-bearing and self-closing tags go too; unterminated tags are
/// dropped to the end of the input.
///
/// # Examples
/// ```
/// use stringext::tools::clean::remove_html;
///
/// assert_eq!(remove_html(r#"<a href="https://example.com">Link</a>"#), "Link");
/// assert_eq!(remove_html("Hello<br/>World"), "HelloWorld");
/// ```
pub fn remove_html(text: &str) -> String {
    strip_tags(text)
}

/// Replace each emoji code point with a single space.
///
/// Only code points inside [`EMOJI_RANGES`] are touched; zero-width joiners
/// and variation selectors of multi-part emoji stay behind.
pub fn remove_emoji(text: &str) -> String {
    replace_emoji(text)
}

/// Whether `c` falls inside [`EMOJI_RANGES`].
pub fn is_emoji(c: char) -> bool {
    utils::is_emoji(c)
}

/// Apply NFKD normalization.
pub fn normalize_unicode(text: &str) -> String {
    nfkd(text)
}

/// Collapse whitespace runs into one space and trim both ends.
///
/// # Examples
/// ```
/// use stringext::tools::clean::normalize_spaces;
///
/// assert_eq!(normalize_spaces("The  \t\n  quick\t  brown  fox "), "The quick brown fox");
/// ```
pub fn normalize_spaces(text: &str) -> String {
    collapse_whitespace(text)
}
