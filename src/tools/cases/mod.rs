//! Case style conversion.
//!
//! `to_camel` and `to_pascal` only split on `_`, `-` and whitespace, so an
//! input that is already camelCase is treated as a single word.

mod utils;

use utils::*;

/// Convert to snake_case.
///
/// Inserts `_` at lower→upper boundaries and before a capitalized word that
/// follows an acronym, turns spaces into `_`, then lowercases. Hyphens are
/// left alone.
///
/// # Examples
/// ```
/// use stringext::tools::cases::to_snake;
///
/// assert_eq!(to_snake("camelCase"), "camel_case");
/// assert_eq!(to_snake("HTTPResponse"), "http_response");
/// assert_eq!(to_snake("getHTTP2Response"), "get_http2_response");
/// ```
pub fn to_snake(text: &str) -> String {
    let split = CAPITALIZED_WORD_REGEX.replace_all(text, "${1}_${2}");
    let split = LOWER_UPPER_REGEX.replace_all(&split, "${1}_${2}");
    split.replace(' ', "_").to_lowercase()
}

/// Convert to camelCase.
///
/// # Examples
/// ```
/// use stringext::tools::cases::to_camel;
///
/// assert_eq!(to_camel("hello_world-test case"), "helloWorldTestCase");
/// assert_eq!(to_camel("camelCase"), "camelcase");
/// ```
pub fn to_camel(text: &str) -> String {
    let words = split_words(text);
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };

    let mut out = first.to_lowercase();
    for word in rest {
        out.push_str(&title_case(word));
    }
    out
}

/// Convert to PascalCase.
pub fn to_pascal(text: &str) -> String {
    split_words(text).into_iter().map(title_case).collect()
}

/// Convert to kebab-case (snake_case with `-` in place of `_`).
pub fn to_kebab(text: &str) -> String {
    to_snake(text).replace('_', "-")
}
