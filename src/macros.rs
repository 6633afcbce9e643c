//! Shared Macros

/// Chain text stages left to right.
///
/// Each stage is a function in scope taking `&str` and returning `String`;
/// the output of one feeds the next.
///
/// ```
/// use stringext::pipeline;
/// use stringext::tools::clean::{normalize_spaces, remove_html};
///
/// let out = pipeline!("<p> a   b </p>" => remove_html -> normalize_spaces);
/// assert_eq!(out, "a b");
/// ```
#[macro_export]
macro_rules! pipeline {
    ($input:expr => $first:ident $(-> $rest:ident)* $(,)?) => {{
        let value: String = $first(&$input);
        $(let value: String = $rest(&value);)*
        value
    }};
}
