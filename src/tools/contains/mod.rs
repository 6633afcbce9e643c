//! Substring membership checks.

mod tests;

/// `true` if any item occurs in `text` as a substring.
///
/// An empty item list gives `false`; an empty item matches any text.
///
/// # Examples
/// ```
/// use stringext::tools::contains::contains_any;
///
/// assert!(contains_any("hello world", ["xyz", "world"]));
/// assert!(!contains_any("hello world", Vec::<&str>::new()));
/// ```
pub fn contains_any<I, S>(text: &str, items: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().any(|item| text.contains(item.as_ref()))
}

/// `true` if every item occurs in `text` as a substring.
///
/// Vacuously `true` for an empty item list.
///
/// # Examples
/// ```
/// use stringext::tools::contains::contains_all;
///
/// assert!(contains_all("hello world", ["hello", "world"]));
/// assert!(contains_all("", Vec::<String>::new()));
/// ```
pub fn contains_all<I, S>(text: &str, items: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().all(|item| text.contains(item.as_ref()))
}
