//! Multi-pattern replacement.

mod utils;

use regex::Regex;
use std::collections::HashMap;
use utils::*;

#[derive(Debug, Clone)]
enum Matcher {
    /// No usable keys; replacement is the identity.
    Empty,
    Alternation(Regex),
    /// Used only when the alternation cannot be compiled.
    Scan,
}

impl Matcher {
    fn kind(&self) -> &'static str {
        match self {
            Matcher::Empty => "empty",
            Matcher::Alternation(_) => "alternation",
            Matcher::Scan => "scan",
        }
    }
}

/// A compiled key → value mapping that replaces every key in one pass.
///
/// The input is scanned left to right once. Where several keys match at the
/// same position, the key registered first wins (registration order is the
/// priority, not key length). Replaced text is never scanned again, so
/// replacements do not cascade.
///
/// Iteration order of the mapping you pass in decides priority: use a
/// `Vec`, an array, a `BTreeMap` or another ordered collection when keys can
/// overlap. Empty keys are ignored. A repeated key keeps the priority of its
/// first occurrence and the value of its last.
///
/// # Examples
/// ```
/// use stringext::tools::replace::MultiReplacer;
///
/// let replacer = MultiReplacer::new([("cat", "dog"), ("dog", "cat")]);
/// assert_eq!(replacer.replace("cat chases dog"), "dog chases cat");
///
/// // registration order, not length, breaks ties
/// let replacer = MultiReplacer::new([("a", "Y"), ("ab", "X")]);
/// assert_eq!(replacer.replace("ab"), "Yb");
/// ```
#[derive(Debug, Clone)]
pub struct MultiReplacer {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
    matcher: Matcher,
}

impl MultiReplacer {
    pub fn new<I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (entries, index) = collect_entries(mapping);

        let matcher = if entries.is_empty() {
            Matcher::Empty
        } else {
            match build_alternation(&entries) {
                Ok(regex) => Matcher::Alternation(regex),
                Err(e) => {
                    tracing::warn!(
                        keys = entries.len(),
                        error = %e,
                        "multi-replace alternation did not compile, scanning keys directly"
                    );
                    Matcher::Scan
                }
            }
        };
        tracing::debug!(
            keys = entries.len(),
            matcher = matcher.kind(),
            "compiled multi-replace matcher"
        );

        Self {
            entries,
            index,
            matcher,
        }
    }

    /// Build a replacer that always uses the direct scan.
    #[cfg(test)]
    pub(crate) fn scanning<I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (entries, index) = collect_entries(mapping);
        Self {
            entries,
            index,
            matcher: Matcher::Scan,
        }
    }

    /// Replace every key occurrence in `text`.
    pub fn replace(&self, text: &str) -> String {
        match &self.matcher {
            Matcher::Empty => text.to_string(),
            Matcher::Alternation(regex) => regex_replace(text, regex, &self.entries, &self.index),
            Matcher::Scan => scan_replace(text, &self.entries),
        }
    }

    /// Keys in priority order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Value a key is replaced with.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Replace every key of `mapping` found in `text` with its value, in a
/// single non-cascading pass.
///
/// See [`MultiReplacer`] for tie-breaking; build one directly to reuse the
/// compiled mapping across many inputs.
///
/// # Examples
/// ```
/// use stringext::tools::replace::multi_replace;
///
/// assert_eq!(multi_replace("abc abc abc", [("a", "X"), ("b", "Y")]), "XYc XYc XYc");
/// assert_eq!(multi_replace("aa", [("a", "b")]), "bb");
/// ```
pub fn multi_replace<I, K, V>(text: &str, mapping: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    MultiReplacer::new(mapping).replace(text)
}
