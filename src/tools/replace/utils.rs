use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

// Large key sets compile to big automata; allow well past the default limit
const MATCHER_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Ordered `(key, value)` entries plus a key → position index.
///
/// Empty keys are dropped. A repeated key keeps the position of its first
/// occurrence and takes the value of its last.
pub fn collect_entries<I, K, V>(mapping: I) -> (Vec<(String, String)>, HashMap<String, usize>)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut entries: Vec<(String, String)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (key, value) in mapping {
        let key = key.into();
        let value = value.into();
        if key.is_empty() {
            continue;
        }
        match index.get(&key) {
            Some(&pos) => entries[pos].1 = value,
            None => {
                index.insert(key.clone(), entries.len());
                entries.push((key, value));
            }
        }
    }

    (entries, index)
}

/// One regex matching any key literally, alternatives in priority order.
///
/// The regex engine resolves alternation leftmost-first, so at a given
/// position the earliest listed key wins regardless of length.
pub fn build_alternation(entries: &[(String, String)]) -> Result<Regex, regex::Error> {
    let pattern = entries
        .iter()
        .map(|(key, _)| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");

    RegexBuilder::new(&pattern)
        .size_limit(MATCHER_SIZE_LIMIT)
        .build()
}

/// Replace using a compiled alternation.
pub fn regex_replace(
    text: &str,
    matcher: &Regex,
    entries: &[(String, String)],
    index: &HashMap<String, usize>,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in matcher.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        // every alternative is a key, so a match is always indexed
        let pos = index[m.as_str()];
        out.push_str(&entries[pos].1);
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Replace by trying every key, in priority order, at each position.
pub fn scan_replace(text: &str, entries: &[(String, String)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        match entries.iter().find(|(key, _)| rest.starts_with(key.as_str())) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &rest[key.len()..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    out
}
