use serde::{Deserialize, Serialize};

/// One step of the cleaning pipeline.
///
/// Stages always run in [`Stage::ORDER`]; options can switch stages off but
/// never reorder them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Decode named and numeric character references (`&amp;`, `&#39;`, `&#x27;`).
    DecodeEntities,
    /// Remove `<...>` markup, keeping the text between tags.
    StripHtml,
    /// Replace each emoji code point with a single space.
    StripEmoji,
    /// Compatibility decomposition (NFKD).
    NormalizeUnicode,
    /// Collapse whitespace runs to one space and trim.
    CollapseWhitespace,
}

impl Stage {
    /// Fixed pipeline order.
    pub const ORDER: [Stage; 5] = [
        Stage::DecodeEntities,
        Stage::StripHtml,
        Stage::StripEmoji,
        Stage::NormalizeUnicode,
        Stage::CollapseWhitespace,
    ];

    /// Run this stage alone.
    pub fn apply(self, text: &str) -> String {
        match self {
            Stage::DecodeEntities => super::utils::decode_html_entities(text),
            Stage::StripHtml => super::utils::strip_tags(text),
            Stage::StripEmoji => super::utils::replace_emoji(text),
            Stage::NormalizeUnicode => super::utils::nfkd(text),
            Stage::CollapseWhitespace => super::utils::collapse_whitespace(text),
        }
    }
}

/// Which cleaning stages to run.
///
/// Defaults to every stage enabled, which is what [`clean_text`](super::clean_text) uses.
/// Missing fields deserialize to `true`.
///
/// # Examples
/// ```
/// use stringext::tools::clean::{clean_text_with, CleanOptions};
///
/// let opts = CleanOptions::new().with_strip_emoji(false);
/// assert_eq!(clean_text_with("<b>Hi</b>  \u{1F600}", &opts), "Hi \u{1F600}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    pub decode_entities: bool,
    pub strip_html: bool,
    pub strip_emoji: bool,
    pub normalize_unicode: bool,
    pub collapse_whitespace: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            decode_entities: true,
            strip_html: true,
            strip_emoji: true,
            normalize_unicode: true,
            collapse_whitespace: true,
        }
    }
}

impl CleanOptions {
    /// All stages enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// All stages disabled; cleaning becomes the identity.
    pub fn none() -> Self {
        Self {
            decode_entities: false,
            strip_html: false,
            strip_emoji: false,
            normalize_unicode: false,
            collapse_whitespace: false,
        }
    }

    pub fn with_decode_entities(mut self, enabled: bool) -> Self {
        self.decode_entities = enabled;
        self
    }

    pub fn with_strip_html(mut self, enabled: bool) -> Self {
        self.strip_html = enabled;
        self
    }

    pub fn with_strip_emoji(mut self, enabled: bool) -> Self {
        self.strip_emoji = enabled;
        self
    }

    pub fn with_normalize_unicode(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    pub fn with_collapse_whitespace(mut self, enabled: bool) -> Self {
        self.collapse_whitespace = enabled;
        self
    }

    /// Whether `stage` will run.
    pub fn is_enabled(&self, stage: Stage) -> bool {
        match stage {
            Stage::DecodeEntities => self.decode_entities,
            Stage::StripHtml => self.strip_html,
            Stage::StripEmoji => self.strip_emoji,
            Stage::NormalizeUnicode => self.normalize_unicode,
            Stage::CollapseWhitespace => self.collapse_whitespace,
        }
    }

    /// Enabled stages in pipeline order.
    pub fn stages(&self) -> impl Iterator<Item = Stage> + '_ {
        Stage::ORDER
            .into_iter()
            .filter(move |stage| self.is_enabled(*stage))
    }
}
