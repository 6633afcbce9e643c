#![doc = include_str!("../README.md")]

pub mod error;
mod macros;
pub mod tools;

mod tests;

pub use error::{Result, StringExtError};
pub use tools::cases::{to_camel, to_kebab, to_pascal, to_snake};
pub use tools::clean::{
    clean_all, clean_text, clean_text_with, decode_html_entities, is_emoji, normalize_spaces,
    normalize_unicode, remove_emoji, remove_html, CleanOptions, Stage, EMOJI_RANGES,
};
pub use tools::contains::{contains_all, contains_any};
pub use tools::fuzzy::{matched_length, matching_blocks, similarity, MatchBlock};
pub use tools::replace::{multi_replace, MultiReplacer};
pub use tools::security::{mask_email, mask_phone};
pub use tools::slug::slugify;
