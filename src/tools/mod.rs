// Normalizer
pub mod clean;

// Scoring and replacement
pub mod fuzzy;
pub mod replace;

// Thin helpers over the above and plain string operations
pub mod cases;
pub mod contains;
pub mod security;
pub mod slug;
