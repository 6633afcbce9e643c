use thiserror::Error;

pub type Result<T> = std::result::Result<T, StringExtError>;

/// Errors surfaced by fallible text operations.
///
/// Every other operation in this crate is total over its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StringExtError {
    /// Input is not of the form `local@domain` with exactly one `@`
    /// and a non-empty local part.
    #[error("invalid email format: {0:?}")]
    InvalidEmail(String),
}
