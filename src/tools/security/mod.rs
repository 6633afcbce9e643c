//! Privacy masking.


use crate::error::{Result, StringExtError};

/// Mask the local part of an email address, keeping its first character.
///
/// Fails unless the input has exactly one `@` with at least one character
/// before it. The domain is kept exactly as given.
///
/// # Examples
/// ```
/// use stringext::tools::security::mask_email;
///
/// assert_eq!(mask_email("user@example.com").unwrap(), "u***@example.com");
/// assert!(mask_email("no-at-sign").is_err());
/// ```
pub fn mask_email(email: &str) -> Result<String> {
    let parsed = email
        .split_once('@')
        .filter(|(_, domain)| !domain.contains('@'))
        .and_then(|(name, domain)| name.chars().next().map(|first| (first, domain)));

    match parsed {
        Some((first, domain)) => Ok(format!("{first}***@{domain}")),
        None => {
            tracing::debug!(input_len = email.len(), "rejected email for masking");
            Err(StringExtError::InvalidEmail(email.to_string()))
        }
    }
}

/// Mask a phone number as `****` followed by its last four characters.
///
/// No format validation: separators count as characters. The mask is
/// always present, so inputs of four characters or fewer come back whole
/// behind it (`"123"` → `"****123"`) rather than unmasked.
///
/// # Examples
/// ```
/// use stringext::tools::security::mask_phone;
///
/// assert_eq!(mask_phone("5551234567"), "****4567");
/// assert_eq!(mask_phone("555-123-4567 x123"), "****x123");
/// ```
pub fn mask_phone(phone: &str) -> String {
    let len = phone.chars().count();
    let tail: String = phone.chars().skip(len.saturating_sub(4)).collect();
    format!("****{tail}")
}
