//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,63}$",
    )
    .expect("Failed to compile email regex")
});

const MAX_LOCAL_PART_LEN: usize = 64;
const MAX_EMAIL_LEN: usize = 254;

/// A type-safe wrapper for email addresses.
///
/// This ensures that email addresses are validated at construction time.
///
/// # Example
///
/// ```
/// use contact_book::domain::EmailAddress;
///
/// let email = EmailAddress::new("aceng@gmail.com").unwrap();
/// assert_eq!(email.as_str(), "aceng@gmail.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly one '@' with a non-empty local part before it
    /// - Local part has no leading, trailing, or doubled '.'
    /// - Domain is a dotted hostname ending in an alphabetic TLD (2+ letters)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Check an email address without constructing a value.
    pub fn is_valid(email: &str) -> bool {
        if email.len() > MAX_EMAIL_LEN || !EMAIL_REGEX.is_match(email) {
            return false;
        }

        let Some((local, _)) = email.split_once('@') else {
            return false;
        };

        local.len() <= MAX_LOCAL_PART_LEN
            && !local.starts_with('.')
            && !local.ends_with('.')
            && !local.contains("..")
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("a@b.com").unwrap();
        assert_eq!(email.as_str(), "a@b.com");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("a@b").is_err());
        assert!(EmailAddress::new("invalid").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("user@@example.com").is_err());
        assert!(EmailAddress::new(".user@example.com").is_err());
        assert!(EmailAddress::new("us..er@example.com").is_err());
        assert!(EmailAddress::new("user@example.c0m").is_err());
        assert!(EmailAddress::new("user name@example.com").is_err());
        assert!(EmailAddress::new("aceng@gmail.com").is_ok());
        assert!(EmailAddress::new("user.name+tag@example.co.uk").is_ok());
    }

    #[test]
    fn test_email_rejects_oversized_local_part() {
        let local = "a".repeat(65);
        assert!(EmailAddress::new(format!("{}@example.com", local)).is_err());
    }

    #[test]
    fn test_email_invalid_carries_input() {
        assert_eq!(
            EmailAddress::new("a@b"),
            Err(ValidationError::InvalidEmail("a@b".to_string()))
        );
    }
}
