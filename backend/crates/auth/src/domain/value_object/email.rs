//! Email Value Object
//!
//! Validated, canonicalized (lowercase) email address.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const MAX_EMAIL_LEN: usize = 254;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Invalid email format")]
    Invalid,

    #[error("Email is too long")]
    TooLong,
}

/// Canonicalized email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validate and canonicalize a raw email string
    pub fn new(raw: &str) -> Result<Self, EmailError> {
        let canonical = raw.trim().to_ascii_lowercase();

        if canonical.len() > MAX_EMAIL_LEN {
            return Err(EmailError::TooLong);
        }

        let (local, domain) = canonical.split_once('@').ok_or(EmailError::Invalid)?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(EmailError::Invalid);
        }
        // Domain must have a dot with something on both sides
        let (name, tld) = domain.rsplit_once('.').ok_or(EmailError::Invalid)?;
        if name.is_empty() || tld.is_empty() {
            return Err(EmailError::Invalid);
        }
        if canonical.chars().any(char::is_whitespace) {
            return Err(EmailError::Invalid);
        }

        Ok(Self(canonical))
    }

    /// Wrap a value already validated at write time
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("a.b+tag@sub.example.co").is_ok());
    }

    #[test]
    fn test_canonicalizes_to_lowercase() {
        let email = Email::new("  User@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(Email::new("no-at-sign"), Err(EmailError::Invalid));
        assert_eq!(Email::new("@example.com"), Err(EmailError::Invalid));
        assert_eq!(Email::new("user@"), Err(EmailError::Invalid));
        assert_eq!(Email::new("user@nodot"), Err(EmailError::Invalid));
        assert_eq!(Email::new("user@example."), Err(EmailError::Invalid));
        assert_eq!(Email::new("user@.com"), Err(EmailError::Invalid));
        assert_eq!(Email::new("two words@example.com"), Err(EmailError::Invalid));
    }

    #[test]
    fn test_too_long() {
        let raw = format!("{}@example.com", "a".repeat(250));
        assert_eq!(Email::new(&raw), Err(EmailError::TooLong));
    }
}
