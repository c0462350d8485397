//! Registration input validator
//!
//! Implements the field checks applied to new accounts: email format, name
//! format and password complexity. All checks use ASCII character classes.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

/// Minimum password length, inclusive.
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Maximum password length, inclusive.
pub const MAX_PASSWORD_LENGTH: usize = 12;

/// Unanchored: any `word@word.word` substring satisfies it.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9_]+@[A-Za-z0-9_]+\.[A-Za-z0-9_]+").expect("Invalid regex")
});

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Validates the email format.
///
/// This is a permissive check, not RFC 5322: `x a@b.c y` passes because the
/// pattern only needs to occur somewhere in the input.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates that a display name contains no digits.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().any(|c| c.is_ascii_digit()) {
        Err(ValidationError::NameContainsDigit)
    } else {
        Ok(())
    }
}

/// Validates password complexity.
///
/// Requires 8-12 characters with at least one digit, one lowercase letter,
/// one uppercase letter and one non-word character. Length is counted in
/// UTF-16 code units, so a character outside the BMP counts twice.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let length = password.encode_utf16().count();

    let strong = (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length)
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| !is_word_char(c));

    if strong {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}

/// Runs every registration check in order: email, then name, then password.
///
/// Returns the first failure.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    validate_email(email)?;
    validate_name(name)?;
    validate_password(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_simple_addresses() {
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email("ann@x.co").is_ok());
        assert!(validate_email("first_last@host.org").is_ok());
    }

    #[test]
    fn test_email_matches_anywhere_in_input() {
        assert!(validate_email("  junk a@b.c junk").is_ok());
        assert!(validate_email("first.last@mail.example.com").is_ok());
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert_eq!(validate_email("bad-email"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("@b.c"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@.c"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(""), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_email_word_chars_are_ascii() {
        assert_eq!(validate_email("é@é.é"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_name_rejects_digits() {
        assert!(validate_name("Ann").is_ok());
        assert!(validate_name("Mary-Jane O'Neil").is_ok());
        assert!(validate_name("").is_ok());
        assert_eq!(validate_name("A1"), Err(ValidationError::NameContainsDigit));
        assert_eq!(validate_name("9lives"), Err(ValidationError::NameContainsDigit));
    }

    #[test]
    fn test_password_accepts_all_classes_within_bounds() {
        assert!(validate_password("Abcdef1!").is_ok());
        assert!(validate_password("short1A!").is_ok());
        assert!(validate_password("Abcdefgh12#$").is_ok());
        assert!(validate_password("aB3 xyzw").is_ok());
    }

    #[test]
    fn test_password_length_bounds() {
        assert_eq!(validate_password("Abcde1!"), Err(ValidationError::WeakPassword));
        assert_eq!(
            validate_password("Abcdefghi12#$"),
            Err(ValidationError::WeakPassword)
        );
        assert_eq!(validate_password("ab"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password(""), Err(ValidationError::WeakPassword));
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // 12 chars, 13 UTF-16 units
        assert_eq!(
            validate_password("Abcdefg1234😀"),
            Err(ValidationError::WeakPassword)
        );
        // 11 chars, 12 UTF-16 units
        assert!(validate_password("Abcdefg123😀").is_ok());
        assert!(validate_password("Abcdefg1é").is_ok());
    }

    #[test]
    fn test_password_requires_each_class() {
        // no digit
        assert_eq!(validate_password("Abcdefg!"), Err(ValidationError::WeakPassword));
        // no lowercase
        assert_eq!(validate_password("ABCDEF1!"), Err(ValidationError::WeakPassword));
        // no uppercase
        assert_eq!(validate_password("abcdef1!"), Err(ValidationError::WeakPassword));
        // underscore is a word character
        assert_eq!(validate_password("Abcdef1_"), Err(ValidationError::WeakPassword));
    }

    #[test]
    fn test_password_message_lists_every_rule() {
        let message = ValidationError::WeakPassword.to_string();
        assert!(message.contains("8-12 characters"));
        assert!(message.contains("digit"));
        assert!(message.contains("lowercase"));
        assert!(message.contains("capital"));
        assert!(message.contains("special character"));
    }

    #[test]
    fn test_registration_checks_email_first() {
        assert_eq!(
            validate_registration("A1", "bad-email", "ab"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_registration("A1", "a@b.c", "ab"),
            Err(ValidationError::NameContainsDigit)
        );
        assert_eq!(
            validate_registration("Ann", "a@b.c", "ab"),
            Err(ValidationError::WeakPassword)
        );
        assert!(validate_registration("Ann", "a@b.c", "Abcdef1!").is_ok());
    }
}
