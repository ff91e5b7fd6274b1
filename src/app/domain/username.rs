use validator::ValidationError;

/// Longest username accepted anywhere (headers, bodies, paths).
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Username domain type. Once constructed, guaranteed to be trimmed, non-empty
/// and made only of ASCII letters, digits, `.`, `_` and `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new Username from a string. Trims surrounding whitespace.
    pub fn new(username: &str) -> Result<Self, ValidationError> {
        let trimmed = username.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::new("NOT_BLANK"));
        }

        if trimmed.len() > MAX_USERNAME_LENGTH {
            return Err(ValidationError::new("TOO_LONG"));
        }

        let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');
        if !trimmed.chars().all(allowed) {
            return Err(ValidationError::new("INVALID"));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validator hook for a single username field.
pub fn validate_username(value: &str) -> Result<(), ValidationError> {
    Username::new(value).map(|_| ())
}

/// Validator hook for a list of usernames. Reports the first offending entry.
pub fn validate_usernames(values: &[String]) -> Result<(), ValidationError> {
    values
        .iter()
        .try_for_each(|value| validate_username(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_username_is_trimmed() {
        let username = Username::new("  frneek ").unwrap();
        assert_eq!(username.as_str(), "frneek");
    }

    #[test]
    fn blank_username_rejected() {
        let err = Username::new("   ").unwrap_err();
        assert_eq!(err.code, "NOT_BLANK");
    }

    #[test]
    fn username_with_spaces_rejected() {
        let err = Username::new("john doe").unwrap_err();
        assert_eq!(err.code, "INVALID");
    }

    #[test]
    fn username_too_long() {
        let err = Username::new(&"a".repeat(MAX_USERNAME_LENGTH + 1)).unwrap_err();
        assert_eq!(err.code, "TOO_LONG");
    }

    #[test]
    fn list_reports_first_bad_entry() {
        let values = vec!["ok".to_string(), "not ok".to_string()];
        assert!(validate_usernames(&values).is_err());
        assert!(validate_usernames(&[]).is_ok());
    }
}
