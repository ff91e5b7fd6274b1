use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Caller role carried in the `Role` header.
/// Any value other than `ADMIN` is treated as a regular user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn from_header(value: &str) -> Self {
        value.trim().parse().unwrap_or(Role::User)
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_is_case_insensitive() {
        assert_eq!(Role::from_header("admin"), Role::Admin);
        assert_eq!(Role::from_header(" ADMIN "), Role::Admin);
    }

    #[test]
    fn anything_else_is_user() {
        assert_eq!(Role::from_header("DEVELOPER"), Role::User);
        assert!(!Role::from_header("").is_admin());
    }
}
