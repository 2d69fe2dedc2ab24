//! Validated player names.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::str::FromStr;

/// Longest accepted name, in characters.
pub const MAX_USERNAME_LEN: usize = 15;

/// A trimmed, non-empty player name of at most [`MAX_USERNAME_LEN`]
/// characters with no control characters.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
#[display("{}", _0)]
pub struct Username(String);

impl Username {
    /// Validates `raw` after trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, UsernameError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(UsernameError::Empty);
        }

        let length = name.chars().count();
        if length > MAX_USERNAME_LEN {
            return Err(UsernameError::TooLong { length });
        }
        if name.chars().any(char::is_control) {
            return Err(UsernameError::ControlCharacter);
        }

        Ok(Self(name.to_string()))
    }

    /// The name as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Username {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}

/// Rejected username.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum UsernameError {
    /// Nothing left after trimming.
    #[display("Username cannot be empty")]
    Empty,

    /// More than [`MAX_USERNAME_LEN`] characters.
    #[display("Username has {} characters, at most {} are allowed", length, MAX_USERNAME_LEN)]
    TooLong {
        /// Characters in the trimmed input.
        length: usize,
    },

    /// Tabs, newlines and other control characters are not allowed.
    #[display("Username cannot contain control characters")]
    ControlCharacter,
}

impl std::error::Error for UsernameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let name = Username::parse("  alice \n").unwrap();
        assert_eq!(name.as_str(), "alice");
        assert_eq!(name.to_string(), "alice");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Username::parse(""), Err(UsernameError::Empty));
        assert_eq!(Username::parse("   "), Err(UsernameError::Empty));
    }

    #[test]
    fn test_length_limit_counts_characters() {
        assert!(Username::parse("abcdefghijklmno").is_ok());
        assert_eq!(
            Username::parse("abcdefghijklmnop"),
            Err(UsernameError::TooLong { length: 16 })
        );
        // Fifteen multi-byte characters are still fifteen.
        assert!(Username::parse(&"é".repeat(15)).is_ok());
    }

    #[test]
    fn test_json_goes_through_validation() {
        let name: Username = serde_json::from_str(r#"" bob ""#).unwrap();
        assert_eq!(name.as_str(), "bob");
        assert_eq!(serde_json::to_string(&name).unwrap(), r#""bob""#);
        assert!(serde_json::from_str::<Username>(r#""""#).is_err());
    }

    #[test]
    fn test_from_str() {
        let name: Username = "carol".parse().unwrap();
        assert_eq!(name.as_str(), "carol");
        assert_eq!("".parse::<Username>(), Err(UsernameError::Empty));
    }

    #[test]
    fn test_rejects_control_characters() {
        assert_eq!(
            Username::parse("al\tice"),
            Err(UsernameError::ControlCharacter)
        );
    }
}
