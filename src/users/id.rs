//! User identifiers.
//!
//! Any string or number is accepted except `.` and `..`. URL parsers collapse
//! those (and their `%2E` spellings) as dot segments, so `{base}/..` would
//! address a different route instead of a user.

use super::error::IdError;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// # Errors
    /// Returns an error if `raw` is a dot segment.
    pub fn new(raw: impl Into<String>) -> Result<Self, IdError> {
        let raw = raw.into();
        if matches!(raw.as_str(), "." | "..") {
            return Err(IdError::DotSegment(raw));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for UserId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for UserId {
    type Error = IdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for UserId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

macro_rules! numeric_user_id {
    ($($t:ty),*) => {
        $(
            impl From<$t> for UserId {
                fn from(value: $t) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

numeric_user_id!(u32, u64, i32, i64, usize);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn accepts_opaque_strings() -> Result<()> {
        assert_eq!(UserId::new("42")?.as_str(), "42");
        assert_eq!("a/b".parse::<UserId>()?.as_str(), "a/b");
        assert_eq!(UserId::try_from("...")?.as_str(), "...");
        assert_eq!(UserId::try_from(".hidden".to_string())?.as_str(), ".hidden");
        Ok(())
    }

    #[test]
    fn numbers_convert_infallibly() {
        assert_eq!(UserId::from(7_u64).as_str(), "7");
        assert_eq!(UserId::from(-1_i32).to_string(), "-1");
    }

    #[test]
    fn rejects_dot_segments() {
        assert!(matches!(UserId::new("."), Err(IdError::DotSegment(s)) if s == "."));
        assert!(matches!(UserId::new(".."), Err(IdError::DotSegment(s)) if s == ".."));
    }
}
