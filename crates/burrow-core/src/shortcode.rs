use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of hex characters in a short code.
pub const LENGTH: usize = 8;

/// Path segment under which short codes are served.
pub const REDIRECT_PREFIX: &str = "s";

/// A short identifier for a shortened URL.
///
/// Generated codes are exactly eight lowercase hexadecimal characters.
/// Keys read back from storage are wrapped with [`ShortCode::new_unchecked`]
/// so that values written by older deployments can still be listed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    ///
    /// Valid codes are exactly 8 characters of `[0-9a-f]`.
    pub fn new(code: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (the identifier generator, or keys already present in storage).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            REDIRECT_PREFIX,
            self.0
        )
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> std::result::Result<(), CoreError> {
        if code.len() != LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be {}, got {}",
                LENGTH,
                code.len()
            )));
        }

        if !code
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only lowercase hexadecimal characters: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("0123abcd").is_ok());
        assert!(ShortCode::new("ffffffff").is_ok());
        assert!(ShortCode::new("00000000").is_ok());
    }

    #[test]
    fn wrong_length() {
        assert!(ShortCode::new("abc").is_err());
        assert!(ShortCode::new("").is_err());
        assert!(ShortCode::new("0123abcd0").is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::new("0123ABCD").is_err());
        assert!(ShortCode::new("0123abcg").is_err());
        assert!(ShortCode::new("0123/bcd").is_err());
    }

    #[test]
    fn display_matches_as_str() {
        let code = ShortCode::new("deadbeef").unwrap();
        assert_eq!(code.to_string(), "deadbeef");
        assert_eq!(code.as_str(), "deadbeef");
    }

    #[test]
    fn to_url_appends_redirect_path() {
        let code = ShortCode::new("abc12345").unwrap();
        assert_eq!(
            code.to_url("http://localhost:8080"),
            "http://localhost:8080/s/abc12345"
        );
        assert_eq!(
            code.to_url("http://localhost:8080/"),
            "http://localhost:8080/s/abc12345"
        );
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = ShortCode::new("abc12345").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"abc12345\"");
    }
}
