use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated IMDb-style identifier: `tt` followed by one or more digits.
///
/// Construction goes through [`ImdbId::parse`] so malformed identifiers are
/// rejected before any network or storage access happens on their behalf.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImdbId(String);

impl ImdbId {
    pub fn parse(raw: &str) -> Result<Self, InvalidImdbId> {
        let digits = raw
            .strip_prefix("tt")
            .ok_or_else(|| InvalidImdbId::new(raw))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidImdbId::new(raw));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
pub struct InvalidImdbId {
    raw: String,
}

impl InvalidImdbId {
    fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }
}

impl fmt::Display for InvalidImdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid IMDb identifier '{}' (expected tt<digits>)", self.raw)
    }
}

impl std::error::Error for InvalidImdbId {}
