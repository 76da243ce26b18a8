use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a spelling word (`"cat"` for built-ins, `"custom-<millis>"` for
/// words a learner added).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(String);

impl WordId {
    /// Prefix used for ids of learner-added words.
    pub const CUSTOM_PREFIX: &'static str = "custom-";

    /// Creates a new `WordId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds the id for a custom word created at the given instant.
    #[must_use]
    pub fn custom(millis: i64) -> Self {
        Self(format!("{}{millis}", Self::CUSTOM_PREFIX))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.0.starts_with(Self::CUSTOM_PREFIX)
    }
}

/// Identifier of a nursery rhyme, used in `/rhymes/:id`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RhymeId(String);

impl RhymeId {
    /// Creates a new `RhymeId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordId({})", self.0)
    }
}

impl fmt::Debug for RhymeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RhymeId({})", self.0)
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for RhymeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_ids_are_prefixed() {
        let id = WordId::custom(1_700_000_000_000);
        assert_eq!(id.as_str(), "custom-1700000000000");
        assert!(id.is_custom());
        assert!(!WordId::new("cat").is_custom());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&WordId::new("apple")).unwrap();
        assert_eq!(json, "\"apple\"");
    }
}
