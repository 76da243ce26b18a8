use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::WordId;

/// Category assigned to every word a learner adds.
pub const CUSTOM_CATEGORY: &str = "Custom";

/// Minimum number of characters in a custom word.
pub const MIN_WORD_LEN: usize = 2;

/// Maximum number of characters accepted by the "add word" input.
pub const MAX_WORD_LEN: usize = 15;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordError {
    #[error("word cannot be empty")]
    Empty,
    #[error("word must have at least {MIN_WORD_LEN} characters, got {len}")]
    TooShort { len: usize },
    #[error("word must have at most {MAX_WORD_LEN} characters, got {len}")]
    TooLong { len: usize },
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Difficulty derived from word length: up to 4 is easy, up to 7 medium.
    #[must_use]
    pub fn from_len(len: usize) -> Self {
        match len {
            0..=4 => Self::Easy,
            5..=7 => Self::Medium,
            _ => Self::Hard,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Parse the stored label.
    ///
    /// # Errors
    ///
    /// Returns `WordError::UnknownDifficulty` for any other label.
    pub fn parse(raw: &str) -> Result<Self, WordError> {
        match raw {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Hard" => Ok(Self::Hard),
            other => Err(WordError::UnknownDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A word the spelling pages can spell out letter by letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingWord {
    id: WordId,
    word: String,
    difficulty: Difficulty,
    category: String,
}

impl SpellingWord {
    /// Built-in or persisted word; the text is stored upper-cased.
    ///
    /// # Errors
    ///
    /// Returns `WordError::Empty` if the word is blank.
    pub fn new(
        id: WordId,
        word: impl Into<String>,
        difficulty: Difficulty,
        category: impl Into<String>,
    ) -> Result<Self, WordError> {
        let word = word.into().trim().to_uppercase();
        if word.is_empty() {
            return Err(WordError::Empty);
        }
        Ok(Self {
            id,
            word,
            difficulty,
            category: category.into(),
        })
    }

    /// Validate raw learner input and build a custom word.
    ///
    /// # Errors
    ///
    /// Returns `WordError` if the trimmed input is empty, shorter than
    /// `MIN_WORD_LEN` or longer than `MAX_WORD_LEN` characters.
    pub fn custom(id: WordId, raw: &str) -> Result<Self, WordError> {
        let word = raw.trim().to_uppercase();
        let len = word.chars().count();
        if len == 0 {
            return Err(WordError::Empty);
        }
        if len < MIN_WORD_LEN {
            return Err(WordError::TooShort { len });
        }
        if len > MAX_WORD_LEN {
            return Err(WordError::TooLong { len });
        }
        Ok(Self {
            id,
            word,
            difficulty: Difficulty::from_len(len),
            category: CUSTOM_CATEGORY.to_string(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &WordId {
        &self.id
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.category == CUSTOM_CATEGORY
    }

    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        self.word.chars().collect()
    }

    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.word.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_word_is_trimmed_and_uppercased() {
        let word = SpellingWord::custom(WordId::custom(1), "  butterfly ").unwrap();
        assert_eq!(word.word(), "BUTTERFLY");
        assert_eq!(word.difficulty(), Difficulty::Hard);
        assert_eq!(word.category(), CUSTOM_CATEGORY);
        assert!(word.is_custom());
    }

    #[test]
    fn difficulty_follows_length() {
        assert_eq!(Difficulty::from_len(4), Difficulty::Easy);
        assert_eq!(Difficulty::from_len(5), Difficulty::Medium);
        assert_eq!(Difficulty::from_len(7), Difficulty::Medium);
        assert_eq!(Difficulty::from_len(8), Difficulty::Hard);
    }

    #[test]
    fn custom_word_rejects_bad_lengths() {
        assert_eq!(
            SpellingWord::custom(WordId::custom(1), "   ").unwrap_err(),
            WordError::Empty
        );
        assert_eq!(
            SpellingWord::custom(WordId::custom(1), "a").unwrap_err(),
            WordError::TooShort { len: 1 }
        );
        assert_eq!(
            SpellingWord::custom(WordId::custom(1), "abcdefghijklmnop").unwrap_err(),
            WordError::TooLong { len: 16 }
        );
    }

    #[test]
    fn difficulty_labels_round_trip() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::parse(d.as_str()).unwrap(), d);
        }
        assert!(Difficulty::parse("Impossible").is_err());
    }
}
