//! Built-in lesson content.

mod alphabet;
mod numbers;
mod rhymes;
mod words;

use thiserror::Error;

pub use alphabet::{ALPHABET_WORDS, AlphabetWord, alphabet_words_lesson, alphabets_lesson};
pub use numbers::{DEFAULT_MAX_NUMBER, MAX_NUMBER_LIMIT, NumberRange, numbers_lesson};
pub use rhymes::{find_rhyme, rhymes};
pub use words::builtin_words;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("number range must be within 1..={MAX_NUMBER_LIMIT}, got {provided}")]
    NumberRange { provided: i64 },
}
