//! Shared error types for the services crate.

use thiserror::Error;

use lesson_core::model::WordError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Failures reported by a narration (text-to-speech) backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NarrationError {
    #[error("speech synthesis is not available")]
    Unavailable,
    /// The utterance was cancelled or superseded by a newer one.
    #[error("narration canceled")]
    Canceled,
    #[error("speech synthesis failed: {0}")]
    Platform(String),
}

/// Failures reported by a recognition (speech-to-text) backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RecognitionError {
    #[error("speech recognition is not available")]
    Unavailable,
    #[error("speech recognition failed: {0}")]
    Platform(String),
    /// A result arrived but could not be read.
    #[error("malformed recognition result: {0}")]
    MalformedResult(String),
}

/// Errors emitted by `SpellingWordService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpellingWordError {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error("spelling word not found")]
    NotFound,
    #[error("only custom words can be removed")]
    NotCustom,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
