use async_trait::async_trait;
use lesson_core::model::{Difficulty, SpellingWord, WordError, WordId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Key under which the learner's own spelling words are stored.
pub const CUSTOM_WORDS_KEY: &str = "customSpellingWords";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape for a spelling word.
///
/// Field names match the JSON array stored under [`CUSTOM_WORDS_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingWordRecord {
    pub id: String,
    pub word: String,
    pub difficulty: String,
    pub category: String,
}

impl SpellingWordRecord {
    #[must_use]
    pub fn from_word(word: &SpellingWord) -> Self {
        Self {
            id: word.id().as_str().to_owned(),
            word: word.word().to_owned(),
            difficulty: word.difficulty().as_str().to_owned(),
            category: word.category().to_owned(),
        }
    }

    /// Convert the record back into a domain `SpellingWord`.
    ///
    /// # Errors
    ///
    /// Returns `WordError` if the word is blank or the difficulty is unknown.
    pub fn into_word(self) -> Result<SpellingWord, WordError> {
        let difficulty = Difficulty::parse(&self.difficulty)?;
        SpellingWord::new(WordId::new(self.id), self.word, difficulty, self.category)
    }
}

/// String key-value store, the shape of browser-local storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Repository contract for the learner's custom spelling words.
#[async_trait]
pub trait CustomWordRepository: Send + Sync {
    /// Load every stored custom word in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the stored list is not valid JSON.
    async fn load_custom_words(&self) -> Result<Vec<SpellingWord>, StorageError>;

    /// Replace the stored list with `words`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be stored.
    async fn save_custom_words(&self, words: &[SpellingWord]) -> Result<(), StorageError>;
}

/// Custom words kept as one JSON array under [`CUSTOM_WORDS_KEY`].
#[derive(Clone)]
pub struct KeyValueWordRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KeyValueWordRepository {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored records that `load_custom_words` could not turn into words.
    async fn unreadable_records(&self) -> Result<Vec<SpellingWordRecord>, StorageError> {
        let Some(raw) = self.store.get(CUSTOM_WORDS_KEY).await? else {
            return Ok(Vec::new());
        };
        let Ok(records) = serde_json::from_str::<Vec<SpellingWordRecord>>(&raw) else {
            tracing::warn!("overwriting unreadable custom word list");
            return Ok(Vec::new());
        };
        Ok(records
            .into_iter()
            .filter(|record| record.clone().into_word().is_err())
            .collect())
    }
}

#[async_trait]
impl CustomWordRepository for KeyValueWordRepository {
    async fn load_custom_words(&self) -> Result<Vec<SpellingWord>, StorageError> {
        let Some(raw) = self.store.get(CUSTOM_WORDS_KEY).await? else {
            return Ok(Vec::new());
        };
        let records: Vec<SpellingWordRecord> = serde_json::from_str(&raw)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        let mut words = Vec::with_capacity(records.len());
        for record in records {
            let id = record.id.clone();
            match record.into_word() {
                Ok(word) => words.push(word),
                // left in the store; `save_custom_words` writes it back untouched
                Err(err) => tracing::warn!(%id, %err, "skipping invalid stored spelling word"),
            }
        }
        Ok(words)
    }

    async fn save_custom_words(&self, words: &[SpellingWord]) -> Result<(), StorageError> {
        let mut records: Vec<SpellingWordRecord> =
            words.iter().map(SpellingWordRecord::from_word).collect();
        for record in self.unreadable_records().await? {
            if records.iter().all(|kept| kept.id != record.id) {
                records.push(record);
            }
        }
        let raw = serde_json::to_string(&records)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.store.put(CUSTOM_WORDS_KEY, &raw).await
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates the key-value store and the word repository built on it.
#[derive(Clone)]
pub struct Storage {
    pub values: Arc<dyn KeyValueStore>,
    pub custom_words: Arc<dyn CustomWordRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(InMemoryRepository::new()))
    }

    #[must_use]
    pub fn from_store(values: Arc<dyn KeyValueStore>) -> Self {
        let custom_words: Arc<dyn CustomWordRepository> =
            Arc::new(KeyValueWordRepository::new(Arc::clone(&values)));
        Self {
            values,
            custom_words,
        }
    }
}
