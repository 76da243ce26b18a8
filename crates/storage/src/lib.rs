#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    CUSTOM_WORDS_KEY, CustomWordRepository, InMemoryRepository, KeyValueStore,
    KeyValueWordRepository, SpellingWordRecord, Storage, StorageError,
};
pub use sqlite::{SqliteInitError, SqliteRepository};
