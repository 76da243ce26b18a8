use std::collections::HashSet;
use std::sync::Arc;

use lesson_core::catalog::builtin_words;
use lesson_core::model::{SpellingWord, WordId};
use storage::repository::CustomWordRepository;

use crate::Clock;
use crate::error::SpellingWordError;

/// Category label that selects every word.
pub const ALL_CATEGORIES: &str = "All";

/// Built-in spelling list plus the learner's own words.
#[derive(Clone)]
pub struct SpellingWordService {
    clock: Clock,
    custom: Arc<dyn CustomWordRepository>,
}

impl SpellingWordService {
    #[must_use]
    pub fn new(clock: Clock, custom: Arc<dyn CustomWordRepository>) -> Self {
        Self { clock, custom }
    }

    /// Built-in words followed by stored custom words, without duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns `SpellingWordError::Storage` if the custom list cannot be read.
    pub async fn list_words(&self) -> Result<Vec<SpellingWord>, SpellingWordError> {
        let custom = self.custom.load_custom_words().await?;
        Ok(merge_words(builtin_words(), custom))
    }

    /// Look a word up by id among built-in and custom words.
    ///
    /// # Errors
    ///
    /// Returns `SpellingWordError::Storage` if the custom list cannot be read.
    pub async fn find_word(&self, id: &WordId) -> Result<Option<SpellingWord>, SpellingWordError> {
        let words = self.list_words().await?;
        Ok(words.into_iter().find(|word| word.id() == id))
    }

    /// Validate `raw`, store it as a custom word and return it.
    ///
    /// # Errors
    ///
    /// Returns `SpellingWordError::Word` if the input is too short or too long,
    /// or `SpellingWordError::Storage` if the list cannot be written.
    pub async fn add_word(&self, raw: &str) -> Result<SpellingWord, SpellingWordError> {
        let mut custom = self.custom.load_custom_words().await?;
        let taken: HashSet<WordId> = builtin_words()
            .iter()
            .chain(custom.iter())
            .map(|word| word.id().clone())
            .collect();

        let mut millis = self.clock.now_millis();
        let mut id = WordId::custom(millis);
        while taken.contains(&id) {
            millis += 1;
            id = WordId::custom(millis);
        }

        let word = SpellingWord::custom(id, raw)?;
        custom.push(word.clone());
        self.custom.save_custom_words(&custom).await?;
        tracing::info!(id = %word.id(), word = word.word(), "custom spelling word added");
        Ok(word)
    }

    /// Remove a custom word. Built-in words cannot be removed.
    ///
    /// # Errors
    ///
    /// Returns `SpellingWordError::NotCustom` for built-in ids,
    /// `SpellingWordError::NotFound` for unknown ids, or
    /// `SpellingWordError::Storage` if the list cannot be written.
    pub async fn remove_word(&self, id: &WordId) -> Result<(), SpellingWordError> {
        if builtin_words().iter().any(|word| word.id() == id) {
            return Err(SpellingWordError::NotCustom);
        }
        let mut custom = self.custom.load_custom_words().await?;
        let before = custom.len();
        custom.retain(|word| word.id() != id);
        if custom.len() == before {
            return Err(SpellingWordError::NotFound);
        }
        self.custom.save_custom_words(&custom).await?;
        tracing::info!(%id, "custom spelling word removed");
        Ok(())
    }
}

/// `base` first, then every entry of `extra` whose id is not already present.
#[must_use]
pub fn merge_words(base: Vec<SpellingWord>, extra: Vec<SpellingWord>) -> Vec<SpellingWord> {
    let mut seen: HashSet<WordId> = HashSet::with_capacity(base.len() + extra.len());
    let mut merged = Vec::with_capacity(base.len() + extra.len());
    for word in base.into_iter().chain(extra) {
        if seen.insert(word.id().clone()) {
            merged.push(word);
        } else {
            tracing::debug!(id = %word.id(), "skipping duplicate spelling word id");
        }
    }
    merged
}

/// `"All"` followed by each distinct category in first-seen order.
#[must_use]
pub fn categories(words: &[SpellingWord]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for word in words {
        if !out.iter().any(|c| c == word.category()) {
            out.push(word.category().to_string());
        }
    }
    out
}

#[must_use]
pub fn filter_by_category(words: &[SpellingWord], category: &str) -> Vec<SpellingWord> {
    if category == ALL_CATEGORIES {
        return words.to_vec();
    }
    words
        .iter()
        .filter(|word| word.category() == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_core::model::{CUSTOM_CATEGORY, Difficulty, WordError};
    use lesson_core::time::fixed_clock;
    use storage::repository::Storage;

    fn service() -> SpellingWordService {
        SpellingWordService::new(fixed_clock(), Storage::in_memory().custom_words)
    }

    #[tokio::test]
    async fn lists_builtins_when_nothing_stored() {
        let words = service().list_words().await.unwrap();
        assert_eq!(words.len(), 20);
        assert_eq!(words[0].word(), "APPLE");
    }

    #[tokio::test]
    async fn add_derives_difficulty_and_category() {
        let svc = service();
        let word = svc.add_word("  rainbow ").await.unwrap();
        assert_eq!(word.word(), "RAINBOW");
        assert_eq!(word.difficulty(), Difficulty::Medium);
        assert_eq!(word.category(), CUSTOM_CATEGORY);
        assert!(word.id().is_custom());

        let words = svc.list_words().await.unwrap();
        assert_eq!(words.len(), 21);
        assert_eq!(words.last().unwrap(), &word);
    }

    #[tokio::test]
    async fn same_millisecond_gets_a_fresh_id() {
        let svc = service();
        let first = svc.add_word("red").await.unwrap();
        let second = svc.add_word("blue").await.unwrap();
        assert_ne!(first.id(), second.id());
    }

    #[tokio::test]
    async fn add_rejects_bad_lengths() {
        let svc = service();
        assert!(matches!(
            svc.add_word("a").await,
            Err(SpellingWordError::Word(WordError::TooShort { len: 1 }))
        ));
        assert!(matches!(
            svc.add_word("abcdefghijklmnop").await,
            Err(SpellingWordError::Word(WordError::TooLong { len: 16 }))
        ));
        assert_eq!(svc.list_words().await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn only_custom_words_can_be_removed() {
        let svc = service();
        assert!(matches!(
            svc.remove_word(&WordId::new("cat")).await,
            Err(SpellingWordError::NotCustom)
        ));
        assert!(matches!(
            svc.remove_word(&WordId::new("custom-1")).await,
            Err(SpellingWordError::NotFound)
        ));

        let word = svc.add_word("zoo").await.unwrap();
        svc.remove_word(word.id()).await.unwrap();
        assert!(svc.find_word(word.id()).await.unwrap().is_none());
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let cats = categories(&builtin_words());
        assert_eq!(
            cats[..4],
            ["All", "Fruits", "Toys", "Animals"].map(String::from)
        );
        assert_eq!(cats.len(), 9);
    }

    #[test]
    fn filter_by_unknown_category_is_empty() {
        let words = builtin_words();
        assert_eq!(filter_by_category(&words, "All").len(), 20);
        assert_eq!(filter_by_category(&words, "Fruits").len(), 2);
        assert!(filter_by_category(&words, "Custom").is_empty());
    }
}
