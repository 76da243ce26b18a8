use std::sync::Arc;

use lesson_core::catalog::NumberRange;
use lesson_core::model::{Lesson, SpellingWord};
use lesson_core::session::SessionError;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::practice::PracticeController;
use crate::rhyme_player::RhymePlayer;
use crate::speech::{NarrationService, RecognitionService};
use crate::spelling_player::SpellingPlayer;
use crate::spelling_words::SpellingWordService;

/// Assembles app-facing services around the two speech ports.
#[derive(Clone)]
pub struct AppServices {
    narrator: Arc<dyn NarrationService>,
    recognizer: Arc<dyn RecognitionService>,
    spelling_words: Arc<SpellingWordService>,
    number_range: NumberRange,
}

impl AppServices {
    #[must_use]
    pub fn new(
        storage: &Storage,
        clock: Clock,
        narrator: Arc<dyn NarrationService>,
        recognizer: Arc<dyn RecognitionService>,
    ) -> Self {
        let spelling_words = Arc::new(SpellingWordService::new(
            clock,
            Arc::clone(&storage.custom_words),
        ));
        Self {
            narrator,
            recognizer,
            spelling_words,
            number_range: NumberRange::default(),
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        narrator: Arc<dyn NarrationService>,
        recognizer: Arc<dyn RecognitionService>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(&storage, clock, narrator, recognizer))
    }

    /// Upper bound the numbers lesson starts with.
    #[must_use]
    pub fn with_number_range(mut self, range: NumberRange) -> Self {
        self.number_range = range;
        self
    }

    #[must_use]
    pub fn number_range(&self) -> NumberRange {
        self.number_range
    }

    #[must_use]
    pub fn narrator(&self) -> Arc<dyn NarrationService> {
        Arc::clone(&self.narrator)
    }

    #[must_use]
    pub fn recognizer(&self) -> Arc<dyn RecognitionService> {
        Arc::clone(&self.recognizer)
    }

    #[must_use]
    pub fn spelling_words(&self) -> Arc<SpellingWordService> {
        Arc::clone(&self.spelling_words)
    }

    /// A practice controller for one lesson page.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the lesson has no items.
    pub fn practice(&self, lesson: Lesson) -> Result<PracticeController, SessionError> {
        PracticeController::new(lesson.into_items(), self.narrator(), self.recognizer())
    }

    #[must_use]
    pub fn rhyme_player(&self, text: &str) -> RhymePlayer {
        RhymePlayer::new(text, self.narrator())
    }

    #[must_use]
    pub fn spelling_player(&self, word: &SpellingWord) -> SpellingPlayer {
        SpellingPlayer::new(word.word(), self.narrator())
    }
}
