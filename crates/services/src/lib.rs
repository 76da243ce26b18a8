#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod practice;
pub mod rhyme_player;
pub mod speech;
pub mod spelling_player;
pub mod spelling_words;
mod tasks;

pub use lesson_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, NarrationError, RecognitionError, SpellingWordError};
pub use practice::PracticeController;
pub use rhyme_player::RhymePlayer;
pub use speech::{NarrationService, NoSpeech, RECOGNITION_LANG, RecognitionService, SpeechRequest};
pub use spelling_player::{SpellingPlayer, SpellingView};
pub use spelling_words::{ALL_CATEGORIES, SpellingWordService, categories, filter_by_category, merge_words};
