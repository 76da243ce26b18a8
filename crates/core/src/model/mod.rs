mod ids;
mod lesson;
mod rhyme;
mod spelling;
mod voice;

pub use ids::{RhymeId, WordId};
pub use lesson::{Lesson, LessonItem, LessonKind};
pub use rhyme::{Rhyme, RhymeToken, tokenize};
pub use spelling::{
    CUSTOM_CATEGORY, Difficulty, MAX_WORD_LEN, MIN_WORD_LEN, SpellingWord, WordError,
};
pub use voice::VoiceSettings;
