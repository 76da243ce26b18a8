mod practice_vm;
mod rhyme_vm;
mod spelling_vm;

pub use practice_vm::{FeedbackVm, PracticeVm, map_practice};
pub use rhyme_vm::{
    RhymeCardVm, RhymeWordVm, WordHighlight, difficulty_class, map_rhyme_card, map_rhyme_words,
    progress_label,
};
pub use spelling_vm::{
    LetterTileVm, SpellingCardVm, SpellingPlaybackVm, SpellingStatus, can_add_word,
    map_spelling_card, map_spelling_playback,
};
