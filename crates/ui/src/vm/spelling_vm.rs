use lesson_core::model::{MIN_WORD_LEN, SpellingWord};
use lesson_core::sequencer::LetterState;
use services::SpellingView;

use super::rhyme_vm::difficulty_class;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpellingCardVm {
    pub id: String,
    pub word: String,
    pub difficulty: &'static str,
    pub difficulty_class: &'static str,
    pub details_label: String,
    pub letters: Vec<char>,
    pub removable: bool,
}

#[must_use]
pub fn map_spelling_card(word: &SpellingWord) -> SpellingCardVm {
    let difficulty = word.difficulty().as_str();
    SpellingCardVm {
        id: word.id().as_str().to_string(),
        word: word.word().to_string(),
        difficulty,
        difficulty_class: difficulty_class(difficulty),
        details_label: format!("{} letters • {}", word.letter_count(), word.category()),
        letters: word.letters(),
        removable: word.is_custom(),
    }
}

/// Whether the "Add" button of the custom word form is enabled.
#[must_use]
pub fn can_add_word(input: &str) -> bool {
    input.trim().chars().count() >= MIN_WORD_LEN
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterTileVm {
    pub letter: char,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpellingStatus {
    /// Not spelling and no letter highlighted.
    Prompt,
    Letter(Option<char>),
    SayingWord,
    Idle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpellingPlaybackVm {
    pub tiles: Vec<LetterTileVm>,
    pub status: SpellingStatus,
    pub playing: bool,
    pub show_skip: bool,
    pub progress_percent: f32,
    pub progress_label: String,
}

#[must_use]
pub fn map_spelling_playback(view: &SpellingView) -> SpellingPlaybackVm {
    let state = view.snapshot.state;
    let saying_word = view.snapshot.saying_word;
    let tiles = view
        .letters
        .iter()
        .map(|(letter, tile)| LetterTileVm {
            letter: *letter,
            class: match tile {
                LetterState::Current => "letter-tile current",
                LetterState::Done => "letter-tile done",
                LetterState::Pending => "letter-tile",
            },
        })
        .collect();

    let status = if saying_word {
        SpellingStatus::SayingWord
    } else if state.playing {
        let letter = state
            .cursor
            .and_then(|index| view.letters.get(index))
            .map(|(letter, _)| *letter);
        SpellingStatus::Letter(letter)
    } else if state.cursor.is_none() {
        SpellingStatus::Prompt
    } else {
        SpellingStatus::Idle
    };

    SpellingPlaybackVm {
        tiles,
        status,
        playing: state.playing,
        show_skip: state.playing && !saying_word,
        progress_percent: state.progress.clamp(0.0, 100.0),
        progress_label: format!("{}% complete", state.rounded_progress()),
    }
}

#[cfg(test)]
mod tests {
    use lesson_core::model::{Difficulty, WordId};
    use lesson_core::sequencer::SpellingSequencer;

    use super::*;

    fn view_of(sequencer: &SpellingSequencer) -> SpellingView {
        SpellingView {
            snapshot: sequencer.snapshot(),
            letters: sequencer
                .letters()
                .iter()
                .enumerate()
                .map(|(index, letter)| (*letter, sequencer.letter_state(index)))
                .collect(),
        }
    }

    #[test]
    fn builtin_card_is_not_removable() {
        let word = SpellingWord::new(WordId::new("1"), "apple", Difficulty::Medium, "Fruits")
            .unwrap();
        let card = map_spelling_card(&word);
        assert_eq!(card.word, "APPLE");
        assert_eq!(card.details_label, "5 letters • Fruits");
        assert_eq!(card.difficulty_class, "badge medium");
        assert!(!card.removable);
    }

    #[test]
    fn custom_card_is_removable() {
        let word = SpellingWord::custom(WordId::custom(1_700_000_000_000), "kite").unwrap();
        let card = map_spelling_card(&word);
        assert!(card.removable);
        assert_eq!(card.difficulty, "Easy");
    }

    #[test]
    fn add_button_needs_two_letters() {
        assert!(!can_add_word(""));
        assert!(!can_add_word(" a "));
        assert!(can_add_word("ab"));
    }

    #[test]
    fn fresh_word_prompts_to_start() {
        let sequencer = SpellingSequencer::new("CAT");
        let vm = map_spelling_playback(&view_of(&sequencer));
        assert_eq!(vm.status, SpellingStatus::Prompt);
        assert!(!vm.show_skip);
        assert_eq!(vm.tiles.len(), 3);
        assert!(vm.tiles.iter().all(|tile| tile.class == "letter-tile"));
    }

    #[test]
    fn spelling_shows_current_letter_and_skip() {
        let mut sequencer = SpellingSequencer::new("CAT");
        let _ = sequencer.start();
        let vm = map_spelling_playback(&view_of(&sequencer));
        assert_eq!(vm.status, SpellingStatus::Letter(Some('C')));
        assert!(vm.show_skip);
        assert_eq!(vm.tiles[0].class, "letter-tile current");
        assert_eq!(vm.progress_label, "25% complete");
    }
}
