use lesson_core::model::{Rhyme, RhymeToken};
use lesson_core::sequencer::SequencerState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordHighlight {
    Current,
    Spoken,
    Upcoming,
}

impl WordHighlight {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Current => "rhyme-word current",
            Self::Spoken => "rhyme-word spoken",
            Self::Upcoming => "rhyme-word",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RhymeWordVm {
    pub text: String,
    pub highlight: WordHighlight,
    pub line_end: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RhymeCardVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration_label: String,
    pub difficulty: String,
    pub difficulty_class: &'static str,
}

#[must_use]
pub fn map_rhyme_card(rhyme: &Rhyme) -> RhymeCardVm {
    RhymeCardVm {
        id: rhyme.id.as_str().to_string(),
        title: rhyme.title.clone(),
        description: rhyme.description.clone(),
        duration_label: rhyme.duration_label.clone(),
        difficulty: rhyme.difficulty.clone(),
        difficulty_class: difficulty_class(&rhyme.difficulty),
    }
}

#[must_use]
pub fn difficulty_class(label: &str) -> &'static str {
    match label {
        "Easy" => "badge easy",
        "Medium" => "badge medium",
        "Hard" => "badge hard",
        _ => "badge",
    }
}

/// Highlight of every token for the current cursor.
#[must_use]
pub fn map_rhyme_words(tokens: &[RhymeToken], state: &SequencerState) -> Vec<RhymeWordVm> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let highlight = match state.cursor {
                Some(cursor) if index == cursor => WordHighlight::Current,
                Some(cursor) if index < cursor => WordHighlight::Spoken,
                _ => WordHighlight::Upcoming,
            };
            RhymeWordVm {
                text: token.text.clone(),
                highlight,
                line_end: token.line_end,
            }
        })
        .collect()
}

#[must_use]
pub fn progress_label(state: &SequencerState) -> String {
    format!("{}% complete", state.rounded_progress())
}

#[cfg(test)]
mod tests {
    use lesson_core::model::tokenize;
    use lesson_core::sequencer::SequencerState;

    use super::*;

    #[test]
    fn cursor_splits_spoken_current_and_upcoming() {
        let tokens = tokenize("Twinkle twinkle little star\nHow I wonder");
        let state = SequencerState {
            cursor: Some(2),
            progress: 41.6,
            ..SequencerState::default()
        };
        let words = map_rhyme_words(&tokens, &state);
        assert_eq!(words.len(), 7);
        assert_eq!(words[0].highlight, WordHighlight::Spoken);
        assert_eq!(words[2].highlight, WordHighlight::Current);
        assert_eq!(words[3].highlight, WordHighlight::Upcoming);
        assert!(words[3].line_end);
        assert_eq!(progress_label(&state), "42% complete");
    }

    #[test]
    fn no_cursor_leaves_every_word_upcoming() {
        let tokens = tokenize("Baa baa black sheep");
        let words = map_rhyme_words(&tokens, &SequencerState::default());
        assert!(words.iter().all(|word| word.highlight == WordHighlight::Upcoming));
    }
}
