use std::time::Duration;

use super::{Generations, SequencerPhase, SequencerState, Ticket};

/// Pause after each letter before the next one is spoken.
pub const LETTER_GAP: Duration = Duration::from_millis(800);
/// Pause after the last letter before the whole word is spoken.
pub const BEFORE_WORD_PAUSE: Duration = Duration::from_millis(1000);
/// Pause between "skip to word" and the word narration.
pub const SKIP_PAUSE: Duration = Duration::from_millis(500);
pub const SKIP_PROGRESS: f32 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellingWait {
    LetterGap,
    BeforeWord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpellingEffect {
    SpeakLetter {
        ticket: Ticket,
        index: usize,
        letter: String,
    },
    SpeakWord {
        ticket: Ticket,
        word: String,
    },
    Wait {
        ticket: Ticket,
        step: SpellingWait,
        delay: Duration,
    },
    CancelNarration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Current,
    Done,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpellingSnapshot {
    pub state: SequencerState,
    pub saying_word: bool,
    pub letters_spelled: bool,
}

/// Letter-by-letter spelling driven by narration completions.
///
/// Each step hands out a [`Ticket`]; completions and elapsed waits are only
/// accepted for the ticket of the most recent step.
#[derive(Debug)]
pub struct SpellingSequencer {
    word: String,
    letters: Vec<char>,
    state: SequencerState,
    spoken_count: usize,
    letters_spelled: bool,
    saying_word: bool,
    generations: Generations,
}

impl SpellingSequencer {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        let letters = word.chars().collect();
        Self {
            word,
            letters,
            state: SequencerState::default(),
            spoken_count: 0,
            letters_spelled: false,
            saying_word: false,
            generations: Generations::default(),
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub fn state(&self) -> SequencerState {
        self.state
    }

    #[must_use]
    pub fn is_saying_word(&self) -> bool {
        self.saying_word
    }

    #[must_use]
    pub fn snapshot(&self) -> SpellingSnapshot {
        SpellingSnapshot {
            state: self.state,
            saying_word: self.saying_word,
            letters_spelled: self.letters_spelled,
        }
    }

    #[must_use]
    pub fn letter_state(&self, index: usize) -> LetterState {
        if self.state.cursor == Some(index) {
            LetterState::Current
        } else if self.letters_spelled || index < self.spoken_count {
            LetterState::Done
        } else {
            LetterState::Pending
        }
    }

    pub fn start(&mut self) -> Vec<SpellingEffect> {
        let mut effects = self.cancel_in_flight();
        self.spoken_count = 0;
        self.letters_spelled = false;
        self.saying_word = false;
        self.state = SequencerState {
            playing: true,
            ..SequencerState::default()
        };
        let ticket = self.generations.bump();
        if self.letters.is_empty() {
            effects.extend(self.speak_word(ticket));
        } else {
            effects.push(self.speak_letter(ticket, 0));
        }
        effects
    }

    /// Letter `index` finished speaking.
    pub fn letter_spoken(&mut self, ticket: Ticket, index: usize) -> Vec<SpellingEffect> {
        if !self.generations.is_current(ticket)
            || self.state.phase != SequencerPhase::NarratingTokens
            || self.state.cursor != Some(index)
        {
            return Vec::new();
        }
        self.spoken_count = index + 1;
        self.state.cursor = None;
        self.state.phase = SequencerPhase::Pausing;
        let ticket = self.generations.bump();
        if self.spoken_count < self.letters.len() {
            vec![SpellingEffect::Wait {
                ticket,
                step: SpellingWait::LetterGap,
                delay: LETTER_GAP,
            }]
        } else {
            self.letters_spelled = true;
            self.saying_word = true;
            vec![SpellingEffect::Wait {
                ticket,
                step: SpellingWait::BeforeWord,
                delay: BEFORE_WORD_PAUSE,
            }]
        }
    }

    pub fn wait_elapsed(&mut self, ticket: Ticket, step: SpellingWait) -> Vec<SpellingEffect> {
        if !self.generations.is_current(ticket) || self.state.phase != SequencerPhase::Pausing {
            return Vec::new();
        }
        let ticket = self.generations.bump();
        match step {
            SpellingWait::LetterGap => vec![self.speak_letter(ticket, self.spoken_count)],
            SpellingWait::BeforeWord => self.speak_word(ticket),
        }
    }

    pub fn word_spoken(&mut self, ticket: Ticket) -> Vec<SpellingEffect> {
        if !self.generations.is_current(ticket)
            || self.state.phase != SequencerPhase::NarratingSummary
        {
            return Vec::new();
        }
        self.saying_word = false;
        self.state = SequencerState {
            cursor: None,
            progress: 100.0,
            phase: SequencerPhase::Done,
            playing: false,
        };
        Vec::new()
    }

    /// A letter or word narration failed; playback stops where it is.
    pub fn narration_failed(&mut self, ticket: Ticket) -> Vec<SpellingEffect> {
        if !self.generations.is_current(ticket) {
            return Vec::new();
        }
        self.generations.bump();
        self.saying_word = false;
        self.state.cursor = None;
        self.state.playing = false;
        self.state.phase = SequencerPhase::Idle;
        Vec::new()
    }

    /// Abandon the remaining letters and say the whole word after a short pause.
    pub fn skip_to_word(&mut self) -> Vec<SpellingEffect> {
        let mut effects = self.cancel_in_flight();
        if effects.is_empty() {
            effects.push(SpellingEffect::CancelNarration);
        }
        let ticket = self.generations.bump();
        self.letters_spelled = true;
        self.saying_word = true;
        self.state = SequencerState {
            cursor: None,
            progress: SKIP_PROGRESS,
            phase: SequencerPhase::Pausing,
            playing: true,
        };
        effects.push(SpellingEffect::Wait {
            ticket,
            step: SpellingWait::BeforeWord,
            delay: SKIP_PAUSE,
        });
        effects
    }

    /// Cancel narration and pending pauses; cursor and progress stay.
    pub fn stop(&mut self) -> Vec<SpellingEffect> {
        let effects = self.cancel_in_flight();
        self.generations.bump();
        self.saying_word = false;
        self.state.playing = false;
        if self.state.phase != SequencerPhase::Done {
            self.state.phase = SequencerPhase::Idle;
        }
        effects
    }

    pub fn reset(&mut self) -> Vec<SpellingEffect> {
        self.generations.bump();
        self.spoken_count = 0;
        self.letters_spelled = false;
        self.saying_word = false;
        self.state = SequencerState::default();
        vec![SpellingEffect::CancelNarration]
    }

    fn cancel_in_flight(&self) -> Vec<SpellingEffect> {
        if self.state.playing {
            vec![SpellingEffect::CancelNarration]
        } else {
            Vec::new()
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn speak_letter(&mut self, ticket: Ticket, index: usize) -> SpellingEffect {
        let n = self.letters.len();
        self.state.cursor = Some(index);
        self.state.phase = SequencerPhase::NarratingTokens;
        self.state.progress = (index + 1) as f32 / (n + 1) as f32 * 100.0;
        let letter = self
            .letters
            .get(index)
            .map(|c| c.to_lowercase().collect())
            .unwrap_or_default();
        SpellingEffect::SpeakLetter {
            ticket,
            index,
            letter,
        }
    }

    fn speak_word(&mut self, ticket: Ticket) -> Vec<SpellingEffect> {
        self.saying_word = true;
        self.letters_spelled = true;
        self.state.cursor = None;
        self.state.phase = SequencerPhase::NarratingSummary;
        vec![SpellingEffect::SpeakWord {
            ticket,
            word: self.word.clone(),
        }]
    }
}
