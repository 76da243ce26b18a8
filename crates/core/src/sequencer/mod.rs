//! Timed narration of a multi-part script with a highlight cursor.
//!
//! Rhyme playback estimates the cursor from elapsed time; spelling advances
//! it on each narration completion.

pub mod rhyme;
pub mod spelling;

pub use rhyme::{
    MIN_POLL_INTERVAL, MS_PER_CHAR, RhymeEffect, RhymeFrame, RhymePlayback, RhymeTimeline,
};
pub use spelling::{
    BEFORE_WORD_PAUSE, LETTER_GAP, LetterState, SKIP_PAUSE, SKIP_PROGRESS, SpellingEffect,
    SpellingSequencer, SpellingSnapshot, SpellingWait,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencerPhase {
    #[default]
    Idle,
    NarratingTokens,
    Pausing,
    NarratingSummary,
    Done,
}

/// Identifies one narration or wait issued by a sequencer. Callbacks that
/// carry a ticket from before the last start, stop or reset are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Cursor, progress and phase shared by both sequencers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SequencerState {
    pub cursor: Option<usize>,
    pub progress: f32,
    pub phase: SequencerPhase,
    /// Narration is in flight or pending.
    pub playing: bool,
}

impl SequencerState {
    #[must_use]
    pub fn rounded_progress(&self) -> u32 {
        // progress is kept within 0..=100
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = self.progress.round().clamp(0.0, 100.0) as u32;
        value
    }
}

#[derive(Debug, Default)]
struct Generations(u64);

impl Generations {
    fn bump(&mut self) -> Ticket {
        self.0 += 1;
        Ticket(self.0)
    }

    fn current(&self) -> Ticket {
        Ticket(self.0)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.0
    }
}
