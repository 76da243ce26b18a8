use std::time::Duration;

use super::{Generations, SequencerPhase, SequencerState, Ticket};
use crate::model::{RhymeToken, tokenize};

/// Heuristic narration length per character of text.
pub const MS_PER_CHAR: u64 = 80;

/// Floor for the highlight polling interval.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Duration-estimated highlight schedule for one block of text.
///
/// The true audio length is unknown, so the whole text is assumed to take
/// `MS_PER_CHAR` per character and tokens are spread evenly over that time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RhymeTimeline {
    token_count: usize,
    estimated_ms: u64,
}

/// Cursor and progress sampled at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RhymeFrame {
    pub cursor: Option<usize>,
    pub progress: f32,
    pub finished: bool,
}

impl RhymeTimeline {
    #[must_use]
    pub fn for_text(text: &str, token_count: usize) -> Self {
        let chars = u64::try_from(text.chars().count()).unwrap_or(u64::MAX);
        Self {
            token_count,
            estimated_ms: chars.saturating_mul(MS_PER_CHAR),
        }
    }

    #[must_use]
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    #[must_use]
    pub fn estimated_duration(&self) -> Duration {
        Duration::from_millis(self.estimated_ms)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn tokens_per_second(&self) -> f64 {
        if self.estimated_ms == 0 {
            return 0.0;
        }
        self.token_count as f64 / (self.estimated_ms as f64 / 1000.0)
    }

    /// Half the per-token interval, but never faster than `MIN_POLL_INTERVAL`.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        if self.token_count == 0 || self.estimated_ms == 0 {
            return MIN_POLL_INTERVAL;
        }
        let half_token_ms = self.estimated_ms / (2 * self.token_count as u64);
        Duration::from_millis(half_token_ms).max(MIN_POLL_INTERVAL)
    }

    /// Expected cursor at `elapsed` since narration started:
    /// `floor(elapsed * tokens / estimated)`. Once that reaches the token
    /// count the cursor clears and progress is 100.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, elapsed: Duration) -> RhymeFrame {
        let finished = RhymeFrame {
            cursor: None,
            progress: 100.0,
            finished: true,
        };
        if self.token_count == 0 || self.estimated_ms == 0 {
            return finished;
        }
        let expected = elapsed.as_millis() * self.token_count as u128 / u128::from(self.estimated_ms);
        match usize::try_from(expected) {
            Ok(cursor) if cursor < self.token_count => RhymeFrame {
                cursor: Some(cursor),
                progress: cursor as f32 / self.token_count as f32 * 100.0,
                finished: false,
            },
            _ => finished,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RhymeEffect {
    /// Speak the whole text, superseding any utterance in flight.
    Narrate { ticket: Ticket, text: String },
    CancelNarration,
    StartPolling { ticket: Ticket, interval: Duration },
    StopPolling,
}

/// Playback state of one rhyme page.
#[derive(Debug)]
pub struct RhymePlayback {
    text: String,
    tokens: Vec<RhymeToken>,
    timeline: RhymeTimeline,
    state: SequencerState,
    generations: Generations,
}

impl RhymePlayback {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = tokenize(&text);
        let timeline = RhymeTimeline::for_text(&text, tokens.len());
        Self {
            text,
            tokens,
            timeline,
            state: SequencerState::default(),
            generations: Generations::default(),
        }
    }

    #[must_use]
    pub fn tokens(&self) -> &[RhymeToken] {
        &self.tokens
    }

    #[must_use]
    pub fn timeline(&self) -> RhymeTimeline {
        self.timeline
    }

    #[must_use]
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Start narrating from the top; restarts if already playing.
    pub fn play(&mut self) -> Vec<RhymeEffect> {
        let ticket = self.generations.bump();
        let mut effects = Vec::new();
        if self.state.playing {
            effects.push(RhymeEffect::CancelNarration);
            effects.push(RhymeEffect::StopPolling);
        }
        self.state.playing = true;
        self.state.phase = SequencerPhase::NarratingTokens;
        effects.push(RhymeEffect::Narrate {
            ticket,
            text: self.text.clone(),
        });
        effects
    }

    /// Narration actually began: highlight the first token and start polling.
    pub fn on_started(&mut self, ticket: Ticket) -> Vec<RhymeEffect> {
        if !self.generations.is_current(ticket) || !self.state.playing {
            return Vec::new();
        }
        self.state.cursor = Some(0);
        vec![RhymeEffect::StartPolling {
            ticket,
            interval: self.timeline.poll_interval(),
        }]
    }

    /// Poll tick with the time elapsed since narration started.
    pub fn tick(&mut self, ticket: Ticket, elapsed: Duration) -> Vec<RhymeEffect> {
        if !self.generations.is_current(ticket)
            || self.state.phase != SequencerPhase::NarratingTokens
        {
            return Vec::new();
        }
        let frame = self.timeline.sample(elapsed);
        self.state.cursor = frame.cursor;
        self.state.progress = frame.progress;
        if frame.finished {
            self.state.phase = SequencerPhase::Done;
            return vec![RhymeEffect::StopPolling];
        }
        Vec::new()
    }

    pub fn on_finished(&mut self, ticket: Ticket) -> Vec<RhymeEffect> {
        if !self.generations.is_current(ticket) {
            return Vec::new();
        }
        self.state = SequencerState {
            cursor: None,
            progress: 100.0,
            phase: SequencerPhase::Done,
            playing: false,
        };
        vec![RhymeEffect::StopPolling]
    }

    pub fn on_failed(&mut self, ticket: Ticket) -> Vec<RhymeEffect> {
        if !self.generations.is_current(ticket) {
            return Vec::new();
        }
        self.state.cursor = None;
        self.state.playing = false;
        self.state.phase = SequencerPhase::Idle;
        vec![RhymeEffect::StopPolling]
    }

    /// Stop narration and polling, keeping the progress reached so far.
    pub fn pause(&mut self) -> Vec<RhymeEffect> {
        if !self.state.playing {
            return Vec::new();
        }
        self.generations.bump();
        self.state.playing = false;
        self.state.phase = SequencerPhase::Idle;
        vec![RhymeEffect::CancelNarration, RhymeEffect::StopPolling]
    }

    pub fn reset(&mut self) -> Vec<RhymeEffect> {
        self.generations.bump();
        self.state = SequencerState::default();
        vec![RhymeEffect::CancelNarration, RhymeEffect::StopPolling]
    }

    #[must_use]
    pub fn current_ticket(&self) -> Ticket {
        self.generations.current()
    }
}
