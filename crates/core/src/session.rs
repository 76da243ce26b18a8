use std::time::Duration;

use thiserror::Error;

use crate::matcher::{matches, normalize};
use crate::model::LessonItem;

/// Delay between switching auto-advance on and moving to the next item.
pub const AUTO_ADVANCE_TOGGLE_DELAY: Duration = Duration::from_millis(2000);

/// Delay between a correct answer and moving to the next item.
pub const AUTO_ADVANCE_MATCH_DELAY: Duration = Duration::from_millis(1500);

pub const MSG_CORRECT: &str = "Correct! Well done!";
pub const MSG_UNSUPPORTED: &str = "Speech recognition not supported on this device";
pub const MSG_RECOGNITION_ERROR: &str = "Speech recognition error. Please try again.";
pub const MSG_MALFORMED_RESULT: &str = "Error processing your speech. Please try again.";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("practice list is empty")]
    Empty,
    #[error("reset index {index} is outside a list of {len} items")]
    ResetOutOfRange { index: usize, len: usize },
}

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackKind {
    #[default]
    None,
    Success,
    Error,
}

/// Message shown to the learner after an answer or a failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            message: message.into(),
        }
    }

    /// Hint shown for a valid but wrong answer.
    #[must_use]
    pub fn try_again(expected: &str) -> Self {
        Self::error(format!("Try again! Say \"{expected}\""))
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.kind == FeedbackKind::None
    }
}

//
// ─── EFFECTS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceTrigger {
    /// Auto-advance was switched on.
    Toggle,
    /// The learner answered correctly with auto-advance on.
    Match,
}

/// Identifies a scheduled advance. Tickets issued before the item changes,
/// the session restarts or is torn down are stale and do nothing when they fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTicket {
    pub trigger: AdvanceTrigger,
    generation: u64,
}

/// Side effects a driver performs on behalf of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Speak the text, superseding any utterance still in flight.
    Narrate(String),
    CancelNarration,
    StartRecognition,
    StopRecognition,
    Schedule { ticket: TimerTicket, delay: Duration },
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Read-only copy of the session state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub index: usize,
    pub total: usize,
    pub item: LessonItem,
    pub listening: bool,
    pub transcript: String,
    pub auto_advance: bool,
    pub feedback: Feedback,
    pub recognition_available: bool,
}

impl SessionSnapshot {
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.total
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Practice state machine shared by every lesson page.
///
/// Holds the index into a fixed item list, the listening flag, the last
/// transcript and feedback. Every operation returns the side effects the
/// caller must perform; nothing here touches speech or timers directly.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    items: Vec<LessonItem>,
    reset_index: usize,
    index: usize,
    listening: bool,
    transcript: String,
    auto_advance: bool,
    feedback: Feedback,
    recognition_available: bool,
    generation: u64,
    active: bool,
}

impl PracticeSession {
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no items are provided.
    pub fn new(items: Vec<LessonItem>) -> Result<Self, SessionError> {
        if items.is_empty() {
            return Err(SessionError::Empty);
        }
        Ok(Self {
            items,
            reset_index: 0,
            index: 0,
            listening: false,
            transcript: String::new(),
            auto_advance: false,
            feedback: Feedback::none(),
            recognition_available: true,
            generation: 0,
            active: false,
        })
    }

    /// Index restored by `restart`; the session also starts there.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ResetOutOfRange` if the index is past the list.
    pub fn with_reset_index(mut self, index: usize) -> Result<Self, SessionError> {
        if index >= self.items.len() {
            return Err(SessionError::ResetOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.reset_index = index;
        self.index = index;
        Ok(self)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn current_item(&self) -> &LessonItem {
        &self.items[self.index]
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    #[must_use]
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.items.len()
    }

    pub fn set_recognition_available(&mut self, available: bool) {
        self.recognition_available = available;
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            index: self.index,
            total: self.items.len(),
            item: self.current_item().clone(),
            listening: self.listening,
            transcript: self.transcript.clone(),
            auto_advance: self.auto_advance,
            feedback: self.feedback.clone(),
            recognition_available: self.recognition_available,
        }
    }

    /// Page shown: narrate the current item.
    pub fn mount(&mut self) -> Vec<SessionEffect> {
        self.active = true;
        vec![self.narrate_current()]
    }

    /// Re-narrate the current item on demand.
    pub fn hear_pronunciation(&mut self) -> Vec<SessionEffect> {
        if !self.active {
            return Vec::new();
        }
        vec![self.narrate_current()]
    }

    /// Move forward one item; a no-op on the last item.
    pub fn next(&mut self) -> Vec<SessionEffect> {
        if self.is_last() {
            return Vec::new();
        }
        self.move_to(self.index + 1)
    }

    /// Move back one item; a no-op on the first item.
    pub fn prev(&mut self) -> Vec<SessionEffect> {
        if self.index == 0 {
            return Vec::new();
        }
        self.move_to(self.index - 1)
    }

    /// Return to the reset index and clear the transcript and feedback.
    pub fn restart(&mut self) -> Vec<SessionEffect> {
        if !self.active {
            return Vec::new();
        }
        if self.index == self.reset_index {
            self.clear_answer();
            self.generation += 1;
            return Vec::new();
        }
        self.move_to(self.reset_index)
    }

    /// Switching on schedules one advance after `AUTO_ADVANCE_TOGGLE_DELAY`.
    /// Switching off drops any advance still pending.
    pub fn set_auto_advance(&mut self, on: bool) -> Vec<SessionEffect> {
        if self.auto_advance == on {
            return Vec::new();
        }
        self.auto_advance = on;
        if !on {
            self.generation += 1;
            return Vec::new();
        }
        if !self.active {
            return Vec::new();
        }
        vec![self.schedule(AdvanceTrigger::Toggle, AUTO_ADVANCE_TOGGLE_DELAY)]
    }

    /// Begin one listening attempt.
    ///
    /// Without recognition support the attempt fails immediately with an
    /// error message and no effect.
    pub fn start_listening(&mut self) -> Vec<SessionEffect> {
        if !self.active || self.listening {
            return Vec::new();
        }
        if !self.recognition_available {
            self.feedback = Feedback::error(MSG_UNSUPPORTED);
            return Vec::new();
        }
        self.listening = true;
        self.clear_answer();
        vec![SessionEffect::StartRecognition]
    }

    pub fn stop_listening(&mut self) -> Vec<SessionEffect> {
        if !self.listening {
            return Vec::new();
        }
        self.listening = false;
        vec![SessionEffect::StopRecognition]
    }

    /// A transcript arrived for the active listening attempt.
    pub fn on_recognition_result(&mut self, raw: &str) -> Vec<SessionEffect> {
        if !self.active || !self.listening {
            return Vec::new();
        }
        self.listening = false;
        self.transcript = normalize(raw);
        let expected = self.current_item().spoken();

        if !matches(&self.transcript, &expected) {
            self.feedback = Feedback::try_again(&expected);
            return Vec::new();
        }

        self.feedback = Feedback::success(MSG_CORRECT);
        if self.auto_advance && !self.is_last() {
            return vec![self.schedule(AdvanceTrigger::Match, AUTO_ADVANCE_MATCH_DELAY)];
        }
        Vec::new()
    }

    /// The platform delivered a result that could not be read.
    pub fn on_malformed_result(&mut self) {
        if !self.active || !self.listening {
            return;
        }
        self.listening = false;
        self.feedback = Feedback::error(MSG_MALFORMED_RESULT);
    }

    pub fn on_recognition_error(&mut self) {
        if !self.active || !self.listening {
            return;
        }
        self.listening = false;
        self.feedback = Feedback::error(MSG_RECOGNITION_ERROR);
    }

    /// Recognition ended, with or without a result. Leaves feedback alone.
    pub fn on_recognition_end(&mut self) {
        self.listening = false;
    }

    /// A scheduled advance fired.
    pub fn on_timer(&mut self, ticket: TimerTicket) -> Vec<SessionEffect> {
        if !self.active || ticket.generation != self.generation {
            return Vec::new();
        }
        self.next()
    }

    /// Page going away: cancel narration and listening and invalidate timers.
    pub fn teardown(&mut self) -> Vec<SessionEffect> {
        if !self.active {
            return Vec::new();
        }
        self.active = false;
        self.generation += 1;
        let mut effects = vec![SessionEffect::CancelNarration];
        if self.listening {
            self.listening = false;
            effects.push(SessionEffect::StopRecognition);
        }
        effects
    }

    fn move_to(&mut self, target: usize) -> Vec<SessionEffect> {
        if !self.active || target >= self.items.len() || target == self.index {
            return Vec::new();
        }
        self.index = target;
        self.clear_answer();
        self.generation += 1;
        let mut effects = vec![self.narrate_current()];
        // An open attempt belongs to the previous item.
        if self.listening {
            self.listening = false;
            effects.push(SessionEffect::StopRecognition);
        }
        effects
    }

    fn clear_answer(&mut self) {
        self.transcript.clear();
        self.feedback = Feedback::none();
    }

    fn narrate_current(&self) -> SessionEffect {
        SessionEffect::Narrate(self.current_item().spoken())
    }

    fn schedule(&self, trigger: AdvanceTrigger, delay: Duration) -> SessionEffect {
        SessionEffect::Schedule {
            ticket: TimerTicket {
                trigger,
                generation: self.generation,
            },
            delay,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
