use std::sync::{Arc, Mutex, Weak};

use lesson_core::model::{LessonItem, VoiceSettings};
use lesson_core::session::{PracticeSession, SessionEffect, SessionError, SessionSnapshot};
use tokio::sync::watch;

use crate::error::{NarrationError, RecognitionError};
use crate::speech::{NarrationService, RecognitionService, SpeechRequest};
use crate::tasks::{TaskGroup, TaskSlot};

/// Drives a [`PracticeSession`] against the speech ports with real timers.
///
/// Every public method applies one transition and runs the resulting effects
/// on the tokio runtime; the latest state is published on a watch channel.
/// Call [`PracticeController::teardown`] when the page goes away.
#[derive(Clone)]
pub struct PracticeController {
    shared: Arc<Shared>,
}

struct Shared {
    narrator: Arc<dyn NarrationService>,
    recognizer: Arc<dyn RecognitionService>,
    voice: VoiceSettings,
    state: Mutex<Inner>,
    snapshot: watch::Sender<SessionSnapshot>,
}

struct Inner {
    session: PracticeSession,
    narration: TaskSlot,
    listening: TaskSlot,
    timers: TaskGroup,
}

impl PracticeController {
    /// Build a controller over `items`, spoken with `VoiceSettings::ITEM`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `items` is empty.
    pub fn new(
        items: Vec<LessonItem>,
        narrator: Arc<dyn NarrationService>,
        recognizer: Arc<dyn RecognitionService>,
    ) -> Result<Self, SessionError> {
        let mut session = PracticeSession::new(items)?;
        session.set_recognition_available(recognizer.is_available());
        let (snapshot, _) = watch::channel(session.snapshot());
        Ok(Self {
            shared: Arc::new(Shared {
                narrator,
                recognizer,
                voice: VoiceSettings::ITEM,
                state: Mutex::new(Inner {
                    session,
                    narration: TaskSlot::default(),
                    listening: TaskSlot::default(),
                    timers: TaskGroup::default(),
                }),
                snapshot,
            }),
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.shared.snapshot.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.shared.snapshot.subscribe()
    }

    pub fn mount(&self) {
        tracing::info!(items = self.snapshot().total, "practice session mounted");
        self.shared.update(PracticeSession::mount);
    }

    pub fn hear_pronunciation(&self) {
        self.shared.update(PracticeSession::hear_pronunciation);
    }

    pub fn next(&self) {
        self.shared.update(PracticeSession::next);
    }

    pub fn prev(&self) {
        self.shared.update(PracticeSession::prev);
    }

    pub fn restart(&self) {
        self.shared.update(PracticeSession::restart);
    }

    pub fn set_auto_advance(&self, on: bool) {
        self.shared.update(|session| session.set_auto_advance(on));
    }

    pub fn start_listening(&self) {
        self.shared.update(PracticeSession::start_listening);
    }

    pub fn stop_listening(&self) {
        self.shared.update(PracticeSession::stop_listening);
    }

    /// Recognition support can be probed after the controller exists.
    pub fn set_recognition_available(&self, available: bool) {
        self.shared.update(|session| {
            session.set_recognition_available(available);
            Vec::new()
        });
    }

    /// Cancel narration, listening and every pending advance.
    pub fn teardown(&self) {
        self.shared.update(PracticeSession::teardown);
        if let Ok(mut inner) = self.shared.state.lock() {
            inner.timers.abort_all();
            inner.narration.abort();
            inner.listening.abort();
        }
        tracing::info!("practice session torn down");
    }
}

impl Shared {
    fn update(self: &Arc<Self>, transition: impl FnOnce(&mut PracticeSession) -> Vec<SessionEffect>) {
        let Ok(mut inner) = self.state.lock() else {
            tracing::warn!("practice state lock poisoned");
            return;
        };
        let before = inner.session.index();
        let effects = transition(&mut inner.session);
        if inner.session.index() != before {
            tracing::debug!(from = before, to = inner.session.index(), "practice item changed");
        }
        self.snapshot.send_replace(inner.session.snapshot());
        for effect in effects {
            self.run(&mut inner, effect);
        }
    }

    fn run(self: &Arc<Self>, inner: &mut Inner, effect: SessionEffect) {
        match effect {
            SessionEffect::Narrate(text) => {
                let narrator = Arc::clone(&self.narrator);
                let request = SpeechRequest::new(text, self.voice);
                // the port supersedes the previous utterance itself
                inner.narration.supersede(async move {
                    match narrator.speak(request).await {
                        Ok(()) | Err(NarrationError::Canceled) => {}
                        Err(err) => tracing::warn!(%err, "item narration failed"),
                    }
                });
            }
            SessionEffect::CancelNarration => {
                self.narrator.cancel();
                inner.narration.abort();
            }
            SessionEffect::StartRecognition => {
                let recognizer = Arc::clone(&self.recognizer);
                let weak = Arc::downgrade(self);
                inner.listening.replace(async move {
                    let outcome = recognizer.recognize().await;
                    deliver_recognition(&weak, outcome);
                });
            }
            SessionEffect::StopRecognition => {
                self.recognizer.stop();
                inner.listening.abort();
            }
            SessionEffect::Schedule { ticket, delay } => {
                tracing::debug!(trigger = ?ticket.trigger, ?delay, "auto-advance scheduled");
                let weak = Arc::downgrade(self);
                inner.timers.spawn(async move {
                    tokio::time::sleep(delay).await;
                    if let Some(shared) = weak.upgrade() {
                        tracing::debug!(trigger = ?ticket.trigger, "auto-advance timer fired");
                        shared.update(|session| session.on_timer(ticket));
                    }
                });
            }
        }
    }
}

fn deliver_recognition(weak: &Weak<Shared>, outcome: Result<Option<String>, RecognitionError>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    shared.update(|session| {
        let effects = match outcome {
            Ok(Some(transcript)) => {
                tracing::debug!(%transcript, "recognition result");
                session.on_recognition_result(&transcript)
            }
            Ok(None) => Vec::new(),
            Err(RecognitionError::MalformedResult(detail)) => {
                tracing::warn!(%detail, "unreadable recognition result");
                session.on_malformed_result();
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(%err, "speech recognition error");
                session.on_recognition_error();
                Vec::new()
            }
        };
        session.on_recognition_end();
        effects
    });
}
