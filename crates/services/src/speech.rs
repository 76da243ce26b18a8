//! Capability ports for speech synthesis and speech recognition.
//!
//! Controllers receive both ports at construction and never reach for a
//! platform global. The webview bridge in the UI crate implements them for
//! the desktop shell; [`fakes`] implements them for tests.

use async_trait::async_trait;
use lesson_core::model::VoiceSettings;
use tokio::sync::oneshot;

use crate::error::{NarrationError, RecognitionError};

/// Recognition language.
pub const RECOGNITION_LANG: &str = "en-US";

/// One utterance to speak.
#[derive(Debug)]
pub struct SpeechRequest {
    pub text: String,
    pub voice: VoiceSettings,
    on_start: Option<oneshot::Sender<()>>,
}

impl SpeechRequest {
    #[must_use]
    pub fn new(text: impl Into<String>, voice: VoiceSettings) -> Self {
        Self {
            text: text.into(),
            voice,
            on_start: None,
        }
    }

    /// Ask the backend to signal when audio actually starts.
    #[must_use]
    pub fn notify_start(mut self, tx: oneshot::Sender<()>) -> Self {
        self.on_start = Some(tx);
        self
    }

    /// Backends call this once the utterance begins playing.
    pub fn mark_started(&mut self) {
        if let Some(tx) = self.on_start.take() {
            let _ = tx.send(());
        }
    }

    /// Split off the start notifier so the backend can fire it later.
    pub fn take_start_notifier(&mut self) -> Option<oneshot::Sender<()>> {
        self.on_start.take()
    }
}

/// Text-to-speech capability.
///
/// At most one utterance is active: speaking while another utterance is in
/// flight cancels it, and its future resolves to `NarrationError::Canceled`.
#[async_trait]
pub trait NarrationService: Send + Sync {
    fn is_available(&self) -> bool;

    /// Speak `request.text` and resolve when it has finished.
    ///
    /// # Errors
    ///
    /// Returns `NarrationError::Canceled` when superseded or cancelled, and
    /// `NarrationError::Platform` when the backend reports a failure.
    async fn speak(&self, request: SpeechRequest) -> Result<(), NarrationError>;

    /// Stop whatever is being spoken.
    fn cancel(&self);
}

/// Speech-to-text capability. Each call to [`RecognitionService::recognize`]
/// is one single-shot listening attempt.
#[async_trait]
pub trait RecognitionService: Send + Sync {
    fn is_available(&self) -> bool;

    /// Listen for one phrase. Resolves to `Ok(None)` when recognition ended
    /// without a result (silence, timeout or [`RecognitionService::stop`]).
    ///
    /// # Errors
    ///
    /// Returns `RecognitionError` when the capability is missing, the platform
    /// reports a failure or the result cannot be read.
    async fn recognize(&self) -> Result<Option<String>, RecognitionError>;

    fn stop(&self);
}

/// Backend for platforms without any speech support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpeech;

#[async_trait]
impl NarrationService for NoSpeech {
    fn is_available(&self) -> bool {
        false
    }

    async fn speak(&self, _request: SpeechRequest) -> Result<(), NarrationError> {
        Err(NarrationError::Unavailable)
    }

    fn cancel(&self) {}
}

#[async_trait]
impl RecognitionService for NoSpeech {
    fn is_available(&self) -> bool {
        false
    }

    async fn recognize(&self) -> Result<Option<String>, RecognitionError> {
        Err(RecognitionError::Unavailable)
    }

    fn stop(&self) {}
}

pub mod fakes {
    //! In-process speech backends driven by the tokio clock.

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use lesson_core::model::VoiceSettings;
    use tokio::sync::watch;

    use super::{NarrationService, RecognitionService, SpeechRequest};
    use crate::error::{NarrationError, RecognitionError};

    /// What the fake narrator was asked to say.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Spoken {
        pub text: String,
        pub voice: VoiceSettings,
    }

    #[derive(Debug, Default)]
    struct NarratorLog {
        started: Vec<Spoken>,
        completed: Vec<String>,
        fail_next: Option<String>,
    }

    /// Narrator whose utterances take a fixed time on the tokio clock.
    #[derive(Debug, Clone)]
    pub struct FakeNarrator {
        per_utterance: Duration,
        log: Arc<Mutex<NarratorLog>>,
        generation: Arc<watch::Sender<u64>>,
    }

    impl FakeNarrator {
        #[must_use]
        pub fn new(per_utterance: Duration) -> Self {
            Self {
                per_utterance,
                log: Arc::new(Mutex::new(NarratorLog::default())),
                generation: Arc::new(watch::Sender::new(0)),
            }
        }

        /// Every utterance started, in order.
        #[must_use]
        pub fn spoken(&self) -> Vec<Spoken> {
            self.log.lock().map(|log| log.started.clone()).unwrap_or_default()
        }

        #[must_use]
        pub fn spoken_texts(&self) -> Vec<String> {
            self.spoken().into_iter().map(|s| s.text).collect()
        }

        /// Utterances that played to the end.
        #[must_use]
        pub fn completed(&self) -> Vec<String> {
            self.log
                .lock()
                .map(|log| log.completed.clone())
                .unwrap_or_default()
        }

        /// The next utterance fails with a platform error.
        pub fn fail_next(&self, message: &str) {
            if let Ok(mut log) = self.log.lock() {
                log.fail_next = Some(message.to_owned());
            }
        }

        fn bump(&self) -> u64 {
            let mut current = 0;
            self.generation.send_modify(|g| {
                *g += 1;
                current = *g;
            });
            current
        }
    }

    impl Default for FakeNarrator {
        fn default() -> Self {
            Self::new(Duration::from_millis(300))
        }
    }

    #[async_trait]
    impl NarrationService for FakeNarrator {
        fn is_available(&self) -> bool {
            true
        }

        async fn speak(&self, mut request: SpeechRequest) -> Result<(), NarrationError> {
            let mine = self.bump();
            let failure = {
                let mut log = self
                    .log
                    .lock()
                    .map_err(|e| NarrationError::Platform(e.to_string()))?;
                log.started.push(Spoken {
                    text: request.text.clone(),
                    voice: request.voice,
                });
                log.fail_next.take()
            };
            if let Some(message) = failure {
                return Err(NarrationError::Platform(message));
            }
            request.mark_started();

            let mut rx = self.generation.subscribe();
            tokio::select! {
                () = tokio::time::sleep(self.per_utterance) => {
                    if let Ok(mut log) = self.log.lock() {
                        log.completed.push(request.text);
                    }
                    Ok(())
                }
                _ = rx.wait_for(|g| *g != mine) => Err(NarrationError::Canceled),
            }
        }

        fn cancel(&self) {
            self.bump();
        }
    }

    /// One scripted listening attempt.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Heard {
        Phrase(String),
        Silence,
        Failure(RecognitionError),
    }

    #[derive(Debug, Default)]
    struct RecognizerState {
        script: VecDeque<Heard>,
        attempts: usize,
        stops: usize,
    }

    /// Recognizer that replays queued outcomes after a fixed delay.
    ///
    /// With an empty script an attempt stays open until `stop` is called.
    #[derive(Debug, Clone)]
    pub struct ScriptedRecognizer {
        available: bool,
        delay: Duration,
        state: Arc<Mutex<RecognizerState>>,
        stopped: Arc<watch::Sender<u64>>,
    }

    impl ScriptedRecognizer {
        #[must_use]
        pub fn new(delay: Duration) -> Self {
            Self {
                available: true,
                delay,
                state: Arc::new(Mutex::new(RecognizerState::default())),
                stopped: Arc::new(watch::Sender::new(0)),
            }
        }

        #[must_use]
        pub fn unavailable() -> Self {
            Self {
                available: false,
                ..Self::new(Duration::ZERO)
            }
        }

        pub fn push(&self, heard: Heard) {
            if let Ok(mut state) = self.state.lock() {
                state.script.push_back(heard);
            }
        }

        pub fn hear(&self, phrase: &str) {
            self.push(Heard::Phrase(phrase.to_owned()));
        }

        #[must_use]
        pub fn attempts(&self) -> usize {
            self.state.lock().map(|s| s.attempts).unwrap_or_default()
        }

        #[must_use]
        pub fn stops(&self) -> usize {
            self.state.lock().map(|s| s.stops).unwrap_or_default()
        }
    }

    #[async_trait]
    impl RecognitionService for ScriptedRecognizer {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn recognize(&self) -> Result<Option<String>, RecognitionError> {
            if !self.available {
                return Err(RecognitionError::Unavailable);
            }
            let next = {
                let mut state = self
                    .state
                    .lock()
                    .map_err(|e| RecognitionError::Platform(e.to_string()))?;
                state.attempts += 1;
                state.script.pop_front()
            };

            let mut rx = self.stopped.subscribe();
            let seen = *rx.borrow();
            let Some(heard) = next else {
                let _ = rx.wait_for(|g| *g != seen).await;
                return Ok(None);
            };

            tokio::select! {
                () = tokio::time::sleep(self.delay) => match heard {
                    Heard::Phrase(text) => Ok(Some(text)),
                    Heard::Silence => Ok(None),
                    Heard::Failure(err) => Err(err),
                },
                _ = rx.wait_for(|g| *g != seen) => Ok(None),
            }
        }

        fn stop(&self) {
            if let Ok(mut state) = self.state.lock() {
                state.stops += 1;
            }
            self.stopped.send_modify(|g| *g += 1);
        }
    }
}
