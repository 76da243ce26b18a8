use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use services::{
    NarrationError, NarrationService, RECOGNITION_LANG, RecognitionError, RecognitionService,
    SpeechRequest,
};
use tokio::sync::{mpsc, oneshot, watch};

/// Message sent from Rust to the webview script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpeechCommand {
    Speak {
        id: u64,
        text: String,
        rate: f32,
        pitch: f32,
        volume: f32,
    },
    CancelSpeech,
    Listen {
        id: u64,
        lang: String,
    },
    StopListening,
}

/// Message posted by the webview script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BridgeEvent {
    Ready { synthesis: bool, recognition: bool },
    SpeechStart { id: u64 },
    SpeechEnd { id: u64 },
    SpeechError { id: u64, message: String },
    RecognitionResult { id: u64, transcript: String },
    Malformed { id: u64, message: String },
    RecognitionError { id: u64, message: String },
    RecognitionEnd { id: u64 },
}

struct PendingUtterance {
    on_start: Option<oneshot::Sender<()>>,
    done: oneshot::Sender<Result<(), NarrationError>>,
}

struct PendingListen {
    id: u64,
    outcome: Option<Result<Option<String>, RecognitionError>>,
    done: oneshot::Sender<Result<Option<String>, RecognitionError>>,
}

struct Inner {
    commands: mpsc::UnboundedSender<SpeechCommand>,
    receiver: Mutex<Option<mpsc::UnboundedReceiver<SpeechCommand>>>,
    next_id: AtomicU64,
    synthesis: AtomicBool,
    recognition: watch::Sender<bool>,
    utterances: Mutex<HashMap<u64, PendingUtterance>>,
    listening: Mutex<Option<PendingListen>>,
}

/// Speech ports backed by the webview's `speechSynthesis` and
/// `SpeechRecognition` objects.
///
/// Ports push [`SpeechCommand`]s onto a queue; the `SpeechHost` component
/// forwards them to the script and feeds [`BridgeEvent`]s back through
/// [`WebSpeech::handle_event`].
#[derive(Clone)]
pub struct WebSpeech {
    inner: Arc<Inner>,
}

impl Default for WebSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl WebSpeech {
    #[must_use]
    pub fn new() -> Self {
        let (commands, receiver) = mpsc::unbounded_channel();
        let (recognition, _) = watch::channel(false);
        Self {
            inner: Arc::new(Inner {
                commands,
                receiver: Mutex::new(Some(receiver)),
                next_id: AtomicU64::new(1),
                // Assumed until the script reports otherwise.
                synthesis: AtomicBool::new(true),
                recognition,
                utterances: Mutex::new(HashMap::new()),
                listening: Mutex::new(None),
            }),
        }
    }

    /// The command queue, handed out once to the host component.
    #[must_use]
    pub fn take_commands(&self) -> Option<mpsc::UnboundedReceiver<SpeechCommand>> {
        lock(&self.inner.receiver).take()
    }

    /// Recognition support as last reported by the webview.
    #[must_use]
    pub fn recognition_availability(&self) -> watch::Receiver<bool> {
        self.inner.recognition.subscribe()
    }

    pub fn handle_event(&self, event: BridgeEvent) {
        match event {
            BridgeEvent::Ready {
                synthesis,
                recognition,
            } => {
                tracing::info!(synthesis, recognition, "speech bridge ready");
                self.inner.synthesis.store(synthesis, Ordering::Release);
                self.inner.recognition.send_replace(recognition);
            }
            BridgeEvent::SpeechStart { id } => {
                let notifier = lock(&self.inner.utterances)
                    .get_mut(&id)
                    .and_then(|pending| pending.on_start.take());
                if let Some(tx) = notifier {
                    let _ = tx.send(());
                }
            }
            BridgeEvent::SpeechEnd { id } => self.finish_utterance(id, Ok(())),
            BridgeEvent::SpeechError { id, message } => {
                let error = match message.as_str() {
                    "interrupted" | "canceled" => NarrationError::Canceled,
                    _ => {
                        tracing::warn!(id, %message, "narration failed");
                        NarrationError::Platform(message)
                    }
                };
                self.finish_utterance(id, Err(error));
            }
            BridgeEvent::RecognitionResult { id, transcript } => {
                self.record_outcome(id, Ok(Some(transcript)));
            }
            BridgeEvent::Malformed { id, message } => {
                tracing::warn!(id, %message, "unreadable recognition result");
                self.record_outcome(id, Err(RecognitionError::MalformedResult(message)));
            }
            BridgeEvent::RecognitionError { id, message } => {
                tracing::warn!(id, %message, "recognition failed");
                self.record_outcome(id, Err(RecognitionError::Platform(message)));
            }
            BridgeEvent::RecognitionEnd { id } => {
                let mut listening = lock(&self.inner.listening);
                match listening.take() {
                    Some(pending) if pending.id == id => {
                        let _ = pending.done.send(pending.outcome.unwrap_or(Ok(None)));
                    }
                    other => {
                        *listening = other;
                        tracing::debug!(id, "dropping stale recognition end");
                    }
                }
            }
        }
    }

    /// The script is gone: report both capabilities missing and fail every
    /// pending request.
    pub fn detach(&self) {
        tracing::warn!("speech bridge detached");
        self.inner.synthesis.store(false, Ordering::Release);
        self.inner.recognition.send_replace(false);
        for (_, pending) in lock(&self.inner.utterances).drain() {
            let _ = pending.done.send(Err(NarrationError::Unavailable));
        }
        if let Some(pending) = lock(&self.inner.listening).take() {
            let _ = pending.done.send(Err(RecognitionError::Unavailable));
        }
    }

    fn next_id(&self) -> u64 {
        self.inner.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn send(&self, command: SpeechCommand) -> bool {
        self.inner.commands.send(command).is_ok()
    }

    fn finish_utterance(&self, id: u64, result: Result<(), NarrationError>) {
        match lock(&self.inner.utterances).remove(&id) {
            Some(pending) => {
                let _ = pending.done.send(result);
            }
            None => tracing::debug!(id, "dropping stale narration event"),
        }
    }

    fn cancel_pending(&self) {
        for (_, pending) in lock(&self.inner.utterances).drain() {
            let _ = pending.done.send(Err(NarrationError::Canceled));
        }
    }

    fn record_outcome(&self, id: u64, outcome: Result<Option<String>, RecognitionError>) {
        match lock(&self.inner.listening).as_mut() {
            Some(pending) if pending.id == id => {
                // The first outcome of an attempt wins.
                if pending.outcome.is_none() {
                    pending.outcome = Some(outcome);
                }
            }
            _ => tracing::debug!(id, "dropping stale recognition event"),
        }
    }
}

#[async_trait]
impl NarrationService for WebSpeech {
    fn is_available(&self) -> bool {
        self.inner.synthesis.load(Ordering::Acquire)
    }

    async fn speak(&self, mut request: SpeechRequest) -> Result<(), NarrationError> {
        if !NarrationService::is_available(self) {
            return Err(NarrationError::Unavailable);
        }
        self.cancel_pending();
        let id = self.next_id();
        let (done, rx) = oneshot::channel();
        lock(&self.inner.utterances).insert(
            id,
            PendingUtterance {
                on_start: request.take_start_notifier(),
                done,
            },
        );
        let command = SpeechCommand::Speak {
            id,
            text: request.text,
            rate: request.voice.rate,
            pitch: request.voice.pitch,
            volume: request.voice.volume,
        };
        if !self.send(command) {
            lock(&self.inner.utterances).remove(&id);
            return Err(NarrationError::Unavailable);
        }
        rx.await.unwrap_or(Err(NarrationError::Canceled))
    }

    fn cancel(&self) {
        self.cancel_pending();
        self.send(SpeechCommand::CancelSpeech);
    }
}

#[async_trait]
impl RecognitionService for WebSpeech {
    fn is_available(&self) -> bool {
        *self.inner.recognition.borrow()
    }

    async fn recognize(&self) -> Result<Option<String>, RecognitionError> {
        if !RecognitionService::is_available(self) {
            return Err(RecognitionError::Unavailable);
        }
        let id = self.next_id();
        let (done, rx) = oneshot::channel();
        *lock(&self.inner.listening) = Some(PendingListen {
            id,
            outcome: None,
            done,
        });
        let command = SpeechCommand::Listen {
            id,
            lang: RECOGNITION_LANG.to_string(),
        };
        if !self.send(command) {
            lock(&self.inner.listening).take();
            return Err(RecognitionError::Unavailable);
        }
        rx.await.unwrap_or(Ok(None))
    }

    fn stop(&self) {
        self.send(SpeechCommand::StopListening);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
