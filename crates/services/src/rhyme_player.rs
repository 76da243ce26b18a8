use std::sync::{Arc, Mutex};

use lesson_core::model::{RhymeToken, VoiceSettings};
use lesson_core::sequencer::{RhymeEffect, RhymePlayback, SequencerState, Ticket};
use tokio::sync::{oneshot, watch};
use tokio::time::{Instant, MissedTickBehavior};

use crate::speech::{NarrationService, SpeechRequest};
use crate::tasks::{TaskGroup, TaskSlot};

/// Plays one rhyme and moves an estimated highlight cursor across its words.
#[derive(Clone)]
pub struct RhymePlayer {
    shared: Arc<Shared>,
}

struct Shared {
    narrator: Arc<dyn NarrationService>,
    state: Mutex<Inner>,
    published: watch::Sender<SequencerState>,
}

struct Inner {
    playback: RhymePlayback,
    narration: TaskSlot,
    polling: TaskSlot,
    waiters: TaskGroup,
}

impl RhymePlayer {
    #[must_use]
    pub fn new(text: impl Into<String>, narrator: Arc<dyn NarrationService>) -> Self {
        let playback = RhymePlayback::new(text);
        let (published, _) = watch::channel(playback.state());
        Self {
            shared: Arc::new(Shared {
                narrator,
                state: Mutex::new(Inner {
                    playback,
                    narration: TaskSlot::default(),
                    polling: TaskSlot::default(),
                    waiters: TaskGroup::default(),
                }),
                published,
            }),
        }
    }

    #[must_use]
    pub fn tokens(&self) -> Vec<RhymeToken> {
        self.shared
            .state
            .lock()
            .map(|inner| inner.playback.tokens().to_vec())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn state(&self) -> SequencerState {
        *self.shared.published.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SequencerState> {
        self.shared.published.subscribe()
    }

    pub fn play(&self) {
        self.shared.update(RhymePlayback::play);
    }

    /// Stop narration and highlighting, keeping the progress reached.
    pub fn pause(&self) {
        self.shared.update(RhymePlayback::pause);
    }

    pub fn reset(&self) {
        self.shared.update(RhymePlayback::reset);
    }

    pub fn teardown(&self) {
        self.shared.update(RhymePlayback::reset);
        if let Ok(mut inner) = self.shared.state.lock() {
            inner.narration.abort();
            inner.polling.abort();
            inner.waiters.abort_all();
        }
    }
}

impl Shared {
    fn update(self: &Arc<Self>, transition: impl FnOnce(&mut RhymePlayback) -> Vec<RhymeEffect>) {
        let Ok(mut inner) = self.state.lock() else {
            tracing::warn!("rhyme state lock poisoned");
            return;
        };
        let effects = transition(&mut inner.playback);
        self.published.send_replace(inner.playback.state());
        for effect in effects {
            self.run(&mut inner, effect);
        }
    }

    fn run(self: &Arc<Self>, inner: &mut Inner, effect: RhymeEffect) {
        match effect {
            RhymeEffect::Narrate { ticket, text } => {
                let (started_tx, started_rx) = oneshot::channel();
                let request = SpeechRequest::new(text, VoiceSettings::RHYME).notify_start(started_tx);

                let weak = Arc::downgrade(self);
                inner.waiters.spawn(async move {
                    if started_rx.await.is_ok() {
                        if let Some(shared) = weak.upgrade() {
                            shared.update(|playback| playback.on_started(ticket));
                        }
                    }
                });

                let narrator = Arc::clone(&self.narrator);
                let weak = Arc::downgrade(self);
                inner.narration.supersede(async move {
                    let result = narrator.speak(request).await;
                    let Some(shared) = weak.upgrade() else {
                        return;
                    };
                    match result {
                        Ok(()) => shared.update(|playback| playback.on_finished(ticket)),
                        Err(err) => {
                            tracing::debug!(%err, "rhyme narration ended early");
                            shared.update(|playback| playback.on_failed(ticket));
                        }
                    }
                });
            }
            RhymeEffect::CancelNarration => {
                self.narrator.cancel();
                inner.narration.abort();
            }
            RhymeEffect::StartPolling { ticket, interval } => {
                tracing::debug!(?interval, "rhyme highlight polling started");
                let weak = Arc::downgrade(self);
                inner.polling.replace(poll(weak, ticket, interval));
            }
            RhymeEffect::StopPolling => inner.polling.abort(),
        }
    }
}

async fn poll(weak: std::sync::Weak<Shared>, ticket: Ticket, interval: std::time::Duration) {
    let started = Instant::now();
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let mut finished = false;
        shared.update(|playback| {
            let effects = playback.tick(ticket, started.elapsed());
            finished = playback.current_ticket() != ticket || !effects.is_empty();
            // the poll loop ends itself; the stop effect would abort this task
            effects
                .into_iter()
                .filter(|e| *e != RhymeEffect::StopPolling)
                .collect()
        });
        if finished {
            return;
        }
    }
}
