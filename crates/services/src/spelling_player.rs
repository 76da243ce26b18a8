use std::sync::{Arc, Mutex, Weak};

use lesson_core::model::VoiceSettings;
use lesson_core::sequencer::{
    LetterState, SpellingEffect, SpellingSequencer, SpellingSnapshot, Ticket,
};
use tokio::sync::watch;

use crate::error::NarrationError;
use crate::speech::{NarrationService, SpeechRequest};
use crate::tasks::TaskSlot;

/// Published state of a spelling page: sequencer snapshot plus one tile per letter.
#[derive(Debug, Clone, PartialEq)]
pub struct SpellingView {
    pub snapshot: SpellingSnapshot,
    pub letters: Vec<(char, LetterState)>,
}

/// Spells a word letter by letter, then says it whole.
#[derive(Clone)]
pub struct SpellingPlayer {
    shared: Arc<Shared>,
}

struct Shared {
    narrator: Arc<dyn NarrationService>,
    state: Mutex<Inner>,
    published: watch::Sender<SpellingView>,
}

struct Inner {
    sequencer: SpellingSequencer,
    narration: TaskSlot,
    pause: TaskSlot,
}

enum Spoken {
    Letter(usize),
    Word,
}

impl SpellingPlayer {
    #[must_use]
    pub fn new(word: impl Into<String>, narrator: Arc<dyn NarrationService>) -> Self {
        let sequencer = SpellingSequencer::new(word);
        let (published, _) = watch::channel(view_of(&sequencer));
        Self {
            shared: Arc::new(Shared {
                narrator,
                state: Mutex::new(Inner {
                    sequencer,
                    narration: TaskSlot::default(),
                    pause: TaskSlot::default(),
                }),
                published,
            }),
        }
    }

    #[must_use]
    pub fn view(&self) -> SpellingView {
        self.shared.published.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SpellingView> {
        self.shared.published.subscribe()
    }

    pub fn start(&self) {
        self.shared.update(SpellingSequencer::start);
    }

    pub fn skip_to_word(&self) {
        self.shared.update(SpellingSequencer::skip_to_word);
    }

    pub fn stop(&self) {
        self.shared.update(SpellingSequencer::stop);
        self.shared.abort_tasks();
    }

    pub fn reset(&self) {
        self.shared.update(SpellingSequencer::reset);
        self.shared.abort_tasks();
    }

    pub fn teardown(&self) {
        self.reset();
    }
}

fn view_of(sequencer: &SpellingSequencer) -> SpellingView {
    SpellingView {
        snapshot: sequencer.snapshot(),
        letters: sequencer
            .letters()
            .iter()
            .enumerate()
            .map(|(i, c)| (*c, sequencer.letter_state(i)))
            .collect(),
    }
}

impl Shared {
    fn update(
        self: &Arc<Self>,
        transition: impl FnOnce(&mut SpellingSequencer) -> Vec<SpellingEffect>,
    ) {
        let Ok(mut inner) = self.state.lock() else {
            tracing::warn!("spelling state lock poisoned");
            return;
        };
        let effects = transition(&mut inner.sequencer);
        self.published.send_replace(view_of(&inner.sequencer));
        for effect in effects {
            self.run(&mut inner, effect);
        }
    }

    fn abort_tasks(&self) {
        if let Ok(mut inner) = self.state.lock() {
            inner.narration.abort();
            inner.pause.abort();
        }
    }

    fn run(self: &Arc<Self>, inner: &mut Inner, effect: SpellingEffect) {
        match effect {
            SpellingEffect::SpeakLetter {
                ticket,
                index,
                letter,
            } => {
                tracing::debug!(index, %letter, "spelling letter");
                let request = SpeechRequest::new(letter, VoiceSettings::LETTER);
                inner
                    .narration
                    .supersede(speak(Arc::downgrade(self), request, ticket, Spoken::Letter(index)));
            }
            SpellingEffect::SpeakWord { ticket, word } => {
                tracing::debug!(%word, "spelling whole word");
                let request = SpeechRequest::new(word, VoiceSettings::WORD);
                inner
                    .narration
                    .supersede(speak(Arc::downgrade(self), request, ticket, Spoken::Word));
            }
            SpellingEffect::Wait {
                ticket,
                step,
                delay,
            } => {
                let weak = Arc::downgrade(self);
                inner.pause.replace(async move {
                    tokio::time::sleep(delay).await;
                    if let Some(shared) = weak.upgrade() {
                        shared.update(|sequencer| sequencer.wait_elapsed(ticket, step));
                    }
                });
            }
            SpellingEffect::CancelNarration => {
                self.narrator.cancel();
                inner.narration.abort();
                inner.pause.abort();
            }
        }
    }
}

async fn speak(weak: Weak<Shared>, request: SpeechRequest, ticket: Ticket, what: Spoken) {
    let narrator = match weak.upgrade() {
        Some(shared) => Arc::clone(&shared.narrator),
        None => return,
    };
    let result = narrator.speak(request).await;
    let Some(shared) = weak.upgrade() else {
        return;
    };
    match (result, what) {
        (Ok(()), Spoken::Letter(index)) => {
            shared.update(|sequencer| sequencer.letter_spoken(ticket, index));
        }
        (Ok(()), Spoken::Word) => shared.update(|sequencer| sequencer.word_spoken(ticket)),
        (Err(NarrationError::Canceled), _) => {}
        (Err(err), _) => {
            tracing::warn!(%err, "spelling narration failed");
            shared.update(|sequencer| sequencer.narration_failed(ticket));
        }
    }
}
