use std::sync::Arc;

use lesson_core::catalog::NumberRange;
use services::{AppServices, SpellingWordService};
use tokio::sync::watch;

use crate::speech::WebSpeech;

pub trait UiApp: Send + Sync {
    fn services(&self) -> AppServices;

    /// The webview bridge behind the speech ports, when the shell has one.
    fn speech_bridge(&self) -> Option<WebSpeech>;
}

#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
    speech_bridge: Option<WebSpeech>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
            speech_bridge: app.speech_bridge(),
        }
    }

    #[must_use]
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    #[must_use]
    pub fn spelling_words(&self) -> Arc<SpellingWordService> {
        self.services.spelling_words()
    }

    #[must_use]
    pub fn number_range(&self) -> NumberRange {
        self.services.number_range()
    }

    #[must_use]
    pub fn speech_bridge(&self) -> Option<WebSpeech> {
        self.speech_bridge.clone()
    }

    /// Updates whenever the webview reports recognition support.
    #[must_use]
    pub fn recognition_availability(&self) -> Option<watch::Receiver<bool>> {
        self.speech_bridge
            .as_ref()
            .map(WebSpeech::recognition_availability)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
