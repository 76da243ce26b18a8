//! Webview implementation of the narration and recognition ports.

mod bridge;
mod host;
mod script;

pub use bridge::{BridgeEvent, SpeechCommand, WebSpeech};
pub use host::SpeechHost;
