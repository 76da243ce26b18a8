use dioxus::prelude::*;

use super::bridge::BridgeEvent;
use super::script::BRIDGE_SCRIPT;
use crate::context::AppContext;

/// Runs the speech script for the lifetime of the window and pumps messages
/// between it and the [`super::WebSpeech`] ports.
#[component]
pub fn SpeechHost() -> Element {
    let ctx = use_context::<AppContext>();

    use_future(move || {
        let bridge = ctx.speech_bridge();
        async move {
            let Some(bridge) = bridge else {
                return;
            };
            let Some(mut commands) = bridge.take_commands() else {
                tracing::warn!("speech bridge already attached");
                return;
            };
            let mut eval = document::eval(BRIDGE_SCRIPT);
            loop {
                tokio::select! {
                    command = commands.recv() => {
                        let Some(command) = command else {
                            break;
                        };
                        if let Err(err) = eval.send(&command) {
                            tracing::warn!(?err, "speech command not delivered");
                            bridge.detach();
                            break;
                        }
                    }
                    event = eval.recv::<BridgeEvent>() => match event {
                        Ok(event) => bridge.handle_event(event),
                        Err(err) => {
                            tracing::warn!(?err, "speech script stopped");
                            bridge.detach();
                            break;
                        }
                    },
                }
            }
        }
    });

    rsx! {}
}
