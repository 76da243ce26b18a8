use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;
use crate::speech::SpeechHost;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-page titles are rendered inside each page.
        document::Title { "Speech Learn" }

        div { class: "app-root",
            SpeechHost {}
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
