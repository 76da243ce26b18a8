use dioxus::prelude::*;
use dioxus_router::Link;
use lesson_core::catalog::find_rhyme;
use lesson_core::model::Rhyme;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{map_rhyme_words, progress_label};

#[component]
pub fn RhymeView(id: String) -> Element {
    let Some(rhyme) = find_rhyme(&id) else {
        return rsx! {
            div { class: "page not-found",
                h2 { "Rhyme not found" }
                Link { class: "btn primary", to: Route::Rhymes {}, "← Back to Rhymes" }
            }
        };
    };
    rsx! {
        RhymePlayerPage { key: "{id}", rhyme }
    }
}

/// Owns the player for one rhyme; keyed by id so a route change builds a new one.
#[component]
fn RhymePlayerPage(rhyme: Rhyme) -> Element {
    let ctx = use_context::<AppContext>();
    let player = use_hook(|| ctx.services().rhyme_player(&rhyme.text));
    let mut state = use_signal(|| player.state());

    use_future({
        let player = player.clone();
        move || {
            let player = player.clone();
            async move {
                let mut updates = player.subscribe();
                while updates.changed().await.is_ok() {
                    state.set(*updates.borrow_and_update());
                }
            }
        }
    });

    use_drop({
        let player = player.clone();
        move || player.teardown()
    });

    let current = state();
    let tokens = player.tokens();
    let words = map_rhyme_words(&tokens, &current);
    let word_count = tokens.len();
    let progress = progress_label(&current);
    let progress_style = format!("width: {:.2}%", current.progress.clamp(0.0, 100.0));
    let playing = current.playing;

    let on_reset = {
        let player = player.clone();
        move |_| player.reset()
    };
    let on_toggle = move |_| {
        if playing {
            player.pause();
        } else {
            player.play();
        }
    };

    rsx! {
        div { class: "page rhyme",
            header { class: "practice-header",
                Link { class: "btn outline", to: Route::Rhymes {}, "← Back to Rhymes" }
                h2 { "{rhyme.title}" }
                button { class: "btn outline", onclick: on_reset, "Reset" }
            }

            div { class: "two-column",
                div { class: "main-column",
                    section { class: "card rhyme-text",
                        for (index, word) in words.into_iter().enumerate() {
                            span { key: "{index}", class: word.highlight.class(),
                                "{word.text}"
                                if word.line_end {
                                    br {}
                                } else {
                                    " "
                                }
                            }
                        }
                    }
                    div { class: "center",
                        button {
                            class: if playing { "btn danger large" } else { "btn success large" },
                            onclick: on_toggle,
                            if playing { "Pause" } else { "Play Rhyme" }
                        }
                    }
                }

                aside { class: "side-column",
                    section { class: "card",
                        h3 { "Playback Progress" }
                        div { class: "progress-track",
                            div { class: "progress-bar rhyme", style: "{progress_style}" }
                        }
                        p { class: "muted", "{progress}" }
                    }
                    section { class: "card",
                        h3 { "How it works" }
                        ul { class: "muted",
                            li { "Click \"Play Rhyme\" to start" }
                            li { "Words will highlight as they're spoken" }
                            li { "Follow along with the yellow highlighting" }
                            li { "Use \"Reset\" to start over" }
                        }
                    }
                    section { class: "card",
                        h3 { "Word Count" }
                        p { class: "stat", "{word_count}" }
                        p { class: "muted", "words in this rhyme" }
                    }
                }
            }
        }
    }
}
