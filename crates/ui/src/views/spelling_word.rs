use dioxus::prelude::*;
use dioxus_router::Link;
use lesson_core::model::{SpellingWord, WordId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SpellingStatus, map_spelling_playback};

#[component]
pub fn SpellingWordView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.spelling_words();
    let resource = use_resource(use_reactive!(|(id,)| {
        let service = service.clone();
        async move {
            service
                .find_word(&WordId::new(id))
                .await
                .map_err(ViewError::from)
        }
    }));

    match view_state_from_resource(resource) {
        ViewState::Idle | ViewState::Loading => rsx! {
            div { class: "page", p { class: "muted", "Loading..." } }
        },
        ViewState::Error(err) => rsx! {
            div { class: "page", p { class: "error", "{err.message()}" } }
        },
        ViewState::Ready(None) => rsx! {
            div { class: "page not-found",
                h2 { "Word not found" }
                Link { class: "btn primary", to: Route::Spelling {}, "← Back to Spelling Words" }
            }
        },
        ViewState::Ready(Some(word)) => rsx! {
            SpellingPlayback { key: "{word.id()}", word }
        },
    }
}

#[component]
fn SpellingPlayback(word: SpellingWord) -> Element {
    let ctx = use_context::<AppContext>();
    let player = use_hook(|| ctx.services().spelling_player(&word));
    let mut view = use_signal(|| player.view());

    use_future({
        let player = player.clone();
        move || {
            let player = player.clone();
            async move {
                let mut updates = player.subscribe();
                while updates.changed().await.is_ok() {
                    view.set(updates.borrow_and_update().clone());
                }
            }
        }
    });

    use_drop({
        let player = player.clone();
        move || player.teardown()
    });

    let vm = map_spelling_playback(&view());
    let progress_style = format!("width: {:.2}%", vm.progress_percent);
    let playing = vm.playing;

    let on_reset = {
        let player = player.clone();
        move |_| player.reset()
    };
    let on_skip = {
        let player = player.clone();
        move |_| player.skip_to_word()
    };
    let on_toggle = move |_| {
        if playing {
            player.stop();
        } else {
            player.start();
        }
    };

    rsx! {
        div { class: "page spelling-word",
            header { class: "practice-header",
                Link { class: "btn outline", to: Route::Spelling {}, "← Back to Words" }
                h2 { "Spell: {word.word()}" }
                button { class: "btn outline", onclick: on_reset, "Reset" }
            }

            div { class: "two-column",
                div { class: "main-column",
                    section { class: "card spelling-stage",
                        div { class: "letter-tiles",
                            for (index, tile) in vm.tiles.iter().enumerate() {
                                div { class: tile.class, key: "{index}", "{tile.letter}" }
                            }
                        }
                        match vm.status {
                            SpellingStatus::SayingWord => rsx! {
                                div { class: "saying-word",
                                    div { class: "whole-word", "{word.word()}" }
                                    p { class: "muted", "Now saying the complete word!" }
                                }
                            },
                            SpellingStatus::Prompt => rsx! {
                                p { class: "muted", "Click \"Start Spelling\" to begin!" }
                            },
                            SpellingStatus::Letter(letter) => {
                                let letter = letter.map(String::from).unwrap_or_default();
                                rsx! {
                                    p { class: "muted", "Spelling letter by letter: {letter}" }
                                }
                            },
                            SpellingStatus::Idle => rsx! {},
                        }
                    }
                    div { class: "center",
                        button {
                            class: if playing { "btn danger large" } else { "btn success large" },
                            onclick: on_toggle,
                            if playing { "Stop" } else { "Start Spelling" }
                        }
                        if vm.show_skip {
                            button { class: "btn outline large", onclick: on_skip, "Skip to Word" }
                        }
                    }
                }

                aside { class: "side-column",
                    section { class: "card",
                        h3 { "Spelling Progress" }
                        div { class: "progress-track",
                            div { class: "progress-bar spelling", style: "{progress_style}" }
                        }
                        p { class: "muted", "{vm.progress_label}" }
                    }
                    section { class: "card word-details",
                        h3 { "Word Details" }
                        dl {
                            dt { "Letters:" }
                            dd { "{word.letter_count()}" }
                            dt { "Difficulty:" }
                            dd { "{word.difficulty().as_str()}" }
                            dt { "Category:" }
                            dd { "{word.category()}" }
                        }
                    }
                    section { class: "card",
                        h3 { "How it works" }
                        ul { class: "muted",
                            li { "Click \"Start Spelling\" to begin" }
                            li { "Each letter will be highlighted and spoken" }
                            li { "After all letters, the complete word is said" }
                            li { "Use \"Reset\" to start over" }
                            li { "Use \"Skip to Word\" to hear the full word" }
                        }
                    }
                }
            }
        }
    }
}
