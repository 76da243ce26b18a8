use dioxus::prelude::*;
use dioxus_router::Link;
use lesson_core::model::{MAX_WORD_LEN, WordId};
use services::{ALL_CATEGORIES, categories, filter_by_category};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{can_add_word, map_spelling_card};

#[component]
pub fn SpellingListView() -> Element {
    let ctx = use_context::<AppContext>();
    let words_service = ctx.spelling_words();
    let mut category = use_signal(|| ALL_CATEGORIES.to_string());
    let mut show_form = use_signal(|| false);
    let mut input = use_signal(String::new);
    let mut action_error = use_signal(|| None::<ViewError>);

    let mut resource = {
        let service = words_service.clone();
        use_resource(move || {
            let service = service.clone();
            async move { service.list_words().await.map_err(ViewError::from) }
        })
    };
    let state = view_state_from_resource(resource);

    let add_word = use_callback({
        let service = words_service.clone();
        move |raw: String| {
            let service = service.clone();
            spawn(async move {
                match service.add_word(&raw).await {
                    Ok(word) => {
                        tracing::debug!(id = %word.id(), "custom word added from list page");
                        input.set(String::new());
                        show_form.set(false);
                        action_error.set(None);
                        resource.restart();
                    }
                    Err(err) => action_error.set(Some(ViewError::from(err))),
                }
            });
        }
    });

    let remove_word = use_callback({
        let service = words_service.clone();
        move |id: String| {
            let service = service.clone();
            spawn(async move {
                match service.remove_word(&WordId::new(id)).await {
                    Ok(()) => {
                        action_error.set(None);
                        resource.restart();
                    }
                    Err(err) => action_error.set(Some(ViewError::from(err))),
                }
            });
        }
    });

    let draft = input();
    let add_disabled = !can_add_word(&draft);

    let body = match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "muted", "Loading words..." }
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
        ViewState::Ready(words) => {
            let selected = category();
            let filters = categories(&words);
            let cards = filter_by_category(&words, &selected)
                .iter()
                .map(map_spelling_card)
                .collect::<Vec<_>>();
            rsx! {
                div { class: "category-filter",
                    for name in filters {
                        button {
                            key: "{name}",
                            class: if name == selected { "btn primary small" } else { "btn outline small" },
                            onclick: {
                                let name = name.clone();
                                move |_| category.set(name.clone())
                            },
                            "{name}"
                        }
                    }
                }
                if cards.is_empty() {
                    p { class: "muted empty", "No words found in this category." }
                } else {
                    div { class: "card-grid",
                        for card in cards {
                            div { class: "card word-card", key: "{card.id}",
                                div { class: "card-badges",
                                    span { class: "{card.difficulty_class}", "{card.difficulty}" }
                                    if card.removable {
                                        button {
                                            class: "btn ghost small remove",
                                            title: "Remove word",
                                            onclick: {
                                                let id = card.id.clone();
                                                move |_| remove_word.call(id.clone())
                                            },
                                            "✕"
                                        }
                                    }
                                }
                                h3 { class: "word", "{card.word}" }
                                p { class: "muted small", "{card.details_label}" }
                                div { class: "letter-row",
                                    for (index, letter) in card.letters.iter().enumerate() {
                                        span { class: "letter-chip", key: "{index}", "{letter}" }
                                    }
                                }
                                Link {
                                    class: "btn primary",
                                    to: Route::SpellingWord { id: card.id.clone() },
                                    "Spell This Word"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page spelling",
            header { class: "page-header",
                Link { class: "btn outline", to: Route::Home {}, "← Back to Home" }
                h2 { "Choose a Word to Spell" }
                button {
                    class: "btn primary",
                    onclick: move |_| show_form.set(!show_form()),
                    "Add Word"
                }
            }

            if show_form() {
                section { class: "card add-word",
                    h3 { "Add Custom Word" }
                    label { r#for: "custom-word", "Word to Spell" }
                    input {
                        id: "custom-word",
                        r#type: "text",
                        placeholder: "Enter a word (e.g., BUTTERFLY)",
                        maxlength: "{MAX_WORD_LEN}",
                        value: "{draft}",
                        oninput: move |evt: FormEvent| input.set(evt.value().to_uppercase()),
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn primary",
                            disabled: add_disabled,
                            onclick: move |_| add_word.call(input()),
                            "Add"
                        }
                        button {
                            class: "btn outline",
                            onclick: move |_| {
                                show_form.set(false);
                                input.set(String::new());
                                action_error.set(None);
                            },
                            "Cancel"
                        }
                    }
                }
            }

            if let Some(err) = action_error() {
                p { class: "error", "{err.message()}" }
            }

            {body}

            p { class: "muted small",
                "Click on any word to learn how to spell it letter by letter"
            }
        }
    }
}
