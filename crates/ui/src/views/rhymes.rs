use dioxus::prelude::*;
use dioxus_router::Link;
use lesson_core::catalog::rhymes;

use crate::routes::Route;
use crate::vm::map_rhyme_card;

#[component]
pub fn RhymeListView() -> Element {
    let cards = use_hook(|| rhymes().iter().map(map_rhyme_card).collect::<Vec<_>>());

    rsx! {
        div { class: "page rhymes",
            header { class: "page-header",
                Link { class: "btn outline", to: Route::Home {}, "← Back to Home" }
                h2 { "Choose a Rhyme" }
            }
            div { class: "card-grid",
                for card in cards {
                    div { class: "card rhyme-card", key: "{card.id}",
                        div { class: "card-badges",
                            span { class: "{card.difficulty_class}", "{card.difficulty}" }
                            span { class: "badge popular", "Popular" }
                        }
                        h3 { "{card.title}" }
                        p { class: "muted", "{card.description}" }
                        p { class: "muted small", "{card.duration_label}" }
                        Link {
                            class: "btn primary",
                            to: Route::Rhyme { id: card.id.clone() },
                            "Listen to Rhyme"
                        }
                    }
                }
            }
            p { class: "muted small",
                "Click on any rhyme to listen and follow along with highlighted words"
            }
        }
    }
}
