use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    AlphabetWordsView, AlphabetsView, HomeView, NumbersView, RhymeListView, RhymeView,
    SpellingListView, SpellingWordView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/alphabets", AlphabetsView)] Alphabets {},
        #[route("/alphabet-words", AlphabetWordsView)] AlphabetWords {},
        #[route("/numbers", NumbersView)] Numbers {},
        #[route("/rhymes", RhymeListView)] Rhymes {},
        #[route("/rhymes/:id", RhymeView)] Rhyme { id: String },
        #[route("/spelling", SpellingListView)] Spelling {},
        #[route("/spelling/:id", SpellingWordView)] SpellingWord { id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Speech Learn" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Alphabets {}, "Alphabets" } }
                li { Link { to: Route::AlphabetWords {}, "Alphabet Words" } }
                li { Link { to: Route::Numbers {}, "Numbers" } }
                li { Link { to: Route::Rhymes {}, "Rhymes" } }
                li { Link { to: Route::Spelling {}, "Spelling" } }
            }
        }
    }
}
