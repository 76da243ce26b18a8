use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

struct LessonCard {
    title: &'static str,
    description: &'static str,
    route: fn() -> Route,
}

const LESSONS: [LessonCard; 5] = [
    LessonCard {
        title: "Learn Alphabets",
        description: "Practice pronouncing letters A-Z with speech recognition",
        route: || Route::Alphabets {},
    },
    LessonCard {
        title: "Alphabet Words",
        description: "Learn words like \"A for Apple\" with images and speech",
        route: || Route::AlphabetWords {},
    },
    LessonCard {
        title: "Learn Numbers",
        description: "Practice counting and number recognition with speech",
        route: || Route::Numbers {},
    },
    LessonCard {
        title: "Learn Rhymes",
        description: "Listen to nursery rhymes with word-by-word highlighting",
        route: || Route::Rhymes {},
    },
    LessonCard {
        title: "Spelling Words",
        description: "Learn to spell words letter by letter with audio guidance",
        route: || Route::Spelling {},
    },
];

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home",
            h2 { "Speech Learning App" }
            p { class: "lead",
                "Learn alphabets, numbers, rhymes and spelling with interactive speech recognition"
            }
            div { class: "card-grid",
                for lesson in LESSONS.iter() {
                    div { class: "card lesson-card", key: "{lesson.title}",
                        h3 { "{lesson.title}" }
                        p { class: "muted", "{lesson.description}" }
                        Link { class: "btn primary", to: (lesson.route)(), "Start" }
                    }
                }
            }
            p { class: "muted small",
                "Make sure to allow microphone access for speech recognition to work"
            }
        }
    }
}
