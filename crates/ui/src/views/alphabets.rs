use dioxus::prelude::*;
use lesson_core::catalog::alphabets_lesson;
use lesson_core::model::LessonItem;

use super::practice_layout::PracticeLayout;

#[component]
pub fn AlphabetsView() -> Element {
    rsx! {
        PracticeLayout {
            lesson: alphabets_lesson(),
            item_view: move |item: LessonItem| rsx! {
                div { class: "big-glyph alphabet", "{item.display}" }
            },
        }
    }
}
