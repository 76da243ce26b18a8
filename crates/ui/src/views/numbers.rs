use dioxus::prelude::*;
use lesson_core::catalog::{MAX_NUMBER_LIMIT, NumberRange, numbers_lesson};
use lesson_core::model::LessonItem;

use crate::context::AppContext;

use super::practice_layout::PracticeLayout;

#[component]
pub fn NumbersView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut range = use_signal(|| ctx.number_range());
    let max = range().max();

    rsx! {
        // A new range restarts the session from the first number.
        PracticeLayout {
            key: "{max}",
            lesson: numbers_lesson(range()),
            item_view: move |item: LessonItem| rsx! {
                div { class: "big-glyph number", "{item.display}" }
            },
            controls: rsx! {
                section { class: "card number-range",
                    label { r#for: "max-number", "Maximum Number" }
                    input {
                        id: "max-number",
                        r#type: "number",
                        min: "1",
                        max: "{MAX_NUMBER_LIMIT}",
                        value: "{max}",
                        onchange: move |evt: FormEvent| {
                            let next = NumberRange::from_input(&evt.value());
                            tracing::debug!(max = next.max(), "number range changed");
                            range.set(next);
                        },
                    }
                    p { class: "muted", "Numbers will go from 1 to {max}" }
                }
            },
        }
    }
}
