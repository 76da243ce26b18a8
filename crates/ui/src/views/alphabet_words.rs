use dioxus::prelude::*;
use lesson_core::catalog::{ALPHABET_WORDS, alphabet_words_lesson};
use lesson_core::model::LessonItem;

use super::practice_layout::PracticeLayout;

#[component]
pub fn AlphabetWordsView() -> Element {
    rsx! {
        PracticeLayout {
            lesson: alphabet_words_lesson(),
            item_view: move |item: LessonItem| {
                let entry = ALPHABET_WORDS.iter().find(|entry| entry.phrase() == item.display);
                match entry {
                    Some(entry) => rsx! {
                        div { class: "alphabet-word",
                            img { class: "alphabet-word-image", src: entry.image_url, alt: entry.word }
                            div { class: "big-glyph", "{entry.letter}" }
                            p { class: "alphabet-word-label", "for {entry.word}" }
                        }
                    },
                    None => rsx! {
                        div { class: "big-glyph", "{item.display}" }
                    },
                }
            },
        }
    }
}
