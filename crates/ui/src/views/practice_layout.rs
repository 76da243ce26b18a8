use dioxus::prelude::*;
use dioxus_router::Link;
use lesson_core::model::{Lesson, LessonItem};
use services::PracticeController;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::map_practice;

/// Shared page for the alphabets, alphabet-words and numbers lessons.
///
/// Owns one [`PracticeController`] for the lifetime of the component and
/// tears it down on unmount. `item_view` renders the current item;
/// `controls` sit above the practice card.
#[component]
pub fn PracticeLayout(
    lesson: Lesson,
    item_view: Callback<LessonItem, Element>,
    controls: Option<Element>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let controller = use_hook(|| {
        ctx.services()
            .practice(lesson.clone())
            .inspect_err(|err| tracing::warn!(?err, "practice session unavailable"))
            .ok()
    });
    let mut snapshot = use_signal(|| controller.as_ref().map(PracticeController::snapshot));

    use_future({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            async move {
                let Some(controller) = controller else {
                    return;
                };
                let mut updates = controller.subscribe();
                controller.mount();
                snapshot.set(Some(updates.borrow_and_update().clone()));
                while updates.changed().await.is_ok() {
                    snapshot.set(Some(updates.borrow_and_update().clone()));
                }
            }
        }
    });

    use_future({
        let controller = controller.clone();
        let availability = ctx.recognition_availability();
        move || {
            let controller = controller.clone();
            let availability = availability.clone();
            async move {
                let (Some(controller), Some(mut availability)) = (controller, availability) else {
                    return;
                };
                loop {
                    let available = *availability.borrow_and_update();
                    controller.set_recognition_available(available);
                    if availability.changed().await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    use_drop({
        let controller = controller.clone();
        move || {
            if let Some(controller) = controller {
                controller.teardown();
            }
        }
    });

    let (Some(controller), Some(current)) = (controller, snapshot()) else {
        return rsx! {
            div { class: "page practice",
                p { class: "error", "{ViewError::Unknown.message()}" }
            }
        };
    };
    let vm = map_practice(&current);
    let prompt = lesson.prompt_for(&current.item);
    let title = lesson.title().to_string();
    let progress_style = vm.progress_style();
    let auto_advance = vm.auto_advance;
    let listening = vm.listening;

    let on_restart = {
        let controller = controller.clone();
        move |_| controller.restart()
    };
    let on_prev = {
        let controller = controller.clone();
        move |_| controller.prev()
    };
    let on_next = {
        let controller = controller.clone();
        move |_| controller.next()
    };
    let on_toggle_auto = {
        let controller = controller.clone();
        move |_| controller.set_auto_advance(!auto_advance)
    };
    let on_hear = {
        let controller = controller.clone();
        move |_| controller.hear_pronunciation()
    };
    let on_listen = move |_| {
        if listening {
            controller.stop_listening();
        } else {
            controller.start_listening();
        }
    };

    rsx! {
        div { class: "page practice",
            header { class: "practice-header",
                Link { class: "btn outline", to: Route::Home {}, "← Back to Home" }
                h2 { "{title}" }
                button { class: "btn outline", onclick: on_restart, "Restart" }
            }

            if let Some(controls) = controls {
                {controls}
            }

            section { class: "card practice-card",
                div { class: "practice-item", {item_view.call(current.item.clone())} }
                p { class: "practice-prompt", "{prompt}" }

                div { class: "practice-nav",
                    button {
                        class: "btn outline",
                        disabled: !vm.can_go_back,
                        onclick: on_prev,
                        "Previous"
                    }
                    span { class: "practice-position", "{vm.position_label}" }
                    button {
                        class: "btn outline",
                        disabled: !vm.can_go_forward,
                        onclick: on_next,
                        "Next"
                    }
                }

                div { class: "practice-switch",
                    button {
                        class: if auto_advance { "switch on" } else { "switch" },
                        role: "switch",
                        aria_checked: "{auto_advance}",
                        onclick: on_toggle_auto,
                        span { class: "switch-thumb" }
                    }
                    span { "Auto advance" }
                }

                div { class: "practice-actions",
                    button { class: "btn secondary", onclick: on_hear, "Hear Pronunciation" }
                    button {
                        class: if listening { "btn danger" } else { "btn primary" },
                        disabled: vm.listen_disabled,
                        onclick: on_listen,
                        "{vm.listen_label}"
                    }
                }

                if let Some(notice) = vm.unsupported_notice {
                    p { class: "notice", "{notice}" }
                }

                if let Some(transcript) = vm.transcript.clone() {
                    div { class: "transcript",
                        span { class: "label", "You said:" }
                        span { class: "value", "{transcript}" }
                    }
                }

                if let Some(feedback) = vm.feedback.clone() {
                    div { class: "{feedback.class}", "{feedback.message}" }
                }
            }

            section { class: "card practice-progress",
                h3 { "Progress" }
                div { class: "progress-track",
                    div { class: "progress-bar", style: "{progress_style}" }
                }
                p { class: "muted", "{vm.completed_label}" }
            }
        }
    }
}
