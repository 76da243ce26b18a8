use std::sync::Arc;
use std::time::Duration;

use lesson_core::model::LessonItem;
use lesson_core::session::{FeedbackKind, MSG_CORRECT, MSG_MALFORMED_RESULT};
use services::speech::fakes::{FakeNarrator, Heard, ScriptedRecognizer};
use services::{PracticeController, RecognitionError};

fn items() -> Vec<LessonItem> {
    ["Cat", "Dog", "Fish"].into_iter().map(LessonItem::plain).collect()
}

fn controller(
    narrator: &FakeNarrator,
    recognizer: &ScriptedRecognizer,
) -> PracticeController {
    let controller = PracticeController::new(
        items(),
        Arc::new(narrator.clone()),
        Arc::new(recognizer.clone()),
    )
    .unwrap();
    controller.mount();
    controller
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn correct_answer_auto_advances_after_delay() {
    let narrator = FakeNarrator::default();
    let recognizer = ScriptedRecognizer::new(Duration::from_millis(100));
    recognizer.hear("That is a CAT");
    let practice = controller(&narrator, &recognizer);

    practice.set_auto_advance(true);
    practice.start_listening();
    assert!(practice.snapshot().listening);

    advance(1550).await;
    let snapshot = practice.snapshot();
    assert_eq!(snapshot.index, 0);
    assert_eq!(snapshot.transcript, "that is a cat");
    assert_eq!(snapshot.feedback.kind, FeedbackKind::Success);
    assert_eq!(snapshot.feedback.message, MSG_CORRECT);
    assert!(!snapshot.listening);

    advance(100).await;
    let snapshot = practice.snapshot();
    assert_eq!(snapshot.index, 1);
    assert!(snapshot.transcript.is_empty());
    assert!(snapshot.feedback.is_none());

    // the toggle's own advance was scheduled before the item changed
    advance(1000).await;
    assert_eq!(practice.snapshot().index, 1);
    assert_eq!(narrator.spoken_texts(), vec!["cat", "dog"]);
}

#[tokio::test(start_paused = true)]
async fn toggling_auto_advance_moves_on_once() {
    let narrator = FakeNarrator::default();
    let recognizer = ScriptedRecognizer::new(Duration::ZERO);
    let practice = controller(&narrator, &recognizer);

    practice.set_auto_advance(true);
    advance(1999).await;
    assert_eq!(practice.snapshot().index, 0);
    advance(2).await;
    assert_eq!(practice.snapshot().index, 1);
    advance(5000).await;
    assert_eq!(practice.snapshot().index, 1);
}

#[tokio::test(start_paused = true)]
async fn toggling_off_cancels_pending_advance() {
    let narrator = FakeNarrator::default();
    let recognizer = ScriptedRecognizer::new(Duration::ZERO);
    let practice = controller(&narrator, &recognizer);

    practice.set_auto_advance(true);
    advance(500).await;
    practice.set_auto_advance(false);
    advance(3000).await;
    assert_eq!(practice.snapshot().index, 0);
}

#[tokio::test(start_paused = true)]
async fn teardown_prevents_pending_advance() {
    let narrator = FakeNarrator::new(Duration::from_secs(5));
    let recognizer = ScriptedRecognizer::new(Duration::from_millis(100));
    recognizer.hear("cat");
    let practice = controller(&narrator, &recognizer);

    practice.set_auto_advance(true);
    practice.start_listening();
    advance(200).await;
    assert_eq!(practice.snapshot().feedback.kind, FeedbackKind::Success);

    practice.teardown();
    advance(5000).await;
    assert_eq!(practice.snapshot().index, 0);
    assert!(narrator.completed().is_empty());
    assert_eq!(narrator.spoken_texts(), vec!["cat"]);
}

#[tokio::test(start_paused = true)]
async fn wrong_answer_gives_a_hint() {
    let narrator = FakeNarrator::default();
    let recognizer = ScriptedRecognizer::new(Duration::from_millis(100));
    recognizer.hear("dog");
    let practice = controller(&narrator, &recognizer);

    practice.set_auto_advance(true);
    practice.start_listening();
    advance(150).await;
    let snapshot = practice.snapshot();
    assert_eq!(snapshot.feedback.kind, FeedbackKind::Error);
    assert_eq!(snapshot.feedback.message, "Try again! Say \"cat\"");
    assert_eq!(snapshot.transcript, "dog");
}

#[tokio::test(start_paused = true)]
async fn platform_errors_become_feedback() {
    let narrator = FakeNarrator::default();
    let recognizer = ScriptedRecognizer::new(Duration::from_millis(50));
    recognizer.push(Heard::Failure(RecognitionError::Platform("network".into())));
    recognizer.push(Heard::Failure(RecognitionError::MalformedResult(
        "no alternatives".into(),
    )));
    let practice = controller(&narrator, &recognizer);

    practice.start_listening();
    advance(100).await;
    let snapshot = practice.snapshot();
    assert_eq!(snapshot.feedback.kind, FeedbackKind::Error);
    assert!(!snapshot.listening);

    practice.start_listening();
    advance(100).await;
    let snapshot = practice.snapshot();
    assert_eq!(snapshot.feedback.message, MSG_MALFORMED_RESULT);
    assert!(!snapshot.listening);
}

#[tokio::test(start_paused = true)]
async fn silence_ends_listening_without_feedback() {
    let narrator = FakeNarrator::default();
    let recognizer = ScriptedRecognizer::new(Duration::from_millis(50));
    recognizer.push(Heard::Silence);
    let practice = controller(&narrator, &recognizer);

    practice.start_listening();
    advance(100).await;
    let snapshot = practice.snapshot();
    assert!(!snapshot.listening);
    assert!(snapshot.feedback.is_none());
    assert!(snapshot.transcript.is_empty());
}

#[tokio::test(start_paused = true)]
async fn stop_listening_stops_the_recognizer() {
    let narrator = FakeNarrator::default();
    let recognizer = ScriptedRecognizer::new(Duration::ZERO);
    let practice = controller(&narrator, &recognizer);

    practice.start_listening();
    advance(10).await;
    assert_eq!(recognizer.attempts(), 1);
    practice.stop_listening();
    advance(10).await;
    assert!(!practice.snapshot().listening);
    assert_eq!(recognizer.stops(), 1);
}

#[tokio::test(start_paused = true)]
async fn navigation_supersedes_narration() {
    let narrator = FakeNarrator::new(Duration::from_millis(300));
    let recognizer = ScriptedRecognizer::new(Duration::ZERO);
    let practice = controller(&narrator, &recognizer);

    advance(100).await;
    practice.next();
    advance(1000).await;
    assert_eq!(narrator.spoken_texts(), vec!["cat", "dog"]);
    assert_eq!(narrator.completed(), vec!["dog"]);

    practice.next();
    practice.next();
    assert_eq!(practice.snapshot().index, 2);
    assert!(!practice.snapshot().can_go_forward());

    practice.restart();
    let snapshot = practice.snapshot();
    assert_eq!(snapshot.index, 0);
    assert!(!snapshot.can_go_back());
}

#[tokio::test(start_paused = true)]
async fn hear_pronunciation_restarts_narration() {
    let narrator = FakeNarrator::new(Duration::from_millis(300));
    let recognizer = ScriptedRecognizer::new(Duration::ZERO);
    let practice = controller(&narrator, &recognizer);

    advance(100).await;
    practice.hear_pronunciation();
    advance(100).await;
    practice.hear_pronunciation();
    advance(1000).await;
    assert_eq!(narrator.spoken_texts(), vec!["cat", "cat", "cat"]);
    assert_eq!(narrator.completed(), vec!["cat"]);
}

#[tokio::test(start_paused = true)]
async fn moving_on_while_listening_drops_the_old_answer() {
    let narrator = FakeNarrator::default();
    let recognizer = ScriptedRecognizer::new(Duration::from_millis(500));
    recognizer.hear("cat");
    let practice = controller(&narrator, &recognizer);

    practice.start_listening();
    advance(100).await;
    practice.next();
    advance(1000).await;

    let snapshot = practice.snapshot();
    assert_eq!(snapshot.index, 1);
    assert!(!snapshot.listening);
    assert!(snapshot.transcript.is_empty());
    assert!(snapshot.feedback.is_none());
    assert_eq!(recognizer.stops(), 1);
}
