use std::sync::Arc;

use lesson_core::session::MSG_UNSUPPORTED;
use lesson_core::time::fixed_clock;
use services::{AppServices, NoSpeech};
use storage::repository::Storage;

use super::test_harness::{
    ViewKind, setup_rhyme_switch_harness, setup_view_harness, setup_view_harness_with_services,
};
use crate::speech::{BridgeEvent, WebSpeech};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_every_lesson() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    for title in [
        "Learn Alphabets",
        "Alphabet Words",
        "Learn Numbers",
        "Learn Rhymes",
        "Spelling Words",
    ] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn alphabets_view_smoke_renders_first_letter() {
    let mut harness = setup_view_harness(ViewKind::Alphabets);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Learn Alphabets"), "missing title in {html}");
    assert!(html.contains("1 of 26"), "missing position in {html}");
    assert!(html.contains("1 of 26 completed"), "missing progress in {html}");
    assert!(html.contains("Hear Pronunciation"), "missing hear button in {html}");
    assert!(html.contains("Start Speaking"), "missing speak button in {html}");
    assert!(html.contains(MSG_UNSUPPORTED), "missing unsupported notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn alphabet_words_view_smoke_renders_picture_word() {
    let mut harness = setup_view_harness(ViewKind::AlphabetWords);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("for Apple"), "missing word in {html}");
    assert!(html.contains("Say \"A for Apple\"") || html.contains("Say &quot;A for Apple&quot;"));
}

#[tokio::test(flavor = "current_thread")]
async fn numbers_view_smoke_uses_configured_range() {
    let services = AppServices::new(
        &Storage::in_memory(),
        fixed_clock(),
        Arc::new(NoSpeech),
        Arc::new(NoSpeech),
    )
    .with_number_range(lesson_core::catalog::NumberRange::new(20).unwrap());
    let mut harness = setup_view_harness_with_services(ViewKind::Numbers, services, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Learn Numbers (1-20)"), "missing title in {html}");
    assert!(html.contains("Maximum Number"), "missing range input in {html}");
    assert!(html.contains("1 of 20"), "missing position in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_enables_speaking_once_the_bridge_reports_support() {
    let bridge = WebSpeech::new();
    let services = AppServices::new(
        &Storage::in_memory(),
        fixed_clock(),
        Arc::new(NoSpeech),
        Arc::new(NoSpeech),
    );
    let mut harness =
        setup_view_harness_with_services(ViewKind::Alphabets, services, Some(bridge.clone()));
    harness.rebuild();
    harness.drive_async().await;
    assert!(harness.render().contains(MSG_UNSUPPORTED));

    bridge.handle_event(BridgeEvent::Ready {
        synthesis: true,
        recognition: true,
    });
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains(MSG_UNSUPPORTED), "notice still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rhyme_list_view_smoke_renders_cards() {
    let mut harness = setup_view_harness(ViewKind::Rhymes);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Choose a Rhyme"), "missing header in {html}");
    assert!(html.contains("Twinkle Twinkle Little Star"), "missing rhyme in {html}");
    assert!(html.contains("Listen to Rhyme"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rhyme_view_smoke_renders_words_and_count() {
    let mut harness = setup_view_harness(ViewKind::Rhyme("humpty-dumpty".into()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Humpty Dumpty"), "missing title in {html}");
    assert!(html.contains("Play Rhyme"), "missing play button in {html}");
    assert!(html.contains("0% complete"), "missing progress in {html}");
    assert!(html.contains("words in this rhyme"), "missing word count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rhyme_view_smoke_handles_unknown_id() {
    let mut harness = setup_view_harness(ViewKind::Rhyme("nope".into()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Rhyme not found"), "missing not-found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rhyme_view_follows_a_new_id() {
    let (mut harness, ids) = setup_rhyme_switch_harness("humpty-dumpty");
    harness.rebuild();
    harness.drive_async().await;
    assert!(harness.render().contains("Humpty Dumpty"));

    ids.send_replace("twinkle-twinkle".to_string());
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Twinkle Twinkle Little Star"), "missing new rhyme in {html}");
    assert!(!html.contains("Humpty"), "stale rhyme in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn spelling_list_view_smoke_includes_custom_words() {
    let mut harness = setup_view_harness(ViewKind::Spelling);
    harness
        .services
        .spelling_words()
        .add_word("butterfly")
        .await
        .expect("add word");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Choose a Word to Spell"), "missing header in {html}");
    assert!(html.contains("APPLE"), "missing built-in word in {html}");
    assert!(html.contains("BUTTERFLY"), "missing custom word in {html}");
    assert!(html.contains("9 letters • Custom"), "missing details in {html}");
    assert!(html.contains("Spell This Word"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn spelling_word_view_smoke_renders_tiles() {
    let mut harness = setup_view_harness(ViewKind::SpellingWord("cat".into()));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Spell: CAT"), "missing title in {html}");
    assert!(html.contains("Start Spelling"), "missing start button in {html}");
    assert!(html.contains("Word Details"), "missing details in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn spelling_word_view_smoke_handles_unknown_id() {
    let mut harness = setup_view_harness(ViewKind::SpellingWord("missing".into()));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Word not found"), "missing not-found in {html}");
}
