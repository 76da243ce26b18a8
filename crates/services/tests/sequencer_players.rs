use std::sync::Arc;
use std::time::Duration;

use lesson_core::model::VoiceSettings;
use lesson_core::sequencer::{LetterState, RhymeTimeline, SequencerPhase};
use services::speech::fakes::FakeNarrator;
use services::{RhymePlayer, SpellingPlayer};

fn rhyme_text(tokens: usize) -> String {
    (0..tokens)
        .map(|i| if i % 6 == 5 { "star\n" } else { "star " })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn rhyme_cursor_clears_at_estimated_duration() {
    let text = rhyme_text(24);
    let d = RhymeTimeline::for_text(&text, 24).estimated_duration();
    // real audio runs longer than the estimate
    let narrator = FakeNarrator::new(d * 2);
    let player = RhymePlayer::new(text, Arc::new(narrator));

    player.play();
    tokio::time::sleep(d / 2 + Duration::from_millis(1)).await;
    let halfway = player.state();
    let cursor = halfway.cursor.expect("cursor mid-rhyme");
    assert!((11..=12).contains(&cursor), "cursor was {cursor}");
    assert!(halfway.progress > 40.0 && halfway.progress <= 50.0);

    tokio::time::sleep(d / 2).await;
    let end = player.state();
    assert_eq!(end.cursor, None);
    assert_eq!(end.rounded_progress(), 100);
}

#[tokio::test(start_paused = true)]
async fn rhyme_finishes_when_narration_ends() {
    let narrator = FakeNarrator::new(Duration::from_millis(500));
    let player = RhymePlayer::new(rhyme_text(24), Arc::new(narrator));
    player.play();
    tokio::time::sleep(Duration::from_millis(600)).await;

    let state = player.state();
    assert_eq!(state.cursor, None);
    assert_eq!(state.rounded_progress(), 100);
    assert!(!state.playing);
    assert_eq!(state.phase, SequencerPhase::Done);
}

#[tokio::test(start_paused = true)]
async fn rhyme_pause_keeps_progress_and_reset_clears() {
    let narrator = FakeNarrator::new(Duration::from_secs(60));
    let player = RhymePlayer::new(rhyme_text(24), Arc::new(narrator.clone()));
    player.play();
    tokio::time::sleep(Duration::from_millis(2500)).await;
    player.pause();
    let paused = player.state();
    assert!(paused.progress > 0.0);
    assert!(!paused.playing);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!((player.state().progress - paused.progress).abs() < f32::EPSILON);
    assert!(narrator.completed().is_empty());

    player.reset();
    let reset = player.state();
    assert_eq!(reset.cursor, None);
    assert!(reset.progress.abs() < f32::EPSILON);
}

#[tokio::test(start_paused = true)]
async fn spelling_says_each_letter_then_the_word() {
    let narrator = FakeNarrator::new(Duration::from_millis(300));
    let player = SpellingPlayer::new("CAT", Arc::new(narrator.clone()));
    player.start();

    tokio::time::sleep(Duration::from_millis(150)).await;
    let view = player.view();
    assert_eq!(view.snapshot.state.cursor, Some(0));
    assert_eq!(view.letters[0], ('C', LetterState::Current));
    assert_eq!(view.letters[1], ('A', LetterState::Pending));

    // letters at 0, 1100 and 2200 ms; the word after a one second pause
    tokio::time::sleep(Duration::from_millis(3200)).await;
    assert_eq!(narrator.completed(), vec!["c", "a", "t"]);
    assert!(player.view().snapshot.saying_word);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    let spoken = narrator.spoken();
    assert_eq!(spoken.len(), 4);
    assert!(spoken[..3].iter().all(|s| s.voice == VoiceSettings::LETTER));
    assert_eq!(spoken[3].text, "CAT");
    assert_eq!(spoken[3].voice, VoiceSettings::WORD);

    let view = player.view();
    assert_eq!(view.snapshot.state.rounded_progress(), 100);
    assert!(view.letters.iter().all(|(_, s)| *s == LetterState::Done));
}

#[tokio::test(start_paused = true)]
async fn skip_after_first_letter_says_the_word_once() {
    let narrator = FakeNarrator::new(Duration::from_millis(300));
    let player = SpellingPlayer::new("CAT", Arc::new(narrator.clone()));
    player.start();

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(narrator.completed(), vec!["c"]);

    player.skip_to_word();
    assert_eq!(player.view().snapshot.state.rounded_progress(), 90);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(narrator.spoken_texts(), vec!["c", "CAT"]);
    assert_eq!(narrator.completed(), vec!["c", "CAT"]);
    assert_eq!(player.view().snapshot.state.rounded_progress(), 100);
}

#[tokio::test(start_paused = true)]
async fn stop_cancels_the_rest_of_the_word() {
    let narrator = FakeNarrator::new(Duration::from_millis(300));
    let player = SpellingPlayer::new("DOG", Arc::new(narrator.clone()));
    player.start();
    tokio::time::sleep(Duration::from_millis(500)).await;
    player.stop();
    tokio::time::sleep(Duration::from_secs(5)).await;

    assert_eq!(narrator.spoken_texts(), vec!["d"]);
    assert!(!player.view().snapshot.state.playing);

    player.reset();
    assert_eq!(player.view().letters[0].1, LetterState::Pending);
}

#[tokio::test(start_paused = true)]
async fn rhyme_teardown_mid_narration_stops_everything() {
    let narrator = FakeNarrator::new(Duration::from_secs(2));
    let player = RhymePlayer::new(rhyme_text(24), Arc::new(narrator.clone()));
    player.play();
    tokio::time::sleep(Duration::from_millis(700)).await;
    assert!(player.state().playing);

    player.teardown();
    tokio::time::sleep(Duration::from_secs(10)).await;

    let state = player.state();
    assert!(narrator.completed().is_empty());
    assert_eq!(state.cursor, None);
    assert!(state.progress.abs() < f32::EPSILON);
    assert!(!state.playing);
    assert_eq!(state.phase, SequencerPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn spelling_teardown_in_letter_gap_says_nothing_more() {
    let narrator = FakeNarrator::new(Duration::from_millis(300));
    let player = SpellingPlayer::new("CAT", Arc::new(narrator.clone()));
    player.start();
    // "c" ends at 300 ms; the gap before "a" runs until 1100 ms
    tokio::time::sleep(Duration::from_millis(500)).await;

    player.teardown();
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(narrator.spoken_texts(), vec!["c"]);
    let view = player.view();
    assert!(!view.snapshot.state.playing);
    assert!(!view.snapshot.saying_word);
}
