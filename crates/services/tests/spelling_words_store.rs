use std::collections::HashSet;

use lesson_core::time::fixed_clock;
use services::SpellingWordService;
use storage::repository::{CUSTOM_WORDS_KEY, KeyValueStore, Storage};

#[tokio::test]
async fn custom_words_survive_a_reload_without_duplicates() {
    let url = "sqlite:file:memdb_spelling_words?mode=memory&cache=shared";
    let storage = Storage::sqlite(url).await.expect("open");
    let words = SpellingWordService::new(fixed_clock(), storage.custom_words.clone());
    let rocket = words.add_word("rocket").await.unwrap();
    let moon = words.add_word("moonbeam").await.unwrap();

    let reloaded = Storage::sqlite(url).await.expect("reopen");
    let words = SpellingWordService::new(fixed_clock(), reloaded.custom_words.clone());
    let listed = words.list_words().await.unwrap();

    assert_eq!(listed.len(), 22);
    assert_eq!(listed[0].id().as_str(), "apple");
    assert_eq!(&listed[20], &rocket);
    assert_eq!(&listed[21], &moon);

    let ids: HashSet<_> = listed.iter().map(|w| w.id().clone()).collect();
    assert_eq!(ids.len(), listed.len());

    let found = words.find_word(rocket.id()).await.unwrap();
    assert_eq!(found.as_ref().map(|w| w.word()), Some("ROCKET"));
    drop(storage);
}

#[tokio::test]
async fn adding_and_removing_keep_unreadable_stored_entries() {
    let url = "sqlite:file:memdb_spelling_unreadable?mode=memory&cache=shared";
    let storage = Storage::sqlite(url).await.expect("open");
    storage
        .values
        .put(
            CUSTOM_WORDS_KEY,
            r#"[{"id":"custom-1","word":"","difficulty":"Easy","category":"Custom"}]"#,
        )
        .await
        .unwrap();
    let words = SpellingWordService::new(fixed_clock(), storage.custom_words.clone());

    let kite = words.add_word("kite").await.unwrap();
    words.remove_word(kite.id()).await.unwrap();

    let raw = storage.values.get(CUSTOM_WORDS_KEY).await.unwrap().unwrap();
    assert!(raw.contains(r#""id":"custom-1""#), "entry dropped: {raw}");
    assert!(!raw.contains("KITE"), "removed word still stored: {raw}");
    assert_eq!(words.list_words().await.unwrap().len(), 20);
}
