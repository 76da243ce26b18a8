use crate::model::{Difficulty, SpellingWord, WordId};

const BUILTIN: [(&str, &str, Difficulty, &str); 20] = [
    ("apple", "APPLE", Difficulty::Easy, "Fruits"),
    ("ball", "BALL", Difficulty::Easy, "Toys"),
    ("cat", "CAT", Difficulty::Easy, "Animals"),
    ("dog", "DOG", Difficulty::Easy, "Animals"),
    ("elephant", "ELEPHANT", Difficulty::Hard, "Animals"),
    ("fish", "FISH", Difficulty::Easy, "Animals"),
    ("house", "HOUSE", Difficulty::Medium, "Places"),
    ("ice", "ICE", Difficulty::Easy, "Nature"),
    ("jump", "JUMP", Difficulty::Easy, "Actions"),
    ("kite", "KITE", Difficulty::Easy, "Toys"),
    ("lion", "LION", Difficulty::Easy, "Animals"),
    ("moon", "MOON", Difficulty::Easy, "Nature"),
    ("nest", "NEST", Difficulty::Easy, "Nature"),
    ("orange", "ORANGE", Difficulty::Medium, "Fruits"),
    ("penguin", "PENGUIN", Difficulty::Medium, "Animals"),
    ("queen", "QUEEN", Difficulty::Medium, "People"),
    ("rabbit", "RABBIT", Difficulty::Medium, "Animals"),
    ("sun", "SUN", Difficulty::Easy, "Nature"),
    ("tree", "TREE", Difficulty::Easy, "Nature"),
    ("umbrella", "UMBRELLA", Difficulty::Hard, "Objects"),
];

/// The fixed spelling list every learner starts with.
#[must_use]
pub fn builtin_words() -> Vec<SpellingWord> {
    BUILTIN
        .iter()
        .filter_map(|(id, word, difficulty, category)| {
            SpellingWord::new(WordId::new(*id), *word, *difficulty, *category).ok()
        })
        .collect()
}
