use crate::model::{Lesson, LessonItem, LessonKind};

/// Letter paired with a picture word, shown on the alphabet-words page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphabetWord {
    pub letter: &'static str,
    pub word: &'static str,
    pub image_url: &'static str,
}

impl AlphabetWord {
    /// "A for Apple"
    #[must_use]
    pub fn phrase(&self) -> String {
        format!("{} for {}", self.letter, self.word)
    }
}

const fn entry(letter: &'static str, word: &'static str, image_url: &'static str) -> AlphabetWord {
    AlphabetWord {
        letter,
        word,
        image_url,
    }
}

pub const ALPHABET_WORDS: [AlphabetWord; 26] = [
    entry("A", "Apple", "https://images.unsplash.com/photo-1560806887-1e4cd0b6cbd6?w=200&h=200&fit=crop"),
    entry("B", "Ball", "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=200&h=200&fit=crop"),
    entry("C", "Cat", "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=200&h=200&fit=crop"),
    entry("D", "Dog", "https://images.unsplash.com/photo-1552053831-71594a27632d?w=200&h=200&fit=crop"),
    entry("E", "Elephant", "https://images.unsplash.com/photo-1564760055775-d63b17a55c44?w=200&h=200&fit=crop"),
    entry("F", "Fish", "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=200&h=200&fit=crop"),
    entry("G", "Giraffe", "https://images.unsplash.com/photo-1547721064-da6cfb341d50?w=200&h=200&fit=crop"),
    entry("H", "House", "https://images.unsplash.com/photo-1570129477492-45c003edd2be?w=200&h=200&fit=crop"),
    entry("I", "Ice cream", "https://images.unsplash.com/photo-1563805042-7684c019e1cb?w=200&h=200&fit=crop"),
    entry("J", "Juice", "https://images.unsplash.com/photo-1613478223719-2ab802602423?w=200&h=200&fit=crop"),
    entry("K", "Kite", "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=200&h=200&fit=crop"),
    entry("L", "Lion", "https://images.unsplash.com/photo-1546182990-dffeafbe841d?w=200&h=200&fit=crop"),
    entry("M", "Monkey", "https://images.unsplash.com/photo-1540573133985-87b6da6d54a9?w=200&h=200&fit=crop"),
    entry("N", "Nest", "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=200&h=200&fit=crop"),
    entry("O", "Orange", "https://images.unsplash.com/photo-1547514701-42782101795e?w=200&h=200&fit=crop"),
    entry("P", "Penguin", "https://images.unsplash.com/photo-1551986782-d0169b3f8fa7?w=200&h=200&fit=crop"),
    entry("Q", "Queen", "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=200&h=200&fit=crop"),
    entry("R", "Rabbit", "https://images.unsplash.com/photo-1585110396000-c9ffd4e4b308?w=200&h=200&fit=crop"),
    entry("S", "Sun", "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=200&h=200&fit=crop"),
    entry("T", "Tiger", "https://images.unsplash.com/photo-1561731216-c3a4d99437d5?w=200&h=200&fit=crop"),
    entry("U", "Umbrella", "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=200&h=200&fit=crop"),
    entry("V", "Violin", "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=200&h=200&fit=crop"),
    entry("W", "Whale", "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=200&h=200&fit=crop"),
    entry("X", "Xylophone", "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=200&h=200&fit=crop"),
    entry("Y", "Yacht", "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=200&h=200&fit=crop"),
    entry("Z", "Zebra", "https://images.unsplash.com/photo-1551969014-7d2c4cddf0b6?w=200&h=200&fit=crop"),
];

/// Letters A through Z.
#[must_use]
pub fn alphabets_lesson() -> Lesson {
    let items = ('A'..='Z').map(|c| LessonItem::plain(c.to_string())).collect();
    Lesson::new(LessonKind::Alphabets, "Learn Alphabets", items)
}

/// "A for Apple" through "Z for Zebra".
#[must_use]
pub fn alphabet_words_lesson() -> Lesson {
    let items = ALPHABET_WORDS
        .iter()
        .map(|entry| LessonItem::plain(entry.phrase()))
        .collect();
    Lesson::new(LessonKind::AlphabetWords, "Alphabet Words", items)
}
