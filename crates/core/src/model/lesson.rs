use serde::{Deserialize, Serialize};

/// Which lesson page a practice list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonKind {
    Alphabets,
    AlphabetWords,
    Numbers,
}

/// One entry of a practice list.
///
/// `display` is what the page shows; `expected` is the phrase narrated and
/// matched against the learner's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonItem {
    pub display: String,
    pub expected: String,
}

impl LessonItem {
    /// An item whose expected speech is the displayed text itself.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            expected: text.clone(),
            display: text,
        }
    }

    /// Expected speech as it is narrated and compared: lower-cased.
    #[must_use]
    pub fn spoken(&self) -> String {
        self.expected.to_lowercase()
    }
}

/// A titled, ordered practice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    kind: LessonKind,
    title: String,
    items: Vec<LessonItem>,
}

impl Lesson {
    #[must_use]
    pub fn new(kind: LessonKind, title: impl Into<String>, items: Vec<LessonItem>) -> Self {
        Self {
            kind,
            title: title.into(),
            items,
        }
    }

    #[must_use]
    pub fn kind(&self) -> LessonKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn items(&self) -> &[LessonItem] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<LessonItem> {
        self.items
    }

    /// Instruction shown under an item, e.g. `Say the letter "A"`.
    #[must_use]
    pub fn prompt_for(&self, item: &LessonItem) -> String {
        match self.kind {
            LessonKind::Alphabets => format!("Say the letter \"{}\"", item.display),
            LessonKind::AlphabetWords => format!("Say \"{}\"", item.expected),
            LessonKind::Numbers => format!("Say the number \"{}\"", item.display),
        }
    }
}
