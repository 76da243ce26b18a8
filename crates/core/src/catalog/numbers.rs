use crate::catalog::CatalogError;
use crate::model::{Lesson, LessonItem, LessonKind};

pub const DEFAULT_MAX_NUMBER: u32 = 10;
pub const MAX_NUMBER_LIMIT: u32 = 100;

/// Validated upper bound of the numbers lesson (1..=100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberRange(u32);

impl NumberRange {
    /// # Errors
    ///
    /// Returns `CatalogError::NumberRange` outside `1..=MAX_NUMBER_LIMIT`.
    pub fn new(max: i64) -> Result<Self, CatalogError> {
        match u32::try_from(max) {
            Ok(value) if (1..=MAX_NUMBER_LIMIT).contains(&value) => Ok(Self(value)),
            _ => Err(CatalogError::NumberRange { provided: max }),
        }
    }

    /// Lenient parse used by the range input: anything unparsable becomes 1,
    /// anything out of range is clamped.
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        let value = raw.trim().parse::<i64>().unwrap_or(1);
        let clamped = value.clamp(1, i64::from(MAX_NUMBER_LIMIT));
        Self(u32::try_from(clamped).unwrap_or(1))
    }

    #[must_use]
    pub fn max(self) -> u32 {
        self.0
    }
}

impl Default for NumberRange {
    fn default() -> Self {
        Self(DEFAULT_MAX_NUMBER)
    }
}

/// Numbers 1 through the range maximum.
#[must_use]
pub fn numbers_lesson(range: NumberRange) -> Lesson {
    let items = (1..=range.max())
        .map(|n| LessonItem::plain(n.to_string()))
        .collect();
    Lesson::new(
        LessonKind::Numbers,
        format!("Learn Numbers (1-{})", range.max()),
        items,
    )
}
