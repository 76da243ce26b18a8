use serde::{Deserialize, Serialize};

/// Prosody applied to one narration call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl VoiceSettings {
    /// Slow, low voice used for practice items.
    pub const ITEM: Self = Self {
        rate: 0.5,
        pitch: 0.5,
        volume: 1.0,
    };

    /// Bright voice for single letters while spelling.
    pub const LETTER: Self = Self {
        rate: 0.6,
        pitch: 1.2,
        volume: 1.0,
    };

    /// Whole word said after spelling it out.
    pub const WORD: Self = Self {
        rate: 0.7,
        pitch: 1.0,
        volume: 1.0,
    };

    pub const RHYME: Self = Self {
        rate: 0.7,
        pitch: 1.1,
        volume: 1.0,
    };
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self::ITEM
    }
}
