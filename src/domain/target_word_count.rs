use std::fmt;
use std::num::NonZeroU32;

pub const DEFAULT_TARGET_WORD_COUNT: u32 = 300;

/// Requested length of a summary, in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetWordCount(NonZeroU32);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("word_count must be a positive integer, got {0:?}")]
pub struct InvalidWordCount(pub String);

impl TargetWordCount {
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Parses the raw form value. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, InvalidWordCount> {
        raw.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidWordCount(raw.to_string()))
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl Default for TargetWordCount {
    fn default() -> Self {
        Self(NonZeroU32::new(DEFAULT_TARGET_WORD_COUNT).unwrap_or(NonZeroU32::MIN))
    }
}

impl fmt::Display for TargetWordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
