//! Subtitle cues and word-level timestamps.

use serde::{Deserialize, Serialize};

/// One word with its spoken time window, as produced by transcription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTimestamp {
    /// The word text, including any trailing punctuation
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl WordTimestamp {
    /// Create a word timestamp.
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// One subtitle display unit.
///
/// Cues are ordered by start time and never overlap; a cue's `end` equals
/// the end timestamp of its last constituent word.
///
/// # Examples
///
/// ```
/// use showreel_core::SubtitleCue;
///
/// let cue = SubtitleCue::new("the car,", 0.0, 0.4);
/// assert!(cue.end > cue.start);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitleCue {
    /// Display text, trimmed
    pub text: String,
    /// Start time in seconds (inclusive)
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl SubtitleCue {
    /// Create a cue.
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}
