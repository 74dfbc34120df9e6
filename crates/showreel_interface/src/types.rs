//! Supporting types for the collaborator contracts.

use serde::{Deserialize, Serialize};

/// The story angle proposed by the analyst.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryAngle {
    /// Story title
    pub title: String,
    /// Cross-scene narrative summary
    pub narrative_summary: String,
}

/// Synthesized narration audio.
///
/// Carries both the hosted URL written into the document and the raw bytes
/// handed to the transcriber for word timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechAudio {
    /// Hosted audio URL
    pub url: String,
    /// Raw audio bytes for transcription
    pub bytes: Vec<u8>,
}
