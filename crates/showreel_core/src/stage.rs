//! Pipeline stage tokens.

use serde::{Deserialize, Serialize};

/// One named step in the orchestrator's fixed sequence.
///
/// Stages execute strictly in declaration order; `Error` is an absorbing
/// state reachable from any stage.
///
/// # Examples
///
/// ```
/// use showreel_core::Stage;
///
/// assert_eq!(Stage::ImageSynthesis.label(), "image_synthesis");
/// assert_eq!(format!("{}", Stage::BadgeCollection), "badge_collection");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Initial stage assigned when the run record is created
    System,
    /// Fetch the subject's vehicle record
    Ingestion,
    /// Run badge collectors and resolve conflicts
    BadgeCollection,
    /// Derive the story title and narrative summary
    Analysis,
    /// Plan the ordered scene list (scene order is frozen here)
    Planning,
    /// Write per-scene copy (fan-out)
    Scripting,
    /// Render per-scene imagery (fan-out)
    ImageSynthesis,
    /// Locate hotspot coordinates on rendered images (fan-out)
    VisionScan,
    /// Synthesize narration audio and subtitles (fan-out)
    AudioSynthesis,
    /// Sanitize and assemble the final document
    QaAssembly,
    /// Terminal stage of a successful run
    Complete,
    /// Absorbing stage of a failed run
    Error,
}

impl Stage {
    /// The stage token used in progress rows and log entries.
    pub fn label(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Ingestion => "ingestion",
            Self::BadgeCollection => "badge_collection",
            Self::Analysis => "analysis",
            Self::Planning => "planning",
            Self::Scripting => "scripting",
            Self::ImageSynthesis => "image_synthesis",
            Self::VisionScan => "vision_scan",
            Self::AudioSynthesis => "audio_synthesis",
            Self::QaAssembly => "qa_assembly",
            Self::Complete => "complete",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_are_unique() {
        let labels: Vec<&str> = Stage::iter().map(Stage::label).collect();
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }

    #[test]
    fn serde_uses_snake_case_tokens() {
        let json = serde_json::to_string(&Stage::QaAssembly).unwrap();
        assert_eq!(json, "\"qa_assembly\"");
    }
}
