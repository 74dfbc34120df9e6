//! The story draft: the working aggregate built up stage by stage.

use crate::{Badge, Scene};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Working aggregate accumulated across pipeline stages.
///
/// Each stage reads the draft produced by prior stages and writes an
/// enriched draft. Scene order is stable once planning completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryDraft {
    /// Subject (vehicle) identifier
    pub subject_id: String,
    /// Raw vehicle record fetched at ingestion
    pub subject_data: JsonValue,
    /// Story title, filled by analysis
    pub title: String,
    /// Cross-scene narrative summary, filled by analysis
    pub narrative_summary: String,
    /// Resolved badges, filled by badge collection
    pub badges: Vec<Badge>,
    /// Ordered scenes, created by planning and enriched afterwards
    pub scenes: Vec<Scene>,
}

impl StoryDraft {
    /// Create an empty draft for a subject.
    pub fn new(subject_id: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            subject_data: JsonValue::Null,
            title: String::new(),
            narrative_summary: String::new(),
            badges: Vec::new(),
            scenes: Vec::new(),
        }
    }

    /// Snapshot the cross-scene context collaborators need when working on
    /// a single scene. Fields filled by later stages are empty until then.
    pub fn context(&self) -> StoryContext {
        StoryContext {
            subject_id: self.subject_id.clone(),
            subject_data: self.subject_data.clone(),
            title: self.title.clone(),
            narrative_summary: self.narrative_summary.clone(),
            badges: self.badges.clone(),
        }
    }
}

/// Cross-scene context handed to per-scene collaborators and badge
/// collectors. A cheap owned snapshot so fanned-out tasks need no shared
/// borrows of the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryContext {
    /// Subject (vehicle) identifier
    pub subject_id: String,
    /// Raw vehicle record
    pub subject_data: JsonValue,
    /// Story title (empty before analysis)
    pub title: String,
    /// Narrative summary (empty before analysis)
    pub narrative_summary: String,
    /// Resolved badges (empty before badge collection)
    pub badges: Vec<Badge>,
}
