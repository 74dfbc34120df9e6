//! The persisted final document shape.

use crate::{Badge, Hotspot, SceneContent, SceneType, SubtitleCue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// Version stamp written into every assembled document.
pub const SCHEMA_VERSION: u32 = 1;

/// Fallback image URL substituted when a scene render never produced one.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://cdn.showreel.dev/placeholders/scene.png";

/// Document-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Document schema version
    pub schema_version: u32,
    /// When assembly finished
    pub generated_at: DateTime<Utc>,
    /// Number of resolved badges carried by the story
    pub badge_count: usize,
}

/// The per-scene shape persisted in the final document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Scene identifier
    pub id: String,
    /// Narrative role
    #[serde(rename = "type")]
    pub scene_type: SceneType,
    /// Theme tag
    pub theme_tag: String,
    /// Position within the story
    pub order: u32,
    /// Prompt-ready description of the imagery
    pub visual_direction: String,
    /// Written copy; `null` when scripting never produced any
    pub content_variant: Option<SceneContent>,
    /// Image URL; the placeholder when rendering never produced one
    pub image_url: String,
    /// Narration audio URL; `null` when synthesis produced none
    pub audio_url: Option<String>,
    /// Display-ready caption cues
    pub subtitles: Vec<SubtitleCue>,
    /// Located hotspots
    pub hotspots: Vec<Hotspot>,
}

/// The QA-sanitized document written to the status store on completion.
///
/// # Examples
///
/// ```
/// use showreel_core::{StoryDocument, SCHEMA_VERSION};
/// use uuid::Uuid;
///
/// let doc = StoryDocument::empty(Uuid::new_v4(), "vin-123");
/// assert_eq!(doc.meta.schema_version, SCHEMA_VERSION);
/// assert!(doc.scenes.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryDocument {
    /// Run identifier the document was assembled for
    pub id: Uuid,
    /// Story title
    pub title: String,
    /// Cross-scene narrative summary
    pub narrative_summary: String,
    /// Document metadata
    pub meta: DocumentMeta,
    /// Resolved badges in presentation order
    pub badges: Vec<Badge>,
    /// Ordered scenes
    pub scenes: Vec<SceneDocument>,
    /// Raw vehicle record the story narrates
    pub subject_data: JsonValue,
}

impl StoryDocument {
    /// An empty document skeleton, mainly useful in tests and examples.
    pub fn empty(id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            narrative_summary: String::new(),
            meta: DocumentMeta {
                schema_version: SCHEMA_VERSION,
                generated_at: Utc::now(),
                badge_count: 0,
            },
            badges: Vec::new(),
            scenes: Vec::new(),
            subject_data: JsonValue::Null,
        }
    }
}
