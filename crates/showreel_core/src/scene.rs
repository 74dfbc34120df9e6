//! Scenes, the narrative units of a story.

use crate::SubtitleCue;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The narrative role a scene plays within the story.
///
/// # Examples
///
/// ```
/// use showreel_core::SceneType;
///
/// assert_eq!(format!("{}", SceneType::Tech), "Tech");
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
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum SceneType {
    /// Opening scene
    Intro,
    /// Feature slide
    Slide,
    /// Technical deep-dive with hotspots
    Tech,
    /// Closing scene
    Outro,
}

/// One row of a technical specification table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecRow {
    /// Specification label (e.g., "0-100 km/h")
    pub label: String,
    /// Specification value (e.g., "4.2 s")
    pub value: String,
}

/// The content variant carried by a scene, matching its type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneContent {
    /// Opening headline and tagline
    Intro {
        /// Main headline
        headline: String,
        /// Supporting tagline
        tagline: String,
    },
    /// Feature slide copy
    Slide {
        /// Slide heading
        heading: String,
        /// Body paragraph
        body: String,
        /// Short bullet points
        bullets: Vec<String>,
    },
    /// Technical deep-dive copy
    Tech {
        /// Section heading
        heading: String,
        /// Specification rows
        spec_rows: Vec<SpecRow>,
    },
    /// Closing copy
    Outro {
        /// Closing headline
        headline: String,
        /// Call to action line
        call_to_action: String,
    },
}

/// An interactive point of interest anchored on a scene image.
///
/// Coordinates are percentages of the image dimensions in `[0, 100]`.
/// A hotspot is planned with a label first; the vision scan stage fills in
/// `x`/`y` once an image exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Hotspot identifier, unique within its scene
    pub id: String,
    /// Short label naming the feature (used by the vision locator)
    pub label: String,
    /// Horizontal position as a percentage of image width
    pub x: f64,
    /// Vertical position as a percentage of image height
    pub y: f64,
    /// Popup title
    pub title: String,
    /// Popup body text
    pub body: String,
}

/// A located point returned by the vision scan, percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HotspotPoint {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

/// One narrative unit within the story draft.
///
/// Scene order is stable once planning completes; later stages only enrich
/// fields on existing scenes, never reorder or delete them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene identifier
    pub id: String,
    /// Narrative role
    pub scene_type: SceneType,
    /// Theme tag steering visual style (e.g., "night-drive")
    pub theme_tag: String,
    /// Position within the story, assigned by the planner
    pub order: u32,
    /// Prompt-ready description of the desired imagery
    pub visual_direction: String,
    /// Narration text to be voiced for this scene
    pub narration: String,
    /// Written copy, filled by the scripting stage
    pub content: Option<SceneContent>,
    /// Rendered image URL, filled by the image synthesis stage
    pub image_url: Option<String>,
    /// Narration audio URL, filled by the audio synthesis stage
    pub audio_url: Option<String>,
    /// Display-ready caption cues derived from the narration audio
    pub subtitles: Vec<SubtitleCue>,
    /// Interactive hotspots (tech scenes), located by the vision scan
    pub hotspots: Vec<Hotspot>,
}

impl Scene {
    /// Create a bare scene as the planner emits it: typed, ordered, themed,
    /// with everything else left for later stages to enrich.
    pub fn new(
        scene_type: SceneType,
        order: u32,
        theme_tag: impl Into<String>,
        visual_direction: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            scene_type,
            theme_tag: theme_tag.into(),
            order,
            visual_direction: visual_direction.into(),
            narration: String::new(),
            content: None,
            image_url: None,
            audio_url: None,
            subtitles: Vec::new(),
            hotspots: Vec::new(),
        }
    }
}
