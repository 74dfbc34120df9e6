//! Caller-supplied generation parameters.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Parameters a caller supplies when starting a run.
///
/// # Examples
///
/// ```
/// use showreel_core::StoryInput;
///
/// let input = StoryInput::builder()
///     .subject_id("vin-123")
///     .tone("confident")
///     .scene_count(5u32)
///     .build()
///     .unwrap();
/// assert_eq!(input.subject_id(), "vin-123");
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct StoryInput {
    /// Subject (vehicle) identifier
    subject_id: String,
    /// Desired tone of voice for generated copy
    #[builder(setter(strip_option), default)]
    #[serde(default)]
    tone: Option<String>,
    /// Target audience description
    #[builder(setter(strip_option), default)]
    #[serde(default)]
    audience: Option<String>,
    /// Requested number of scenes; the planner may adjust
    #[builder(setter(strip_option), default)]
    #[serde(default)]
    scene_count: Option<u32>,
}

impl StoryInput {
    /// Start building a story input.
    pub fn builder() -> StoryInputBuilder {
        StoryInputBuilder::default()
    }
}
