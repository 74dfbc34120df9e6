//! Core data types for the Showreel story pipeline.
//!
//! This crate provides the foundation data types shared across the Showreel
//! workspace: run records, story drafts, scenes, badges, and subtitle cues.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod badge;
mod document;
mod draft;
mod input;
mod run;
mod scene;
mod stage;
mod subtitle;
mod telemetry;

pub use badge::{Badge, BadgeCategory};
pub use document::{
    DocumentMeta, SceneDocument, StoryDocument, PLACEHOLDER_IMAGE_URL, SCHEMA_VERSION,
};
pub use draft::{StoryContext, StoryDraft};
pub use input::{StoryInput, StoryInputBuilder};
pub use run::{Run, RunStatus};
pub use scene::{Hotspot, HotspotPoint, Scene, SceneContent, SceneType, SpecRow};
pub use stage::Stage;
pub use subtitle::{SubtitleCue, WordTimestamp};
pub use telemetry::init_telemetry;
