//! Trait definitions for the Showreel story pipeline.
//!
//! The pipeline core consumes every external capability through the traits
//! in this crate: content generation, vision, speech, transcription, badge
//! collection, and the run status store. Implementations live in the
//! surrounding system; the pipeline treats them all as black boxes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{
    BadgeCollector, CopyWriter, HotspotLocator, ImageRenderer, RunStore, ScenePlanner,
    SpeechSynthesizer, StoryAnalyst, TimestampTranscriber, VehicleSource,
};
pub use types::{SpeechAudio, StoryAngle};
