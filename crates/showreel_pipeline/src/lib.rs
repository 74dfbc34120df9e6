//! Stage orchestration engine for the Showreel story pipeline.
//!
//! This crate turns structured vehicle data into a multi-scene multimedia
//! story by running a fixed sequence of content-generation stages. The
//! moving parts:
//!
//! - [`PipelineOrchestrator`] sequences stages, fans out per-scene work,
//!   and reports best-effort progress to the run store. Stage-level
//!   failures are fatal; scene-level failures degrade the output.
//! - [`BadgeCollectionEngine`] runs independently-fallible badge collectors
//!   concurrently with settle-all semantics.
//! - [`resolve_badges`] deterministically deduplicates and orders the
//!   collected candidates.
//! - [`segment`] turns word-level timestamps into display-ready subtitle
//!   cues under multiple simultaneous constraints.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembly;
mod badge_engine;
mod badge_resolver;
mod fanout;
mod orchestrator;
mod progress;
mod subtitles;

pub use assembly::assemble_document;
pub use badge_engine::BadgeCollectionEngine;
pub use badge_resolver::resolve_badges;
pub use orchestrator::{PipelineOrchestrator, PipelineOrchestratorBuilder};
pub use subtitles::{segment, SegmenterConfig, SegmenterConfigBuilder};
