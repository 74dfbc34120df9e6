//! Error types for the Showreel story pipeline.
//!
//! This crate provides the foundation error types used throughout the Showreel
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use showreel_error::{ShowreelResult, CollaboratorError, CollaboratorErrorKind};
//!
//! fn render() -> ShowreelResult<String> {
//!     Err(CollaboratorError::new(CollaboratorErrorKind::GenerationFailed(
//!         "image model unavailable".to_string(),
//!     )))?
//! }
//!
//! assert!(render().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod collaborator;
mod error;
mod json;
mod pipeline;
mod store;

pub use builder::{BuilderError, BuilderErrorKind};
pub use collaborator::{CollaboratorError, CollaboratorErrorKind};
pub use error::{ShowreelError, ShowreelErrorKind, ShowreelResult};
pub use json::JsonError;
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use store::{StoreError, StoreErrorKind};
