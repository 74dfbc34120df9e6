//! Collaborator error types.
//!
//! Collaborators are the opaque external services the pipeline calls into:
//! text writing, image synthesis, speech synthesis, vision scanning, and the
//! badge collectors.

/// Specific error conditions for collaborator calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CollaboratorErrorKind {
    /// An external lookup returned no usable record
    #[display("Lookup failed: {}", _0)]
    LookupFailed(String),
    /// A content-generation call failed outright
    #[display("Generation failed: {}", _0)]
    GenerationFailed(String),
    /// The collaborator returned a response the pipeline cannot use
    #[display("Invalid response: {}", _0)]
    InvalidResponse(String),
    /// The collaborator is not reachable
    #[display("Collaborator unavailable: {}", _0)]
    Unavailable(String),
}

/// Collaborator error with location tracking.
///
/// # Examples
///
/// ```
/// use showreel_error::{CollaboratorError, CollaboratorErrorKind};
///
/// let err = CollaboratorError::new(CollaboratorErrorKind::LookupFailed(
///     "vehicle VIN-000 missing".to_string(),
/// ));
/// assert!(format!("{}", err).contains("Lookup failed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Collaborator Error: {} at line {} in {}", kind, line, file)]
pub struct CollaboratorError {
    /// The specific error condition
    pub kind: CollaboratorErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CollaboratorError {
    /// Create a new collaborator error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CollaboratorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
