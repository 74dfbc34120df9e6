//! Pipeline error types.

/// Specific error conditions for pipeline orchestration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// The subject record required by ingestion does not exist
    #[display("Subject '{}' has no vehicle record", _0)]
    MissingSubject(String),
    /// A whole stage failed; the run is aborted
    #[display("Stage '{}' failed: {}", stage, message)]
    StageFailed {
        /// Stage label
        stage: String,
        /// Error message
        message: String,
    },
    /// The planner produced no scenes
    #[display("Planning produced an empty scene list")]
    EmptyPlan,
    /// The run record disappeared mid-flight
    #[display("Run '{}' not found in status store", _0)]
    RunLost(String),
    /// Pipeline configuration error
    #[display("Configuration error: {}", _0)]
    ConfigurationError(String),
}

/// Error type for pipeline operations.
///
/// # Examples
///
/// ```
/// use showreel_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::EmptyPlan);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new pipeline error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
