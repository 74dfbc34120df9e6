//! Run store error types.

/// Kinds of run store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// No run record exists for the given id
    #[display("Run not found: {}", _0)]
    NotFound(String),
    /// Failed to write a run record
    #[display("Failed to write run record: {}", _0)]
    WriteFailed(String),
    /// Failed to read a run record
    #[display("Failed to read run record: {}", _0)]
    ReadFailed(String),
    /// The store backend is unavailable
    #[display("Store unavailable: {}", _0)]
    Unavailable(String),
}

/// Run store error with location tracking.
///
/// # Examples
///
/// ```
/// use showreel_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::NotFound("abc123".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
