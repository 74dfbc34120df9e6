//! Top-level error wrapper types.

use crate::{BuilderError, CollaboratorError, JsonError, PipelineError, StoreError};

/// This is the foundation error enum for the Showreel workspace.
///
/// # Examples
///
/// ```
/// use showreel_error::{ShowreelError, StoreError, StoreErrorKind};
///
/// let store_err = StoreError::new(StoreErrorKind::Unavailable("down".to_string()));
/// let err: ShowreelError = store_err.into();
/// assert!(format!("{}", err).contains("Store Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ShowreelErrorKind {
    /// Run store error
    #[from(StoreError)]
    Store(StoreError),
    /// External collaborator error
    #[from(CollaboratorError)]
    Collaborator(CollaboratorError),
    /// Pipeline orchestration error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Showreel error with kind discrimination.
///
/// # Examples
///
/// ```
/// use showreel_error::{ShowreelResult, PipelineError, PipelineErrorKind};
///
/// fn might_fail() -> ShowreelResult<()> {
///     Err(PipelineError::new(PipelineErrorKind::EmptyPlan))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Showreel Error: {}", _0)]
pub struct ShowreelError(Box<ShowreelErrorKind>);

impl ShowreelError {
    /// Create a new error from a kind.
    pub fn new(kind: ShowreelErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ShowreelErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ShowreelErrorKind
impl<T> From<T> for ShowreelError
where
    T: Into<ShowreelErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Showreel operations.
///
/// # Examples
///
/// ```
/// use showreel_error::{ShowreelResult, JsonError};
///
/// fn parse() -> ShowreelResult<String> {
///     Err(JsonError::new("trailing comma"))?
/// }
/// ```
pub type ShowreelResult<T> = std::result::Result<T, ShowreelError>;
