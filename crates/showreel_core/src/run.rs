//! Run records tracked in the external status store.

use crate::{Stage, StoryDocument};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Terminal and non-terminal run states.
///
/// # Examples
///
/// ```
/// use showreel_core::RunStatus;
///
/// assert!(!RunStatus::Processing.is_terminal());
/// assert!(RunStatus::Complete.is_terminal());
/// assert!(RunStatus::Failed.is_terminal());
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
pub enum RunStatus {
    /// The pipeline is still executing stages
    Processing,
    /// The run finished and `content` holds the assembled document
    Complete,
    /// A stage failed; the run log holds the error message
    Failed,
}

impl RunStatus {
    /// Whether this status is terminal.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }
}

/// One execution of the full generation pipeline for one subject.
///
/// The orchestrator is the sole writer of a run record; external observers
/// poll or subscribe read-only. A run becomes terminal exactly once and is
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Run identifier
    pub id: Uuid,
    /// Subject (vehicle) identifier this run narrates
    pub subject_id: String,
    /// Current status
    pub status: RunStatus,
    /// Stage most recently entered
    pub current_stage: Stage,
    /// Final assembled document, present only once `status` is `Complete`
    pub content: Option<StoryDocument>,
    /// Ordered human-readable log entries
    pub log: Vec<String>,
    /// When the run record was created
    pub created_at: DateTime<Utc>,
    /// When the run record was last written
    pub updated_at: DateTime<Utc>,
}

impl Run {
    /// Create a fresh run in `Processing` at stage `System`.
    pub fn new(id: Uuid, subject_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            subject_id: subject_id.into(),
            status: RunStatus::Processing,
            current_stage: Stage::System,
            content: None,
            log: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a log entry and refresh the update timestamp.
    pub fn push_log(&mut self, entry: impl Into<String>) {
        self.log.push(entry.into());
        self.updated_at = Utc::now();
    }

    /// Record entry into a stage.
    pub fn enter_stage(&mut self, stage: Stage) {
        self.current_stage = stage;
        self.updated_at = Utc::now();
        self.push_log(format!("stage={stage} entered"));
    }

    /// Mark the run complete with its assembled document.
    pub fn complete(&mut self, document: StoryDocument) {
        self.status = RunStatus::Complete;
        self.current_stage = Stage::Complete;
        self.content = Some(document);
        self.updated_at = Utc::now();
    }

    /// Mark the run failed with a human-readable error message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = RunStatus::Failed;
        self.current_stage = Stage::Error;
        self.push_log(message);
        self.updated_at = Utc::now();
    }
}
