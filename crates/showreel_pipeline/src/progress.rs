//! Best-effort progress reporting to the run store.
//!
//! Progress visibility is advisory, not a correctness requirement: stage
//! and note writes swallow store errors after logging them, at-most-once.
//! Only the terminal `complete`/`failed` writes surface errors to the
//! caller, because those are the writes observers depend on.

use showreel_core::{Run, Stage, StoryDocument};
use showreel_error::ShowreelResult;
use showreel_interface::RunStore;
use std::sync::Arc;

pub(crate) struct ProgressReporter {
    store: Arc<dyn RunStore>,
}

impl ProgressReporter {
    pub fn new(store: Arc<dyn RunStore>) -> Self {
        Self { store }
    }

    /// Record entry into a stage. Best-effort.
    pub async fn stage_entered(&self, run: &mut Run, stage: Stage) {
        run.enter_stage(stage);
        self.try_put(run, "progress").await;
    }

    /// Append a log entry. Best-effort.
    pub async fn note(&self, run: &mut Run, entry: String) {
        run.push_log(entry);
        self.try_put(run, "note").await;
    }

    /// Terminal success write. Load-bearing.
    pub async fn finish_complete(
        &self,
        run: &mut Run,
        document: StoryDocument,
    ) -> ShowreelResult<()> {
        run.complete(document);
        self.store.put(run.clone()).await
    }

    /// Terminal failure write. Load-bearing.
    pub async fn finish_failed(&self, run: &mut Run, message: String) -> ShowreelResult<()> {
        run.fail(message);
        self.store.put(run.clone()).await
    }

    async fn try_put(&self, run: &Run, kind: &str) {
        if let Err(e) = self.store.put(run.clone()).await {
            tracing::warn!(
                run_id = %run.id,
                stage = %run.current_stage,
                write = kind,
                error = %e,
                "Best-effort run store write failed, continuing"
            );
        }
    }
}
