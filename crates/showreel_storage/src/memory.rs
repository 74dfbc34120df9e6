//! In-memory run store backend.

use async_trait::async_trait;
use showreel_core::Run;
use showreel_error::ShowreelResult;
use showreel_interface::RunStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// A run store keeping records in process memory.
///
/// Cloning is cheap and shares the underlying map, so the same store handle
/// can be given to the orchestrator (writer) and to observers (readers).
#[derive(Debug, Clone, Default)]
pub struct InMemoryRunStore {
    runs: Arc<RwLock<HashMap<Uuid, Run>>>,
}

impl InMemoryRunStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of run records currently held.
    pub async fn len(&self) -> usize {
        self.runs.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.runs.read().await.is_empty()
    }
}

#[async_trait]
impl RunStore for InMemoryRunStore {
    async fn put(&self, run: Run) -> ShowreelResult<()> {
        debug!(run_id = %run.id, status = %run.status, stage = %run.current_stage, "Writing run record");
        self.runs.write().await.insert(run.id, run);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> ShowreelResult<Option<Run>> {
        Ok(self.runs.read().await.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showreel_core::{RunStatus, Stage};

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = InMemoryRunStore::new();
        let id = Uuid::new_v4();
        store.put(Run::new(id, "vin-1")).await.unwrap();

        let run = store.get(id).await.unwrap().unwrap();
        assert_eq!(run.subject_id, "vin-1");
        assert_eq!(run.status, RunStatus::Processing);
        assert_eq!(run.current_stage, Stage::System);
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let store = InMemoryRunStore::new();
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_replaces_existing_record() {
        let store = InMemoryRunStore::new();
        let id = Uuid::new_v4();
        let mut run = Run::new(id, "vin-1");
        store.put(run.clone()).await.unwrap();

        run.fail("boom");
        store.put(run).await.unwrap();

        let stored = store.get(id).await.unwrap().unwrap();
        assert_eq!(stored.status, RunStatus::Failed);
        assert_eq!(store.len().await, 1);
    }
}
