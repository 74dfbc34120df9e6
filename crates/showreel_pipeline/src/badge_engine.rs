//! Concurrent badge collection with settle-all semantics.

use futures::future::join_all;
use showreel_core::{Badge, StoryContext};
use showreel_interface::BadgeCollector;
use std::sync::Arc;

/// Runs the injected badge collectors concurrently and tolerates individual
/// failures.
///
/// A failing collector is logged and contributes zero badges; the other
/// collectors' results are still used. If every collector fails the engine
/// returns an empty list rather than an error: a badge-less story is valid,
/// an aborted pipeline is not.
#[derive(Clone)]
pub struct BadgeCollectionEngine {
    collectors: Vec<Arc<dyn BadgeCollector>>,
}

impl BadgeCollectionEngine {
    /// Create an engine over the given collectors.
    pub fn new(collectors: Vec<Arc<dyn BadgeCollector>>) -> Self {
        Self { collectors }
    }

    /// Number of registered collectors.
    pub fn len(&self) -> usize {
        self.collectors.len()
    }

    /// Whether the engine has no collectors at all.
    pub fn is_empty(&self) -> bool {
        self.collectors.is_empty()
    }

    /// Collect candidate badges from every collector, settle-all.
    #[tracing::instrument(skip(self, ctx), fields(subject_id = %ctx.subject_id, collectors = self.collectors.len()))]
    pub async fn collect(&self, ctx: &StoryContext) -> Vec<Badge> {
        let settled = join_all(self.collectors.iter().map(|collector| async move {
            (collector.name(), collector.collect(ctx).await)
        }))
        .await;

        let mut candidates = Vec::new();
        for (name, result) in settled {
            match result {
                Ok(mut badges) => {
                    tracing::debug!(
                        collector = name,
                        count = badges.len(),
                        "Collector contributed badges"
                    );
                    candidates.append(&mut badges);
                }
                Err(e) => {
                    tracing::warn!(
                        collector = name,
                        error = %e,
                        "Badge collector failed, contributing no badges"
                    );
                }
            }
        }
        candidates
    }
}

impl std::fmt::Debug for BadgeCollectionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BadgeCollectionEngine")
            .field("collectors", &self.collectors.len())
            .finish()
    }
}
