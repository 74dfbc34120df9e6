//! Per-scene fan-out/fan-in with error absorption.
//!
//! Stages that map over scenes run one task per scene, concurrently, and
//! fan back in only after every task settles. A failed task never
//! propagates: it yields the original, unmodified scene plus a log note,
//! so one bad scene degrades the output instead of aborting the run.

use futures::future::{join_all, BoxFuture};
use showreel_core::{Scene, Stage};
use showreel_error::ShowreelResult;

/// One per-scene task: the fallback scene to keep on failure, and the
/// future computing the enriched scene.
pub(crate) type SceneTask = (Scene, BoxFuture<'static, ShowreelResult<Scene>>);

/// The settled outcome of a fan-out stage.
pub(crate) struct SceneSettlement {
    /// Scenes in their original order, enriched where tasks succeeded.
    pub scenes: Vec<Scene>,
    /// One log note per degraded scene.
    pub degraded: Vec<String>,
}

/// Run all scene tasks concurrently and wait for every one to settle.
///
/// Input order is preserved. Failures are converted to the fallback scene
/// before fan-in, so the caller never sees an error from this layer.
pub(crate) async fn settle_scene_tasks(stage: Stage, tasks: Vec<SceneTask>) -> SceneSettlement {
    let settled = join_all(tasks.into_iter().map(|(fallback, task)| async move {
        match task.await {
            Ok(scene) => (scene, None),
            Err(e) => {
                tracing::warn!(
                    stage = %stage,
                    scene_id = %fallback.id,
                    error = %e,
                    "Scene task failed, keeping original scene"
                );
                let note = format!(
                    "stage={} scene={} degraded: {}",
                    stage.label(),
                    fallback.id,
                    e
                );
                (fallback, Some(note))
            }
        }
    }))
    .await;

    let mut scenes = Vec::with_capacity(settled.len());
    let mut degraded = Vec::new();
    for (scene, note) in settled {
        scenes.push(scene);
        if let Some(note) = note {
            degraded.push(note);
        }
    }
    SceneSettlement { scenes, degraded }
}
