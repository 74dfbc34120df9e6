//! Collaborator contracts the pipeline core consumes.

use crate::{SpeechAudio, StoryAngle};
use async_trait::async_trait;
use showreel_core::{
    Badge, HotspotPoint, Run, Scene, StoryContext, StoryDraft, StoryInput, WordTimestamp,
};
use showreel_error::ShowreelResult;
use std::collections::HashMap;
use uuid::Uuid;

/// Source of raw vehicle records.
///
/// Ingestion is the one lookup the pipeline cannot degrade around: a missing
/// subject record is a fatal stage error.
#[async_trait]
pub trait VehicleSource: Send + Sync {
    /// Fetch the raw record for a subject.
    async fn fetch(&self, subject_id: &str) -> ShowreelResult<serde_json::Value>;
}

/// Derives the story title and cross-scene narrative summary.
#[async_trait]
pub trait StoryAnalyst: Send + Sync {
    /// Analyze the draft built so far and propose the story angle.
    async fn analyze(&self, draft: &StoryDraft) -> ShowreelResult<StoryAngle>;
}

/// Plans the ordered scene list.
///
/// Scene order is frozen once planning returns; later stages only enrich
/// the scenes it produced.
#[async_trait]
pub trait ScenePlanner: Send + Sync {
    /// Produce the ordered scene plan for the draft.
    async fn plan(&self, draft: &StoryDraft, input: &StoryInput) -> ShowreelResult<Vec<Scene>>;
}

/// Writes the copy for a single scene.
#[async_trait]
pub trait CopyWriter: Send + Sync {
    /// Return the scene enriched with written copy and narration.
    ///
    /// Failures are absorbed by the fan-out layer above: the run continues
    /// with the unmodified input scene.
    async fn write_scene_copy(&self, scene: Scene, ctx: &StoryContext) -> ShowreelResult<Scene>;
}

/// Renders a single scene image from a prompt.
#[async_trait]
pub trait ImageRenderer: Send + Sync {
    /// Render an image and return its URL.
    async fn render(&self, prompt: &str) -> ShowreelResult<String>;
}

/// Synthesizes narration speech.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize speech for the given text.
    ///
    /// Returns `None` when the text is empty or the synthesizer chooses to
    /// skip; the scene then ships without audio.
    async fn synthesize(&self, text: &str) -> ShowreelResult<Option<SpeechAudio>>;
}

/// Produces word-level timestamps from narration audio.
#[async_trait]
pub trait TimestampTranscriber: Send + Sync {
    /// Transcribe raw audio bytes into word timestamps.
    async fn transcribe(&self, audio: &[u8]) -> ShowreelResult<Vec<WordTimestamp>>;
}

/// Locates hotspot coordinates on a rendered scene image.
#[async_trait]
pub trait HotspotLocator: Send + Sync {
    /// Locate the labelled features on the image.
    ///
    /// `labels` pairs each hotspot id with its feature label. The returned
    /// map may be empty or partial; unlocated hotspots keep their defaults.
    async fn locate(
        &self,
        image_url: &str,
        labels: &[(String, String)],
    ) -> ShowreelResult<HashMap<String, HotspotPoint>>;
}

/// One independently-fallible badge collector.
///
/// Collectors are injected as a list of trait objects; the engine runs them
/// concurrently with settle-all semantics, so a failing collector simply
/// contributes zero badges.
#[async_trait]
pub trait BadgeCollector: Send + Sync {
    /// Collector name used in logs.
    fn name(&self) -> &'static str;

    /// Collect candidate badges for the subject.
    async fn collect(&self, ctx: &StoryContext) -> ShowreelResult<Vec<Badge>>;
}

/// The external status store tracking run records.
///
/// The orchestrator is the sole writer; observers read. Progress writes are
/// best-effort, only the terminal write is load-bearing.
#[async_trait]
pub trait RunStore: Send + Sync {
    /// Insert or replace a run record.
    async fn put(&self, run: Run) -> ShowreelResult<()>;

    /// Fetch a run record by id.
    async fn get(&self, id: Uuid) -> ShowreelResult<Option<Run>>;
}
