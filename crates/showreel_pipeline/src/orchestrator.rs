//! The top-level pipeline state machine.
//!
//! The orchestrator sequences the fixed stage order, fans out per-scene
//! work, invokes badge collection as one stage, and reports progress to
//! the external run store. Stage-level failures are fatal and unretried;
//! scene-level failures are absorbed by the fan-out layer and degrade the
//! output instead of aborting the run.

use crate::assembly::assemble_document;
use crate::badge_engine::BadgeCollectionEngine;
use crate::badge_resolver::resolve_badges;
use crate::fanout::{settle_scene_tasks, SceneTask};
use crate::progress::ProgressReporter;
use crate::subtitles::{segment, SegmenterConfig};
use futures::FutureExt;
use showreel_core::{Run, Scene, Stage, StoryContext, StoryDocument, StoryDraft, StoryInput};
use showreel_error::{PipelineError, PipelineErrorKind, ShowreelResult};
use showreel_interface::{
    CopyWriter, HotspotLocator, ImageRenderer, RunStore, ScenePlanner, SpeechSynthesizer,
    StoryAnalyst, TimestampTranscriber, VehicleSource,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Sequences the content-generation stages for one run at a time.
///
/// All collaborators are injected as trait objects; the orchestrator adds
/// no timeout or retry layer of its own. Build one with
/// [`PipelineOrchestrator::builder`] and share it behind an [`Arc`].
///
/// # Example
///
/// ```rust,ignore
/// let orchestrator = Arc::new(
///     PipelineOrchestrator::builder()
///         .store(store)
///         .vehicles(vehicles)
///         .analyst(analyst)
///         .planner(planner)
///         .copy_writer(copy_writer)
///         .image_renderer(image_renderer)
///         .hotspot_locator(hotspot_locator)
///         .speech(speech)
///         .transcriber(transcriber)
///         .badge_engine(BadgeCollectionEngine::new(collectors))
///         .build()?,
/// );
/// orchestrator.start(Uuid::new_v4(), input);
/// ```
#[derive(Clone, derive_builder::Builder)]
pub struct PipelineOrchestrator {
    /// External status store; the orchestrator is its sole writer
    store: Arc<dyn RunStore>,
    /// Subject record lookup used by ingestion
    vehicles: Arc<dyn VehicleSource>,
    /// Title and narrative summary writer
    analyst: Arc<dyn StoryAnalyst>,
    /// Scene planner; the plan freezes scene order
    planner: Arc<dyn ScenePlanner>,
    /// Per-scene copy writer
    copy_writer: Arc<dyn CopyWriter>,
    /// Per-scene image renderer
    image_renderer: Arc<dyn ImageRenderer>,
    /// Hotspot coordinate locator
    hotspot_locator: Arc<dyn HotspotLocator>,
    /// Narration speech synthesizer
    speech: Arc<dyn SpeechSynthesizer>,
    /// Word-timestamp transcriber feeding subtitle segmentation
    transcriber: Arc<dyn TimestampTranscriber>,
    /// Badge collection engine run as one stage
    badge_engine: BadgeCollectionEngine,
    /// Subtitle segmentation constants
    #[builder(default)]
    segmenter: SegmenterConfig,
}

impl PipelineOrchestrator {
    /// Start building an orchestrator.
    pub fn builder() -> PipelineOrchestratorBuilder {
        PipelineOrchestratorBuilder::default()
    }

    /// Begin background execution of a run. Fire-and-forget.
    ///
    /// The run record is created as the background task's first action and
    /// the run then proceeds to a terminal state with no external abort
    /// mechanism. The returned handle may be awaited or dropped freely;
    /// completion is observed through the run store.
    pub fn start(self: &Arc<Self>, run_id: Uuid, input: StoryInput) -> JoinHandle<()> {
        let orchestrator = Arc::clone(self);
        tokio::spawn(async move {
            orchestrator.run(run_id, input).await;
        })
    }

    #[tracing::instrument(skip(self, input), fields(run_id = %run_id, subject_id = %input.subject_id()))]
    async fn run(&self, run_id: Uuid, input: StoryInput) {
        let mut run = Run::new(run_id, input.subject_id().clone());
        if let Err(e) = self.store.put(run.clone()).await {
            tracing::error!(run_id = %run_id, error = %e, "Failed to create run record, aborting");
            return;
        }

        let progress = ProgressReporter::new(Arc::clone(&self.store));
        match self.execute(&mut run, &progress, &input).await {
            Ok(document) => {
                tracing::info!(run_id = %run_id, scenes = document.scenes.len(), "Run complete");
                if let Err(e) = progress.finish_complete(&mut run, document).await {
                    tracing::error!(run_id = %run_id, error = %e, "Terminal complete write failed");
                }
            }
            Err(e) => {
                tracing::error!(run_id = %run_id, error = %e, "Stage failed, aborting run");
                if let Err(write_err) = progress.finish_failed(&mut run, e.to_string()).await {
                    tracing::error!(run_id = %run_id, error = %write_err, "Terminal failed write failed");
                }
            }
        }
    }

    /// Execute every stage in order, building up the story draft.
    ///
    /// Any error returned here is a stage-level failure: the caller marks
    /// the run failed and performs no further stages.
    async fn execute(
        &self,
        run: &mut Run,
        progress: &ProgressReporter,
        input: &StoryInput,
    ) -> ShowreelResult<StoryDocument> {
        let mut draft = StoryDraft::new(input.subject_id().clone());

        progress.stage_entered(run, Stage::Ingestion).await;
        draft.subject_data = self.vehicles.fetch(&draft.subject_id).await?;

        progress.stage_entered(run, Stage::BadgeCollection).await;
        let candidates = self.badge_engine.collect(&draft.context()).await;
        draft.badges = resolve_badges(candidates);
        progress
            .note(run, format!("stage=badge_collection resolved={}", draft.badges.len()))
            .await;

        progress.stage_entered(run, Stage::Analysis).await;
        let angle = self.analyst.analyze(&draft).await?;
        draft.title = angle.title;
        draft.narrative_summary = angle.narrative_summary;

        progress.stage_entered(run, Stage::Planning).await;
        let scenes = self.planner.plan(&draft, input).await?;
        if scenes.is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::EmptyPlan).into());
        }
        progress
            .note(run, format!("stage=planning scenes={}", scenes.len()))
            .await;
        draft.scenes = scenes;

        self.fan_out(run, progress, &mut draft, Stage::Scripting).await;
        self.fan_out(run, progress, &mut draft, Stage::ImageSynthesis).await;
        self.fan_out(run, progress, &mut draft, Stage::VisionScan).await;
        self.fan_out(run, progress, &mut draft, Stage::AudioSynthesis).await;

        progress.stage_entered(run, Stage::QaAssembly).await;
        Ok(assemble_document(run.id, draft))
    }

    /// Run one fan-out stage: map every scene to a task, settle all, and
    /// log each degraded scene. Never fails; per-scene errors fall back to
    /// the unmodified scene.
    async fn fan_out(
        &self,
        run: &mut Run,
        progress: &ProgressReporter,
        draft: &mut StoryDraft,
        stage: Stage,
    ) {
        progress.stage_entered(run, stage).await;

        let ctx = Arc::new(draft.context());
        let scenes = std::mem::take(&mut draft.scenes);
        let tasks: Vec<SceneTask> = scenes
            .into_iter()
            .map(|scene| self.scene_task(stage, scene, Arc::clone(&ctx)))
            .collect();

        let settlement = settle_scene_tasks(stage, tasks).await;
        draft.scenes = settlement.scenes;
        for note in settlement.degraded {
            progress.note(run, note).await;
        }
    }

    /// Build the per-scene task for a fan-out stage.
    fn scene_task(&self, stage: Stage, scene: Scene, ctx: Arc<StoryContext>) -> SceneTask {
        let fallback = scene.clone();
        let task = match stage {
            Stage::Scripting => {
                let writer = Arc::clone(&self.copy_writer);
                async move { writer.write_scene_copy(scene, &ctx).await }.boxed()
            }
            Stage::ImageSynthesis => {
                let renderer = Arc::clone(&self.image_renderer);
                async move {
                    let prompt = format!("{} | theme: {}", scene.visual_direction, scene.theme_tag);
                    let url = renderer.render(&prompt).await?;
                    let mut scene = scene;
                    scene.image_url = Some(url);
                    Ok(scene)
                }
                .boxed()
            }
            Stage::VisionScan => {
                let locator = Arc::clone(&self.hotspot_locator);
                async move {
                    let Some(image_url) = scene.image_url.clone() else {
                        return Ok(scene);
                    };
                    if scene.hotspots.is_empty() {
                        return Ok(scene);
                    }
                    let labels: Vec<(String, String)> = scene
                        .hotspots
                        .iter()
                        .map(|h| (h.id.clone(), h.label.clone()))
                        .collect();
                    let points = locator.locate(&image_url, &labels).await?;
                    let mut scene = scene;
                    for hotspot in &mut scene.hotspots {
                        if let Some(point) = points.get(&hotspot.id) {
                            hotspot.x = point.x;
                            hotspot.y = point.y;
                        }
                    }
                    Ok(scene)
                }
                .boxed()
            }
            Stage::AudioSynthesis => {
                let speech = Arc::clone(&self.speech);
                let transcriber = Arc::clone(&self.transcriber);
                let segmenter = self.segmenter.clone();
                async move {
                    if scene.narration.trim().is_empty() {
                        return Ok(scene);
                    }
                    let Some(audio) = speech.synthesize(&scene.narration).await? else {
                        return Ok(scene);
                    };
                    let words = transcriber.transcribe(&audio.bytes).await?;
                    let mut scene = scene;
                    scene.audio_url = Some(audio.url);
                    scene.subtitles = segment(&words, &segmenter);
                    Ok(scene)
                }
                .boxed()
            }
            // Remaining stages never fan out.
            _ => async move { Ok(scene) }.boxed(),
        };
        (fallback, task)
    }
}

impl std::fmt::Debug for PipelineOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineOrchestrator")
            .field("badge_engine", &self.badge_engine)
            .field("segmenter", &self.segmenter)
            .finish()
    }
}
