//! End-to-end pipeline execution against mock collaborators.

use async_trait::async_trait;
use serde_json::json;
use showreel_core::{
    Badge, BadgeCategory, Hotspot, Run, RunStatus, Scene, SceneContent, SceneType, Stage,
    StoryContext, StoryDraft, StoryInput, WordTimestamp, PLACEHOLDER_IMAGE_URL,
};
use showreel_error::{
    CollaboratorError, CollaboratorErrorKind, ShowreelResult, StoreError, StoreErrorKind,
};
use showreel_interface::{
    BadgeCollector, CopyWriter, HotspotLocator, ImageRenderer, RunStore, ScenePlanner, SpeechAudio,
    SpeechSynthesizer, StoryAnalyst, StoryAngle, TimestampTranscriber, VehicleSource,
};
use showreel_pipeline::{BadgeCollectionEngine, PipelineOrchestrator};
use showreel_storage::InMemoryRunStore;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Mock collaborators
// ---------------------------------------------------------------------------

#[derive(Default)]
struct StubVehicles {
    fail: bool,
    calls: AtomicUsize,
}

#[async_trait]
impl VehicleSource for StubVehicles {
    async fn fetch(&self, subject_id: &str) -> ShowreelResult<serde_json::Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CollaboratorError::new(CollaboratorErrorKind::LookupFailed(
                format!("vehicle {subject_id} missing"),
            ))
            .into());
        }
        Ok(json!({ "vin": subject_id, "model": "Aurora GT", "year": 2026 }))
    }
}

#[derive(Default)]
struct StubAnalyst {
    calls: AtomicUsize,
}

#[async_trait]
impl StoryAnalyst for StubAnalyst {
    async fn analyze(&self, _draft: &StoryDraft) -> ShowreelResult<StoryAngle> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(StoryAngle {
            title: "Aurora GT, Reimagined".to_string(),
            narrative_summary: "A grand tourer that hides its tech well.".to_string(),
        })
    }
}

#[derive(Default)]
struct StubPlanner {
    empty: bool,
    calls: AtomicUsize,
}

#[async_trait]
impl ScenePlanner for StubPlanner {
    async fn plan(&self, _draft: &StoryDraft, _input: &StoryInput) -> ShowreelResult<Vec<Scene>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.empty {
            return Ok(Vec::new());
        }
        let mut scenes = vec![
            Scene::new(SceneType::Intro, 0, "scene-0", "sunrise reveal"),
            Scene::new(SceneType::Slide, 1, "scene-1", "coastal road"),
            Scene::new(SceneType::Tech, 2, "scene-2", "cutaway of the drivetrain"),
            Scene::new(SceneType::Outro, 3, "scene-3", "hero shot at dusk"),
        ];
        scenes[2].hotspots = vec![
            Hotspot {
                id: "motor".to_string(),
                label: "electric motor".to_string(),
                x: 0.0,
                y: 0.0,
                title: "Motor".to_string(),
                body: "Dual permanent-magnet motors.".to_string(),
            },
            Hotspot {
                id: "battery".to_string(),
                label: "battery pack".to_string(),
                x: 0.0,
                y: 0.0,
                title: "Battery".to_string(),
                body: "Skateboard pack, 95 kWh.".to_string(),
            },
        ];
        Ok(scenes)
    }
}

#[derive(Default)]
struct StubCopyWriter {
    calls: AtomicUsize,
}

#[async_trait]
impl CopyWriter for StubCopyWriter {
    async fn write_scene_copy(&self, scene: Scene, _ctx: &StoryContext) -> ShowreelResult<Scene> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut scene = scene;
        scene.narration = "The car, is fast.".to_string();
        scene.content = Some(match scene.scene_type {
            SceneType::Intro => SceneContent::Intro {
                headline: "Meet the Aurora GT".to_string(),
                tagline: "Quiet speed.".to_string(),
            },
            SceneType::Slide => SceneContent::Slide {
                heading: "On the road".to_string(),
                body: "Composed at any pace.".to_string(),
                bullets: vec!["adaptive dampers".to_string()],
            },
            SceneType::Tech => SceneContent::Tech {
                heading: "Under the skin".to_string(),
                spec_rows: Vec::new(),
            },
            SceneType::Outro => SceneContent::Outro {
                headline: "Go further".to_string(),
                call_to_action: "Book a drive.".to_string(),
            },
        });
        Ok(scene)
    }
}

#[derive(Default)]
struct StubRenderer {
    fail_theme: Option<&'static str>,
    calls: AtomicUsize,
}

#[async_trait]
impl ImageRenderer for StubRenderer {
    async fn render(&self, prompt: &str) -> ShowreelResult<String> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(theme) = self.fail_theme {
            if prompt.contains(theme) {
                return Err(CollaboratorError::new(CollaboratorErrorKind::GenerationFailed(
                    "render farm overloaded".to_string(),
                ))
                .into());
            }
        }
        Ok(format!("https://img.example/{n}.png"))
    }
}

#[derive(Default)]
struct StubLocator {
    calls: AtomicUsize,
}

#[async_trait]
impl HotspotLocator for StubLocator {
    async fn locate(
        &self,
        _image_url: &str,
        labels: &[(String, String)],
    ) -> ShowreelResult<HashMap<String, showreel_core::HotspotPoint>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(labels
            .iter()
            .map(|(id, _)| (id.clone(), showreel_core::HotspotPoint { x: 42.0, y: 58.0 }))
            .collect())
    }
}

#[derive(Default)]
struct StubSpeech {
    calls: AtomicUsize,
}

#[async_trait]
impl SpeechSynthesizer for StubSpeech {
    async fn synthesize(&self, text: &str) -> ShowreelResult<Option<SpeechAudio>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(SpeechAudio {
            url: "https://audio.example/clip.mp3".to_string(),
            bytes: vec![1, 2, 3],
        }))
    }
}

#[derive(Default)]
struct StubTranscriber {
    calls: AtomicUsize,
}

#[async_trait]
impl TimestampTranscriber for StubTranscriber {
    async fn transcribe(&self, _audio: &[u8]) -> ShowreelResult<Vec<WordTimestamp>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            WordTimestamp::new("The", 0.0, 0.1),
            WordTimestamp::new("car,", 0.1, 0.4),
            WordTimestamp::new("is", 2.0, 2.1),
            WordTimestamp::new("fast.", 2.1, 2.6),
        ])
    }
}

struct StubCollector {
    name: &'static str,
    badges: Vec<Badge>,
    fail: bool,
    calls: AtomicUsize,
}

impl StubCollector {
    fn ok(name: &'static str, badges: Vec<Badge>) -> Arc<Self> {
        Arc::new(Self {
            name,
            badges,
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            badges: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl BadgeCollector for StubCollector {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn collect(&self, _ctx: &StoryContext) -> ShowreelResult<Vec<Badge>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CollaboratorError::new(CollaboratorErrorKind::Unavailable(
                format!("{} offline", self.name),
            ))
            .into());
        }
        Ok(self.badges.clone())
    }
}

/// Store wrapper that fails every best-effort write but lets the run
/// creation and terminal writes through.
struct FlakyStore {
    inner: InMemoryRunStore,
}

#[async_trait]
impl RunStore for FlakyStore {
    async fn put(&self, run: Run) -> ShowreelResult<()> {
        if !run.status.is_terminal() && run.current_stage != Stage::System {
            return Err(StoreError::new(StoreErrorKind::Unavailable(
                "progress channel down".to_string(),
            ))
            .into());
        }
        self.inner.put(run).await
    }

    async fn get(&self, id: Uuid) -> ShowreelResult<Option<Run>> {
        self.inner.get(id).await
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

#[derive(Default)]
struct HarnessOptions {
    vehicles_fail: bool,
    empty_plan: bool,
    fail_image_theme: Option<&'static str>,
    all_collectors_fail: bool,
    flaky_progress: bool,
}

struct Harness {
    store: InMemoryRunStore,
    vehicles: Arc<StubVehicles>,
    analyst: Arc<StubAnalyst>,
    planner: Arc<StubPlanner>,
    copy_writer: Arc<StubCopyWriter>,
    renderer: Arc<StubRenderer>,
    locator: Arc<StubLocator>,
    speech: Arc<StubSpeech>,
    transcriber: Arc<StubTranscriber>,
    collectors: Vec<Arc<StubCollector>>,
    orchestrator: Arc<PipelineOrchestrator>,
}

fn harness(options: HarnessOptions) -> Harness {
    let store = InMemoryRunStore::new();
    let vehicles = Arc::new(StubVehicles {
        fail: options.vehicles_fail,
        ..Default::default()
    });
    let analyst = Arc::new(StubAnalyst::default());
    let planner = Arc::new(StubPlanner {
        empty: options.empty_plan,
        ..Default::default()
    });
    let copy_writer = Arc::new(StubCopyWriter::default());
    let renderer = Arc::new(StubRenderer {
        fail_theme: options.fail_image_theme,
        ..Default::default()
    });
    let locator = Arc::new(StubLocator::default());
    let speech = Arc::new(StubSpeech::default());
    let transcriber = Arc::new(StubTranscriber::default());

    let collectors = if options.all_collectors_fail {
        vec![
            StubCollector::failing("rules"),
            StubCollector::failing("lookups"),
            StubCollector::failing("retrieval"),
        ]
    } else {
        vec![
            StubCollector::ok(
                "rules",
                vec![
                    Badge::new("euro6", BadgeCategory::Eco, "emissions-class", 10),
                    Badge::new("ncap-4", BadgeCategory::Safety, "safety-rating", 40),
                ],
            ),
            StubCollector::failing("lookups"),
            StubCollector::ok(
                "retrieval",
                vec![Badge::new("ncap-5", BadgeCategory::Safety, "safety-rating", 50)],
            ),
        ]
    };

    let engine = BadgeCollectionEngine::new(
        collectors
            .iter()
            .map(|c| Arc::clone(c) as Arc<dyn BadgeCollector>)
            .collect(),
    );

    let run_store: Arc<dyn RunStore> = if options.flaky_progress {
        Arc::new(FlakyStore {
            inner: store.clone(),
        })
    } else {
        Arc::new(store.clone())
    };

    let orchestrator = Arc::new(
        PipelineOrchestrator::builder()
            .store(run_store)
            .vehicles(vehicles.clone())
            .analyst(analyst.clone())
            .planner(planner.clone())
            .copy_writer(copy_writer.clone())
            .image_renderer(renderer.clone())
            .hotspot_locator(locator.clone())
            .speech(speech.clone())
            .transcriber(transcriber.clone())
            .badge_engine(engine)
            .build()
            .expect("orchestrator builds"),
    );

    Harness {
        store,
        vehicles,
        analyst,
        planner,
        copy_writer,
        renderer,
        locator,
        speech,
        transcriber,
        collectors,
        orchestrator,
    }
}

async fn run_to_settlement(h: &Harness) -> (Uuid, Run) {
    let run_id = Uuid::new_v4();
    let input = StoryInput::builder()
        .subject_id("vin-1")
        .build()
        .expect("input builds");
    h.orchestrator
        .start(run_id, input)
        .await
        .expect("pipeline task joins");
    let run = h
        .store
        .get(run_id)
        .await
        .expect("store readable")
        .expect("run record exists");
    (run_id, run)
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn all_succeeding_collaborators_reach_complete() {
    let h = harness(HarnessOptions::default());
    let (run_id, run) = run_to_settlement(&h).await;

    assert_eq!(run.status, RunStatus::Complete);
    assert_eq!(run.current_stage, Stage::Complete);

    let doc = run.content.expect("complete run carries a document");
    assert_eq!(doc.id, run_id);
    assert_eq!(doc.title, "Aurora GT, Reimagined");
    assert_eq!(doc.scenes.len(), 4, "one document scene per planned scene");

    // Badge conflict resolved across collectors, ordered by category.
    let badge_ids: Vec<&str> = doc.badges.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(badge_ids, vec!["ncap-5", "euro6"]);
    assert_eq!(doc.meta.badge_count, 2);

    for scene in &doc.scenes {
        assert!(scene.image_url.starts_with("https://img.example/"));
        assert_eq!(scene.audio_url.as_deref(), Some("https://audio.example/clip.mp3"));
        assert!(scene.content_variant.is_some());
        // Narration splits on the long silence in the stub transcript.
        assert_eq!(scene.subtitles.len(), 2);
        assert_eq!(scene.subtitles[0].text, "The car,");
        assert_eq!(scene.subtitles[1].text, "is fast.");
    }

    assert_eq!(h.planner.calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.copy_writer.calls.load(Ordering::SeqCst), 4);
    assert_eq!(h.renderer.calls.load(Ordering::SeqCst), 4);
    assert_eq!(h.speech.calls.load(Ordering::SeqCst), 4);
    assert_eq!(h.transcriber.calls.load(Ordering::SeqCst), 4);
    // Only the tech scene has hotspots to locate.
    assert_eq!(h.locator.calls.load(Ordering::SeqCst), 1);

    assert!(run.log.iter().any(|l| l.contains("stage=ingestion")));
    assert!(run.log.iter().any(|l| l.contains("stage=qa_assembly")));
}

#[tokio::test]
async fn vision_scan_fills_hotspot_coordinates() {
    let h = harness(HarnessOptions::default());
    let (_, run) = run_to_settlement(&h).await;

    let doc = run.content.expect("document");
    let tech = doc
        .scenes
        .iter()
        .find(|s| s.scene_type == SceneType::Tech)
        .expect("tech scene planned");
    assert_eq!(tech.hotspots.len(), 2);
    for hotspot in &tech.hotspots {
        assert_eq!(hotspot.x, 42.0);
        assert_eq!(hotspot.y, 58.0);
    }
}

#[tokio::test]
async fn fatal_ingestion_stops_all_later_stages() {
    let h = harness(HarnessOptions {
        vehicles_fail: true,
        ..Default::default()
    });
    let (_, run) = run_to_settlement(&h).await;

    assert_eq!(run.status, RunStatus::Failed);
    assert_eq!(run.current_stage, Stage::Error);
    assert!(run.content.is_none());
    assert!(run.log.iter().any(|l| l.contains("missing")));

    assert_eq!(h.vehicles.calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.analyst.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.planner.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.copy_writer.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.renderer.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.speech.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.transcriber.calls.load(Ordering::SeqCst), 0);
    for collector in &h.collectors {
        assert_eq!(collector.calls.load(Ordering::SeqCst), 0);
    }
}

#[tokio::test]
async fn single_scene_image_failure_degrades_to_placeholder() {
    let h = harness(HarnessOptions {
        fail_image_theme: Some("scene-1"),
        ..Default::default()
    });
    let (_, run) = run_to_settlement(&h).await;

    assert_eq!(run.status, RunStatus::Complete);
    let doc = run.content.expect("document");
    assert_eq!(doc.scenes.len(), 4);

    for scene in &doc.scenes {
        if scene.theme_tag == "scene-1" {
            assert_eq!(scene.image_url, PLACEHOLDER_IMAGE_URL);
        } else {
            assert!(scene.image_url.starts_with("https://img.example/"));
        }
    }
    assert!(run
        .log
        .iter()
        .any(|l| l.contains("stage=image_synthesis") && l.contains("degraded")));
}

#[tokio::test]
async fn progress_write_failures_do_not_prevent_completion() {
    let h = harness(HarnessOptions {
        flaky_progress: true,
        ..Default::default()
    });
    let (_, run) = run_to_settlement(&h).await;

    assert_eq!(run.status, RunStatus::Complete);
    let doc = run.content.expect("document");
    assert_eq!(doc.scenes.len(), 4);
}

#[tokio::test]
async fn all_collectors_failing_yields_badgeless_story() {
    let h = harness(HarnessOptions {
        all_collectors_fail: true,
        ..Default::default()
    });
    let (_, run) = run_to_settlement(&h).await;

    assert_eq!(run.status, RunStatus::Complete);
    let doc = run.content.expect("document");
    assert!(doc.badges.is_empty());
    assert_eq!(doc.meta.badge_count, 0);
}

#[tokio::test]
async fn empty_plan_is_a_fatal_stage_error() {
    let h = harness(HarnessOptions {
        empty_plan: true,
        ..Default::default()
    });
    let (_, run) = run_to_settlement(&h).await;

    assert_eq!(run.status, RunStatus::Failed);
    assert!(run.log.iter().any(|l| l.contains("empty")));
    assert_eq!(h.copy_writer.calls.load(Ordering::SeqCst), 0);
}
