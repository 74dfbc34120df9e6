//! QA sanitation and final document assembly.

use chrono::Utc;
use showreel_core::{
    DocumentMeta, SceneDocument, StoryDocument, StoryDraft, PLACEHOLDER_IMAGE_URL, SCHEMA_VERSION,
};
use uuid::Uuid;

/// Assemble the QA-sanitized final document from a finished draft.
///
/// Every missing field defaults to a safe placeholder: a scene that never
/// got an image ships the placeholder URL, missing audio stays `null`, and
/// missing copy stays `null`. Scene order follows the plan.
pub fn assemble_document(run_id: Uuid, draft: StoryDraft) -> StoryDocument {
    let badge_count = draft.badges.len();

    let mut scenes: Vec<SceneDocument> = draft
        .scenes
        .into_iter()
        .map(|scene| SceneDocument {
            id: scene.id,
            scene_type: scene.scene_type,
            theme_tag: scene.theme_tag,
            order: scene.order,
            visual_direction: scene.visual_direction,
            content_variant: scene.content,
            image_url: scene
                .image_url
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            audio_url: scene.audio_url,
            subtitles: scene.subtitles,
            hotspots: scene.hotspots,
        })
        .collect();
    scenes.sort_by_key(|scene| scene.order);

    StoryDocument {
        id: run_id,
        title: draft.title,
        narrative_summary: draft.narrative_summary,
        meta: DocumentMeta {
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            badge_count,
        },
        badges: draft.badges,
        scenes,
        subject_data: draft.subject_data,
    }
}
