//! Subtitle segmentation: word timestamps to display-ready caption cues.

use showreel_core::{SubtitleCue, WordTimestamp};

/// Default cue text length budget in characters.
const DEFAULT_MAX_CHARS: usize = 84;
/// Default maximum seconds a cue may remain on screen.
const DEFAULT_MAX_DURATION: f64 = 7.0;
/// Default silence gap that forces a break, in seconds.
const DEFAULT_MIN_SILENCE: f64 = 0.3;
/// Default "substantial line" length gating the soft comma split.
const DEFAULT_SOFT_COMMA_MIN_CHARS: usize = 40;

/// Configuration constants for [`segment`].
///
/// # Examples
///
/// ```
/// use showreel_pipeline::SegmenterConfig;
///
/// let config = SegmenterConfig::builder()
///     .max_chars(42usize)
///     .build()
///     .unwrap();
/// assert_eq!(config.max_chars, 42);
/// ```
#[derive(Debug, Clone, PartialEq, derive_builder::Builder)]
pub struct SegmenterConfig {
    /// Cue text length budget
    #[builder(default = "DEFAULT_MAX_CHARS")]
    pub max_chars: usize,
    /// Maximum seconds a cue may remain on screen
    #[builder(default = "DEFAULT_MAX_DURATION")]
    pub max_duration: f64,
    /// Silence between words that forces a break, in seconds
    #[builder(default = "DEFAULT_MIN_SILENCE")]
    pub min_silence: f64,
    /// Minimum accumulated text length before a trailing comma splits
    #[builder(default = "DEFAULT_SOFT_COMMA_MIN_CHARS")]
    pub soft_comma_min_chars: usize,
}

impl SegmenterConfig {
    /// Start building a config; unset fields keep their defaults.
    pub fn builder() -> SegmenterConfigBuilder {
        SegmenterConfigBuilder::default()
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            max_duration: DEFAULT_MAX_DURATION,
            min_silence: DEFAULT_MIN_SILENCE,
            soft_comma_min_chars: DEFAULT_SOFT_COMMA_MIN_CHARS,
        }
    }
}

/// Segment a flat stream of word timestamps into ordered subtitle cues.
///
/// Pure and synchronous; empty input yields an empty cue list. A cue is
/// closed as soon as any one of these holds for the next word (the
/// conditions are OR'd, not prioritized):
///
/// - the silence gap since the previous word exceeds `min_silence`
/// - appending the word (plus a separating space) would exceed `max_chars`
/// - the cue would stay on screen longer than `max_duration`
/// - the previous word ends a sentence (`.`, `?`, `!`)
/// - the previous word ends in a comma and the cue text is already past
///   `soft_comma_min_chars`
///
/// Limits gate appends only: a single word that alone exceeds `max_chars`
/// or `max_duration` still becomes its own cue.
pub fn segment(words: &[WordTimestamp], config: &SegmenterConfig) -> Vec<SubtitleCue> {
    let mut cues = Vec::new();
    let mut iter = words.iter();
    let Some(first) = iter.next() else {
        return cues;
    };

    let mut text = first.text.trim().to_string();
    let mut start = first.start;
    let mut end = first.end;
    let mut prev = first;

    for word in iter {
        let gap = word.start - prev.end;
        let appended_len = text.len() + 1 + word.text.trim().len();

        let silence = gap > config.min_silence;
        let length = appended_len > config.max_chars;
        let duration = word.end - start > config.max_duration;
        let sentence_end = prev.text.ends_with(['.', '?', '!']);
        let soft_comma = prev.text.ends_with(',') && text.len() > config.soft_comma_min_chars;

        if silence || length || duration || sentence_end || soft_comma {
            cues.push(SubtitleCue::new(text.trim(), start, end));
            text = word.text.trim().to_string();
            start = word.start;
        } else {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(word.text.trim());
        }
        end = word.end;
        prev = word;
    }

    if !text.trim().is_empty() {
        cues.push(SubtitleCue::new(text.trim(), start, end));
    }

    cues
}
