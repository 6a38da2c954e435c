//! Typed transcription results as produced by a speech-to-text engine.
//!
//! Field names follow the engine's JSON layout (`text`, `segments`, `words[].word`), so a result
//! written by the engine can be read back with `serde_json` and re-emitted without loss.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A complete transcription of one input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    /// The full transcript text.
    pub text: String,

    /// Time-bounded segments in the order the engine produced them.
    #[serde(default)]
    pub segments: Vec<Segment>,

    /// Language the engine transcribed in, when it reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Engine fields we don't model explicitly. Preserved verbatim in JSON output.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A contiguous span of transcribed speech.
///
/// `end >= start` is expected but never checked; encoders render whatever they're given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Segment text, usually with the engine's leading space still attached.
    pub text: String,

    /// Per-word breakdown, present only when the engine ran with word timestamps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<Word>>,

    /// Engine fields such as `id`, `seek`, `tokens` or `avg_logprob`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single word inside a segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Raw word text, including any leading whitespace the engine emitted.
    #[serde(rename = "word")]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,

    /// Engine confidence for this word.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Segment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            ..Self::default()
        }
    }

    /// Attach a per-word breakdown to this segment.
    pub fn with_words(mut self, words: Vec<Word>) -> Self {
        self.words = Some(words);
        self
    }

    /// The space-joined raw text of every word, trimmed.
    ///
    /// Returns `None` when the segment has no word data or the joined text is empty. Emptiness
    /// is checked before trimming, so all-whitespace words still yield an (empty) line.
    pub fn word_line(&self) -> Option<String> {
        let words = self.words.as_ref()?;
        let joined = words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            return None;
        }
        Some(joined.trim().to_owned())
    }
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn timed(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }
}
