use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::output_type::OutputFormat;

/// Options handed to a transcription backend.
///
/// This struct represents *library-level configuration*, not CLI flags directly.
/// The CLI is responsible for mapping user input into this type so that:
/// - the library remains reusable outside of a CLI context
/// - other frontends (APIs, tests, batch jobs) can construct options programmatically
///
/// Backends receive these verbatim. None of them affect how results are written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// Language hint (e.g. `"en"`, `"es"`). `None` lets the engine auto-detect.
    pub language: Option<String>,

    /// Sampling temperature.
    pub temperature: f32,

    /// Number of beams for beam search.
    pub beam_size: u32,

    /// Number of candidates when sampling with non-zero temperature.
    pub best_of: u32,

    /// Text used to prime decoding of the first window.
    pub initial_prompt: Option<String>,

    /// Whether previous output is fed back as a prompt for the next window.
    pub condition_on_previous_text: bool,

    /// Whether the engine should produce per-word timestamps.
    pub word_timestamps: bool,

    /// Beam search patience.
    pub patience: f32,

    /// Optional length penalty for ranking beams.
    pub length_penalty: Option<f32>,

    /// Segments with a no-speech probability above this are treated as silence.
    pub no_speech_threshold: f32,

    /// Average log-probability below which decoding is considered failed.
    pub logprob_threshold: f32,

    /// Gzip compression ratio above which decoding is considered failed.
    pub compression_ratio_threshold: f32,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            language: Some("en".to_owned()),
            temperature: 0.0,
            beam_size: 5,
            best_of: 5,
            initial_prompt: None,
            condition_on_previous_text: false,
            word_timestamps: false,
            patience: 1.0,
            length_penalty: None,
            no_speech_threshold: 0.6,
            logprob_threshold: -1.0,
            compression_ratio_threshold: 2.4,
        }
    }
}

/// Where and how to write one transcription result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRequest {
    /// Output path without extension. Each format appends `.{ext}`.
    pub base_path: PathBuf,

    /// Formats to write. An empty set writes nothing.
    pub formats: BTreeSet<OutputFormat>,

    /// Whether SRT cues get an extra line with the segment's words.
    pub include_word_line: bool,
}

impl OutputRequest {
    pub fn new(base_path: impl Into<PathBuf>, formats: BTreeSet<OutputFormat>) -> Self {
        Self {
            base_path: base_path.into(),
            formats,
            include_word_line: false,
        }
    }

    pub fn with_word_line(mut self, include_word_line: bool) -> Self {
        self.include_word_line = include_word_line;
        self
    }

    /// `{base_path}.{ext}` for the given format.
    ///
    /// The extension is appended rather than substituted so base names containing dots
    /// (`talk.v2`) keep their full stem.
    pub fn path_for(&self, format: OutputFormat) -> PathBuf {
        let mut path = self.base_path.clone().into_os_string();
        path.push(".");
        path.push(format.extension());
        PathBuf::from(path)
    }
}

/// Output settings shared by every input of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutput {
    /// Directory receiving `{input stem}.{ext}` files.
    pub output_dir: PathBuf,

    pub formats: BTreeSet<OutputFormat>,

    pub include_word_line: bool,
}

impl BatchOutput {
    /// Build the per-input request: `{output_dir}/{input file stem}`.
    pub fn request_for(&self, input: &Path) -> OutputRequest {
        let stem = input.file_stem().unwrap_or(input.as_os_str());
        OutputRequest {
            base_path: self.output_dir.join(stem),
            formats: self.formats.clone(),
            include_word_line: self.include_word_line,
        }
    }
}
