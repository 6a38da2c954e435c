//! `quill` — render speech-to-text transcription results into subtitle and document files.
//!
//! This crate provides:
//! - Typed transcription results (full text, segments, optional per-word timings)
//! - Cue timestamp rendering for SubRip and WebVTT
//! - Output encoders for plain text, SRT, WebVTT and JSON
//! - A writer that puts one file per requested format on disk
//! - A pluggable backend seam and a batch driver for running many inputs
//!
//! Transcription itself is not done here: a [`Backend`] hands us a finished
//! [`TranscriptionResult`] and we render it faithfully.

mod error;

// High-level API (most consumers should start here).
pub mod opts;
pub mod quill;

// Result data structures.
pub mod transcript;

// Transcription backends.
pub mod backend;
pub mod backends;

// Output selection and encoder interfaces.
pub mod output_type;
pub mod segment_encoder;
pub mod timestamp;

// Output encoders that serialize results into various formats.
pub mod json_encoder;
pub mod srt_encoder;
pub mod text_encoder;
pub mod vtt_encoder;

// Writing rendered outputs to disk.
pub mod writer;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

pub use backend::Backend;
pub use backends::json_import::JsonImportBackend;
pub use error::{Error, Result};
pub use opts::{BatchOutput, Opts, OutputRequest};
pub use output_type::OutputFormat;
pub use quill::{BatchReport, Quill};
pub use transcript::{Segment, TranscriptionResult, Word};
pub use writer::{render, write_outputs};

#[cfg(feature = "logging")]
pub use logging::init as init_logging;
