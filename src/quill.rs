//! High-level API for turning input files into transcript files with Quill.
//!
//! We expose a single entry point (`Quill`) that wraps a transcription backend and the
//! result writer.
//!
//! The intent is:
//! - The backend is constructed once (it may own an expensive model).
//! - We reuse it to transcribe many inputs.
//! - Each input's result is written to `{output_dir}/{stem}.{ext}` for every requested format.
//! - One bad input never stops the rest of a batch.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::backend::Backend;
use crate::backends::json_import::JsonImportBackend;
use crate::opts::{BatchOutput, Opts};
use crate::writer::write_outputs;
use crate::{Error, Result};

/// The main high-level entry point.
///
/// Typical usage:
/// - Construct once with a backend.
/// - Call `transcribe_to_files` or `run_batch` as often as needed.
pub struct Quill<B: Backend = JsonImportBackend> {
    backend: B,
}

/// What happened to each input of a batch run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BatchReport {
    /// Every output file written, across all inputs.
    pub written: Vec<PathBuf>,

    /// Inputs skipped because they don't exist (or aren't regular files).
    pub skipped: Vec<PathBuf>,

    /// Inputs whose transcription or output failed, with the error message.
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    /// Whether every input that existed was processed successfully.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Quill<JsonImportBackend> {
    /// Create a `Quill` that converts previously written JSON results.
    pub fn json_import() -> Self {
        Self::with_backend(JsonImportBackend::new())
    }
}

impl<B: Backend> Quill<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Transcribe a single input and write it to `{output.output_dir}/{stem}.{ext}`.
    ///
    /// Returns the paths written.
    pub fn transcribe_to_files(
        &self,
        input: &Path,
        opts: &Opts,
        output: &BatchOutput,
    ) -> Result<Vec<PathBuf>> {
        let result = self.backend.transcribe(input, opts)?;
        let request = output.request_for(input);
        write_outputs(&request, &result)
    }

    /// Transcribe every input in order.
    ///
    /// The output directory is created first; failing to create it fails the whole run.
    /// After that, inputs that aren't existing files are skipped with a warning, and errors
    /// for one input are logged and recorded while the remaining inputs continue.
    pub fn run_batch<P: AsRef<Path>>(
        &self,
        inputs: &[P],
        opts: &Opts,
        output: &BatchOutput,
    ) -> Result<BatchReport> {
        fs::create_dir_all(&output.output_dir).map_err(|source| Error::CreateDir {
            path: output.output_dir.clone(),
            source,
        })?;

        let extensions = output
            .formats
            .iter()
            .map(|format| format.extension())
            .collect::<Vec<_>>()
            .join(",");

        let mut report = BatchReport::default();
        for input in inputs {
            let input = input.as_ref();
            if !input.is_file() {
                warn!(path = %input.display(), "skipping (not found)");
                report.skipped.push(input.to_path_buf());
                continue;
            }

            info!(path = %input.display(), "transcribing");
            match self.transcribe_to_files(input, opts, output) {
                Ok(paths) => {
                    let base = output.request_for(input).base_path;
                    info!("saved to: {}.{{{extensions}}}", base.display());
                    report.written.extend(paths);
                }
                Err(err) => {
                    error!(path = %input.display(), error = %err, "transcription failed");
                    report.failed.push((input.to_path_buf(), format!("{err:#}")));
                }
            }
        }

        Ok(report)
    }

    /// Access the configured backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Access the configured backend mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
