use std::path::Path;

use crate::Result;
use crate::opts::Opts;
use crate::transcript::TranscriptionResult;

/// Pluggable transcription backend used by [`crate::Quill`].
///
/// A backend turns one input file into a [`TranscriptionResult`]. How it gets there (running a
/// model, calling a service, loading a precomputed result) is its own business; Quill only writes
/// what comes back.
///
/// Implementations should return an error rather than a partial result when transcription fails.
/// In a batch run the error aborts that input only.
pub trait Backend {
    fn transcribe(&self, path: &Path, opts: &Opts) -> Result<TranscriptionResult>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn transcribe(&self, path: &Path, opts: &Opts) -> Result<TranscriptionResult> {
        (**self).transcribe(path, opts)
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn transcribe(&self, path: &Path, opts: &Opts) -> Result<TranscriptionResult> {
        (**self).transcribe(path, opts)
    }
}
