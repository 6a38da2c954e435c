use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::backend::Backend;
use crate::opts::Opts;
use crate::transcript::TranscriptionResult;
use crate::{Error, Result};

/// Backend that loads a result the engine already wrote to disk as JSON.
///
/// This is how precomputed transcriptions (for example the engine's own `--output_format json`
/// files, or Quill's `.json` output) are converted into the other formats. No inference happens
/// here, so the decoding options in [`Opts`] have no effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonImportBackend;

impl JsonImportBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for JsonImportBackend {
    fn transcribe(&self, path: &Path, _opts: &Opts) -> Result<TranscriptionResult> {
        let file = File::open(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let result: TranscriptionResult = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| Error::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            path = %path.display(),
            segments = result.segments.len(),
            "loaded transcription result"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_engine_json() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("talk.json");
        let raw = r#"{
            "text": " Hi.",
            "segments": [{"id": 0, "start": 0, "end": 1.25, "text": " Hi."}],
            "language": "en"
        }"#;
        std::fs::write(&path, raw)?;

        let result = JsonImportBackend::new().transcribe(&path, &Opts::default())?;
        assert_eq!(result.text, " Hi.");
        assert_eq!(result.segments[0].start, 0.0);
        assert_eq!(result.segments[0].end, 1.25);
        Ok(())
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = JsonImportBackend::new()
            .transcribe(Path::new("does/not/exist.json"), &Opts::default())
            .unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn invalid_json_is_a_decode_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json")?;

        let err = JsonImportBackend::new()
            .transcribe(&path, &Opts::default())
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.to_string().contains("broken.json"));
        Ok(())
    }
}
