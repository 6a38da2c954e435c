//! Writing a transcription result to disk, one file per requested format.
//!
//! Each format is rendered into memory, written to a temporary file next to the target and then
//! renamed over it, so a file on disk is always either its previous content or the complete new
//! rendering from one call. Nothing here holds shared state: concurrent calls with distinct base
//! paths are independent, and calls sharing a base path simply race (last rename wins).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::json_encoder::write_json;
use crate::opts::OutputRequest;
use crate::output_type::OutputFormat;
use crate::segment_encoder::SegmentEncoder;
use crate::srt_encoder::SrtEncoder;
use crate::text_encoder::write_text;
use crate::transcript::TranscriptionResult;
use crate::vtt_encoder::VttEncoder;
use crate::{Error, Result};

/// Write `result` as `{base_path}.{ext}` for every format in the request.
///
/// The parent directory of `base_path` (and its ancestors) is created first; if that fails,
/// nothing is written. Existing files are replaced entirely. Returns the written paths in
/// format order (txt, srt, vtt, json).
///
/// If any write fails the call returns an error and callers should treat the whole set of
/// outputs for this request as unusable.
pub fn write_outputs(
    request: &OutputRequest,
    result: &TranscriptionResult,
) -> Result<Vec<PathBuf>> {
    if let Some(dir) = request.base_path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    let mut written = Vec::with_capacity(request.formats.len());
    for &format in &request.formats {
        let path = request.path_for(format);
        let bytes = render(format, result, request.include_word_line)?;

        replace_file(&path, &bytes).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), %format, "wrote output");
        written.push(path);
    }

    Ok(written)
}

/// Render `result` in a single format.
///
/// `include_word_line` only affects SRT.
pub fn render(
    format: OutputFormat,
    result: &TranscriptionResult,
    include_word_line: bool,
) -> Result<Vec<u8>> {
    let mut out = Vec::new();

    match format {
        OutputFormat::Txt => write_text(&mut out, result)?,
        OutputFormat::Srt => {
            let mut encoder = SrtEncoder::new(&mut out).with_word_line(include_word_line);
            encode_segments(&mut encoder, result)?;
        }
        OutputFormat::Vtt => {
            let mut encoder = VttEncoder::new(&mut out);
            encode_segments(&mut encoder, result)?;
        }
        OutputFormat::Json => write_json(&mut out, result)?,
    }

    Ok(out)
}

fn encode_segments<E: SegmentEncoder>(
    encoder: &mut E,
    result: &TranscriptionResult,
) -> Result<()> {
    encoder.write_all_segments(&result.segments)?;
    encoder.close()
}

/// Write `bytes` to a temporary file in the target's directory and rename it into place.
fn replace_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::{Segment, Word};

    fn sample() -> TranscriptionResult {
        TranscriptionResult {
            text: " Hello world. How are you?".to_owned(),
            segments: vec![
                Segment::new(0.0, 1.5, " Hello world.").with_words(vec![
                    Word::timed(" Hello", 0.0, 0.6),
                    Word::timed(" world.", 0.7, 1.5),
                ]),
                Segment::new(1.5, 3.25, " How are you?"),
            ],
            ..TranscriptionResult::default()
        }
    }

    #[test]
    fn render_srt_honors_word_line_flag() -> anyhow::Result<()> {
        let with = String::from_utf8(render(OutputFormat::Srt, &sample(), true)?)?;
        let without = String::from_utf8(render(OutputFormat::Srt, &sample(), false)?)?;

        assert!(with.starts_with(
            "1\n00:00:00,000 --> 00:00:01,500\nHello world.\nHello  world.\n\n"
        ));
        assert!(without.starts_with("1\n00:00:00,000 --> 00:00:01,500\nHello world.\n\n2\n"));
        Ok(())
    }

    #[test]
    fn render_vtt_ignores_word_line_flag() -> anyhow::Result<()> {
        let a = render(OutputFormat::Vtt, &sample(), true)?;
        let b = render(OutputFormat::Vtt, &sample(), false)?;
        assert_eq!(a, b);
        assert_eq!(
            std::str::from_utf8(&a)?,
            "WEBVTT\n\n\
             00:00:00.000 --> 00:00:01.500\nHello world.\n\n\
             00:00:01.500 --> 00:00:03.250\nHow are you?\n\n"
        );
        Ok(())
    }

    #[test]
    fn render_txt_uses_full_text_only() -> anyhow::Result<()> {
        let out = render(OutputFormat::Txt, &sample(), true)?;
        assert_eq!(std::str::from_utf8(&out)?, "Hello world. How are you?\n");
        Ok(())
    }

    fn names_in(dir: &Path) -> anyhow::Result<Vec<String>> {
        let mut names = fs::read_dir(dir)?
            .map(|entry| -> anyhow::Result<String> {
                Ok(entry?.file_name().to_string_lossy().into_owned())
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    #[test]
    fn writes_leave_no_temporary_files_behind() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let req = OutputRequest::new(
            dir.path().join("talk"),
            OutputFormat::parse_list("txt,srt,vtt,json"),
        );

        write_outputs(&req, &sample())?;
        write_outputs(&req, &sample())?;

        assert_eq!(
            names_in(dir.path())?,
            vec!["talk.json", "talk.srt", "talk.txt", "talk.vtt"]
        );
        Ok(())
    }

    #[test]
    fn failed_replace_keeps_the_target_and_cleans_up() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        // A directory where the output file should go cannot be renamed over.
        fs::create_dir(dir.path().join("talk.txt"))?;

        let req = OutputRequest::new(dir.path().join("talk"), OutputFormat::parse_list("txt"));
        let err = write_outputs(&req, &sample()).unwrap_err();

        assert!(matches!(err, Error::Write { ref path, .. } if path.ends_with("talk.txt")));
        assert!(dir.path().join("talk.txt").is_dir());
        assert_eq!(names_in(dir.path())?, vec!["talk.txt"]);
        Ok(())
    }
}
