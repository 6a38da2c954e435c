use std::io::Write;

use crate::Result;
use crate::transcript::TranscriptionResult;

/// Write the whole transcription result as a pretty-printed JSON document.
///
/// Output is UTF-8 with two-space indentation. Non-ASCII text is written as-is rather than
/// `\u`-escaped, and every field (word timings and unrecognized engine fields included) is kept,
/// so this is the one format that can be read back into a `TranscriptionResult` without loss.
///
/// Example output:
/// ```json
/// {
///   "text": " hello world",
///   "segments": [
///     {
///       "start": 0.0,
///       "end": 1.2,
///       "text": " hello world"
///     }
///   ]
/// }
/// ```
pub fn write_json<W: Write>(mut w: W, result: &TranscriptionResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut w, result)?;
    w.flush()?;
    Ok(())
}
