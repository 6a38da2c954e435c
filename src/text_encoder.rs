use std::io::Write;

use crate::Result;
use crate::transcript::TranscriptionResult;

/// Write the full transcript as plain text.
///
/// Only `result.text` is used: it is trimmed and terminated by exactly one newline.
pub fn write_text<W: Write>(mut w: W, result: &TranscriptionResult) -> Result<()> {
    writeln!(w, "{}", result.text.trim())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Segment;

    #[test]
    fn text_is_trimmed_with_single_trailing_newline() -> anyhow::Result<()> {
        let result = TranscriptionResult {
            text: "  Hello there.\n\n".to_owned(),
            segments: vec![Segment::new(0.0, 1.0, "ignored")],
            ..TranscriptionResult::default()
        };

        let mut out = Vec::new();
        write_text(&mut out, &result)?;
        assert_eq!(std::str::from_utf8(&out)?, "Hello there.\n");
        Ok(())
    }

    #[test]
    fn empty_text_is_a_lone_newline() -> anyhow::Result<()> {
        let mut out = Vec::new();
        write_text(&mut out, &TranscriptionResult::default())?;
        assert_eq!(out, b"\n");
        Ok(())
    }
}
