use std::io::Write;

use crate::Result;
use crate::segment_encoder::SegmentEncoder;
use crate::timestamp::srt_timestamp;
use crate::transcript::Segment;

/// A `SegmentEncoder` that writes segments as SubRip (`.srt`) cues.
///
/// Cues are numbered from 1 in the order segments arrive. When the word line is enabled,
/// segments carrying word data get an extra text line with the space-joined words.
pub struct SrtEncoder<W: Write> {
    w: W,

    /// Index of the next cue (1-based).
    next_index: usize,

    /// Whether to append the word line to cues that have word data.
    include_word_line: bool,

    closed: bool,
}

impl<W: Write> SrtEncoder<W> {
    pub fn new(w: W) -> Self {
        Self {
            w,
            next_index: 1,
            include_word_line: false,
            closed: false,
        }
    }

    /// Enable or disable the per-cue word line.
    pub fn with_word_line(mut self, include_word_line: bool) -> Self {
        self.include_word_line = include_word_line;
        self
    }
}

impl<W: Write> SegmentEncoder for SrtEncoder<W> {
    fn write_segment(&mut self, seg: &Segment) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write segment: encoder is already closed",
            ));
        }

        let start = srt_timestamp(seg.start);
        let end = srt_timestamp(seg.end);

        writeln!(&mut self.w, "{}", self.next_index)?;
        writeln!(&mut self.w, "{start} --> {end}")?;
        writeln!(&mut self.w, "{}", seg.text.trim())?;

        if self.include_word_line {
            if let Some(line) = seg.word_line() {
                writeln!(&mut self.w, "{line}")?;
            }
        }

        // Blank line separates cues.
        writeln!(&mut self.w)?;

        self.next_index += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.w.flush()?;
        self.closed = true;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Word;

    fn seg(start: f64, end: f64, text: &str) -> Segment {
        Segment::new(start, end, text)
    }

    fn encode(segments: &[Segment], include_word_line: bool) -> anyhow::Result<String> {
        let mut out = Vec::new();
        let mut enc = SrtEncoder::new(&mut out).with_word_line(include_word_line);
        enc.write_all_segments(segments)?;
        enc.close()?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn srt_numbers_cues_from_one() -> anyhow::Result<()> {
        let s = encode(
            &[seg(0.0, 2.5, " Hello world. "), seg(3661.5, 3662.0, " Bye.")],
            false,
        )?;
        assert_eq!(
            s,
            "1\n00:00:00,000 --> 00:00:02,500\nHello world.\n\n\
             2\n01:01:01,500 --> 01:01:02,000\nBye.\n\n"
        );
        Ok(())
    }

    #[test]
    fn srt_without_segments_is_empty() -> anyhow::Result<()> {
        assert_eq!(encode(&[], true)?, "");
        Ok(())
    }

    #[test]
    fn srt_word_line_follows_segment_text() -> anyhow::Result<()> {
        let with_words =
            seg(0.0, 1.0, " hi there").with_words(vec![Word::new("hi"), Word::new("there")]);
        let s = encode(&[with_words], true)?;
        assert_eq!(s, "1\n00:00:00,000 --> 00:00:01,000\nhi there\nhi there\n\n");
        Ok(())
    }

    #[test]
    fn srt_word_line_absent_when_disabled() -> anyhow::Result<()> {
        let with_words =
            seg(0.0, 1.0, " Hi, there!").with_words(vec![Word::new("hi"), Word::new("there")]);
        let s = encode(&[with_words], false)?;
        assert_eq!(s, "1\n00:00:00,000 --> 00:00:01,000\nHi, there!\n\n");
        Ok(())
    }

    #[test]
    fn srt_word_line_absent_without_word_data() -> anyhow::Result<()> {
        let s = encode(&[seg(0.0, 1.0, "plain")], true)?;
        assert_eq!(s, "1\n00:00:00,000 --> 00:00:01,000\nplain\n\n");
        Ok(())
    }

    #[test]
    fn srt_whitespace_only_words_still_write_the_word_line() -> anyhow::Result<()> {
        let blank_words = seg(0.0, 1.0, "x").with_words(vec![Word::new(" ")]);
        let s = encode(&[blank_words], true)?;
        assert_eq!(s, "1\n00:00:00,000 --> 00:00:01,000\nx\n\n\n");
        Ok(())
    }

    #[test]
    fn srt_renders_negative_durations_as_given() -> anyhow::Result<()> {
        let s = encode(&[seg(5.0, 4.0, "backwards")], false)?;
        assert_eq!(s, "1\n00:00:05,000 --> 00:00:04,000\nbackwards\n\n");
        Ok(())
    }

    #[test]
    fn srt_write_after_close_errors() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let mut enc = SrtEncoder::new(&mut out);
        enc.close()?;
        let err = enc.write_segment(&seg(0.0, 1.0, "nope")).unwrap_err();
        assert!(err.to_string().contains("already closed"));
        Ok(())
    }
}
