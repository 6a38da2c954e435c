use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The supported output formats for a rendered transcription.
///
/// Why this exists:
/// - We want a single, strongly-typed representation of output formats
///   across the CLI and library code.
/// - Using an enum avoids stringly-typed conditionals and keeps format
///   selection explicit and discoverable.
///
/// Variants are ordered, so a `BTreeSet<OutputFormat>` always iterates
/// txt, srt, vtt, json.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputFormat {
    /// Plain text: the trimmed full transcript.
    Txt,

    /// SubRip subtitles with numbered cues.
    Srt,

    /// WebVTT captions.
    Vtt,

    /// The full structured result as pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [Self::Txt, Self::Srt, Self::Vtt, Self::Json];

    /// File extension (without the dot) used for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Json => "json",
        }
    }

    /// Parse a comma-separated tag list such as `"txt,srt"`.
    ///
    /// Tags are matched case-insensitively after trimming. Empty entries and tags that don't
    /// name a supported format are skipped rather than reported, so `"srt,xml"` yields just
    /// `{Srt}`.
    pub fn parse_list(list: &str) -> BTreeSet<OutputFormat> {
        list.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .filter_map(|tag| match tag.parse() {
                Ok(format) => Some(format),
                Err(_) => {
                    tracing::debug!(tag, "ignoring unsupported output format");
                    None
                }
            })
            .collect()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(tag))
            .ok_or_else(|| Error::UnknownFormat(tag.to_owned()))
    }
}
