use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;

use quill::{BatchOutput, Opts, OutputFormat, Quill};

fn main() -> Result<()> {
    quill::init_logging();
    let params = get_params()?;

    let opts = params.opts();
    let output = params.batch_output();
    if output.formats.is_empty() {
        tracing::warn!(formats = %params.formats, "no supported output formats requested");
    }

    info!(model = %params.model, "using precomputed transcription results");
    let quill = Quill::json_import();
    let report = quill.run_batch(&params.inputs, &opts, &output)?;

    if !report.is_success() {
        bail!(
            "{} of {} input(s) failed",
            report.failed.len(),
            params.inputs.len()
        );
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "Write transcription results as txt, srt, vtt and json files")]
struct Params {
    /// Input file(s). Paths that don't exist are skipped with a warning.
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Model name (tiny/base/small/medium/large-v3).
    #[arg(long = "model", default_value = "large-v3")]
    pub model: String,

    /// Language hint, e.g. en, es, fr.
    #[arg(long = "language", default_value = "en")]
    pub language: String,

    /// Sampling temperature.
    #[arg(long = "temperature", default_value_t = 0.0)]
    pub temperature: f32,

    /// Beam size.
    #[arg(long = "beam-size", alias = "beam_size", default_value_t = 5)]
    pub beam_size: u32,

    /// Candidates when sampling.
    #[arg(long = "best-of", alias = "best_of", default_value_t = 5)]
    pub best_of: u32,

    /// Initial prompt to prime decoding.
    #[arg(long = "initial-prompt", alias = "initial_prompt", default_value = "")]
    pub initial_prompt: String,

    /// true/false (also accepts 1/yes/y).
    #[arg(
        long = "condition-on-previous-text",
        alias = "condition_on_previous_text",
        default_value = "false"
    )]
    pub condition_on_previous_text: String,

    /// Per-word timestamps. Also adds a word line to SRT cues.
    #[arg(long = "word-timestamps", alias = "word_timestamps", default_value_t = false)]
    pub word_timestamps: bool,

    /// Output directory.
    #[arg(long = "output-dir", alias = "output_dir", default_value = "transcripts")]
    pub output_dir: PathBuf,

    /// Comma-separated formats: txt,srt,vtt,json. Unknown formats are ignored.
    #[arg(long = "formats", default_value = "txt,srt")]
    pub formats: String,

    #[arg(long = "no-speech-threshold", alias = "no_speech_threshold", default_value_t = 0.6)]
    pub no_speech_threshold: f32,

    /// Use -1.0 for no cutoff.
    #[arg(
        long = "logprob-threshold",
        alias = "logprob_threshold",
        default_value_t = -1.0,
        allow_negative_numbers = true
    )]
    pub logprob_threshold: f32,

    #[arg(
        long = "compression-ratio-threshold",
        alias = "compression_ratio_threshold",
        default_value_t = 2.4
    )]
    pub compression_ratio_threshold: f32,

    /// Beam search patience.
    #[arg(long = "patience", default_value_t = 1.0)]
    pub patience: f32,

    /// Optional length penalty.
    #[arg(long = "length-penalty", alias = "length_penalty")]
    pub length_penalty: Option<f32>,
}

impl Params {
    fn opts(&self) -> Opts {
        Opts {
            language: Some(self.language.clone()).filter(|l| !l.is_empty()),
            temperature: self.temperature,
            beam_size: self.beam_size,
            best_of: self.best_of,
            initial_prompt: Some(self.initial_prompt.clone()).filter(|p| !p.is_empty()),
            condition_on_previous_text: parse_flag(&self.condition_on_previous_text),
            word_timestamps: self.word_timestamps,
            patience: self.patience,
            length_penalty: self.length_penalty,
            no_speech_threshold: self.no_speech_threshold,
            logprob_threshold: self.logprob_threshold,
            compression_ratio_threshold: self.compression_ratio_threshold,
        }
    }

    fn batch_output(&self) -> BatchOutput {
        BatchOutput {
            output_dir: self.output_dir.clone(),
            formats: OutputFormat::parse_list(&self.formats),
            include_word_line: self.word_timestamps,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y"
    )
}

fn get_params() -> Result<Params> {
    Ok(Params::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_accepts_truthy_spellings() {
        for value in ["1", "true", "TRUE", "yes", "Y", " y "] {
            assert!(parse_flag(value), "{value}");
        }
        for value in ["0", "false", "no", "", "maybe"] {
            assert!(!parse_flag(value), "{value}");
        }
    }

    #[test]
    fn params_map_onto_library_config() {
        let params = Params::parse_from([
            "quill",
            "a.json",
            "b.json",
            "--formats",
            "srt,xml,JSON",
            "--word-timestamps",
            "--output-dir",
            "out",
            "--logprob-threshold",
            "-0.5",
            "--condition-on-previous-text",
            "yes",
        ]);

        let output = params.batch_output();
        assert_eq!(
            output.formats.into_iter().collect::<Vec<_>>(),
            vec![OutputFormat::Srt, OutputFormat::Json]
        );
        assert!(output.include_word_line);
        assert_eq!(output.output_dir, PathBuf::from("out"));

        let opts = params.opts();
        assert!(opts.word_timestamps);
        assert!(opts.condition_on_previous_text);
        assert_eq!(opts.logprob_threshold, -0.5);
        assert_eq!(opts.initial_prompt, None);
        assert_eq!(opts.language.as_deref(), Some("en"));
    }
}
