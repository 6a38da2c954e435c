/// Built-in transcription backends.
pub mod json_import;
