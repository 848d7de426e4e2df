pub mod audio_clip;
pub mod speech_transcriber;
pub mod transcription_error;
