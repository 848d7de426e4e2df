pub mod pronunciation_error;
pub mod score_pronunciation_use_case;
pub mod transcribe_audio_use_case;
