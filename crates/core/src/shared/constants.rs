pub const OPENAI_TRANSCRIPTION_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
pub const TRANSCRIPTION_MODEL: &str = "whisper-1";
pub const TRANSCRIPTION_LANGUAGE: &str = "en";
/// Sampling temperature sent with every transcription request.
pub const TRANSCRIPTION_TEMPERATURE: f32 = 0.7;

pub const MATCHED_CLASS: &str = "green";
pub const MISMATCHED_CLASS: &str = "red";
pub const CONTAINER_CLASS: &str = "highlighted-script";

/// Fallback upload name when an audio path has no usable file name.
pub const DEFAULT_AUDIO_FILE_NAME: &str = "audio.wav";
