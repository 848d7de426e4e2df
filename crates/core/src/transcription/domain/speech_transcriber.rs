use super::audio_clip::AudioClip;
use super::transcription_error::TranscriptionError;

/// Domain interface for speech-to-text transcription.
///
/// Implementations turn an audio clip into the plain text that was spoken.
pub trait SpeechTranscriber: Send {
    fn transcribe(&self, audio: &AudioClip) -> Result<String, TranscriptionError>;
}
