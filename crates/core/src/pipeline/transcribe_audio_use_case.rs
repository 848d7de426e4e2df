use crate::pipeline::pronunciation_error::PronunciationError;
use crate::transcription::domain::audio_clip::AudioClip;
use crate::transcription::domain::speech_transcriber::SpeechTranscriber;

/// Audio in, lowercased transcript out.
pub struct TranscribeAudioUseCase {
    transcriber: Box<dyn SpeechTranscriber>,
}

impl TranscribeAudioUseCase {
    pub fn new(transcriber: Box<dyn SpeechTranscriber>) -> Self {
        Self { transcriber }
    }

    pub fn run(&self, audio: &AudioClip) -> Result<String, PronunciationError> {
        let transcript = self.transcriber.transcribe(audio)?;
        Ok(transcript.to_lowercase())
    }
}
