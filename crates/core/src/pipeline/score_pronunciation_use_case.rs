use serde::Serialize;

use crate::comparison::domain::script_comparator::ScriptComparator;
use crate::pipeline::pronunciation_error::PronunciationError;
use crate::pipeline::transcribe_audio_use_case::TranscribeAudioUseCase;
use crate::transcription::domain::audio_clip::AudioClip;
use crate::transcription::domain::speech_transcriber::SpeechTranscriber;

/// Everything a client needs to show a pronunciation result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PronunciationReport {
    pub original_script: String,
    /// Lowercased transcript of what was spoken.
    pub user_script: String,
    pub score: f64,
    /// Highlighted transcript. Not HTML-escaped.
    pub html: String,
}

/// Pronunciation scoring pipeline: transcribe → compare → report.
pub struct ScorePronunciationUseCase {
    transcription: TranscribeAudioUseCase,
}

impl ScorePronunciationUseCase {
    pub fn new(transcriber: Box<dyn SpeechTranscriber>) -> Self {
        Self {
            transcription: TranscribeAudioUseCase::new(transcriber),
        }
    }

    pub fn run(
        &self,
        original_script: &str,
        audio: &AudioClip,
    ) -> Result<PronunciationReport, PronunciationError> {
        let user_script = self.transcription.run(audio)?;
        let comparison = ScriptComparator::compare(original_script, &user_script)?;

        log::info!(
            "Scored {} against reference: {}",
            audio.file_name(),
            comparison.score
        );

        Ok(PronunciationReport {
            original_script: original_script.to_string(),
            user_script,
            score: comparison.score,
            html: comparison.html,
        })
    }
}
