use thiserror::Error;

use crate::comparison::domain::comparison_error::ComparisonError;
use crate::transcription::domain::transcription_error::TranscriptionError;

#[derive(Error, Debug)]
pub enum PronunciationError {
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error(transparent)]
    Comparison(#[from] ComparisonError),
}
