use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("no API key configured for the transcription service")]
    MissingApiKey,
    #[error("audio clip {0} is empty")]
    EmptyAudio(String),
    #[error("transcription request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("transcription service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode transcription response: {0}")]
    Decode(#[source] serde_json::Error),
}
