use std::fmt;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::shared::constants::{
    OPENAI_TRANSCRIPTION_URL, TRANSCRIPTION_LANGUAGE, TRANSCRIPTION_MODEL,
    TRANSCRIPTION_TEMPERATURE,
};
use crate::transcription::domain::audio_clip::AudioClip;
use crate::transcription::domain::speech_transcriber::SpeechTranscriber;
use crate::transcription::domain::transcription_error::TranscriptionError;

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Speech transcriber backed by the OpenAI audio transcription API.
///
/// Uploads the clip as multipart form data and returns the transcript text
/// untouched. One blocking request per call.
pub struct OpenAiTranscriber {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    language: String,
    temperature: f32,
}

impl OpenAiTranscriber {
    pub fn new(api_key: impl Into<String>) -> Result<Self, TranscriptionError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TranscriptionError::MissingApiKey);
        }
        Ok(Self {
            client: Client::new(),
            api_key,
            endpoint: OPENAI_TRANSCRIPTION_URL.to_string(),
            model: TRANSCRIPTION_MODEL.to_string(),
            language: TRANSCRIPTION_LANGUAGE.to_string(),
            temperature: TRANSCRIPTION_TEMPERATURE,
        })
    }

    /// Sends requests to a different URL (proxies, compatible self-hosted servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_form(&self, audio: &AudioClip) -> Form {
        let file = Part::bytes(audio.bytes().to_vec()).file_name(audio.file_name().to_string());
        Form::new()
            .text("model", self.model.clone())
            .text("language", self.language.clone())
            .text("temperature", self.temperature.to_string())
            .part("file", file)
    }
}

impl fmt::Debug for OpenAiTranscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiTranscriber")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("language", &self.language)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

impl SpeechTranscriber for OpenAiTranscriber {
    fn transcribe(&self, audio: &AudioClip) -> Result<String, TranscriptionError> {
        if audio.is_empty() {
            return Err(TranscriptionError::EmptyAudio(audio.file_name().to_string()));
        }

        log::info!(
            "Transcribing {} ({} bytes) with {}",
            audio.file_name(),
            audio.bytes().len(),
            self.model
        );

        let request_error = |source: reqwest::Error| TranscriptionError::Request {
            url: self.endpoint.clone(),
            source,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(self.build_form(audio))
            .send()
            .map_err(request_error)?;

        let status = response.status();
        let body = response.text().map_err(request_error)?;
        if !status.is_success() {
            log::warn!("Transcription service returned {status}");
            return Err(TranscriptionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TranscriptionResponse =
            serde_json::from_str(&body).map_err(TranscriptionError::Decode)?;
        log::debug!("Transcript: {} chars", parsed.text.len());
        Ok(parsed.text)
    }
}
