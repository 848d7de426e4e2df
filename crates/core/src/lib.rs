//! Pronunciation scoring: compare a reference script with what was actually
//! spoken, and highlight the difference word by word.
//!
//! The comparison core in [`comparison`] is pure and does no I/O. Audio is
//! turned into text by a [`transcription::domain::speech_transcriber::SpeechTranscriber`],
//! and [`pipeline`] wires the two together.

pub mod comparison;
pub mod pipeline;
pub mod shared;
pub mod transcription;
