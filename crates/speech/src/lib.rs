//! Speech bridge ports
//!
//! Converts inbound audio to text and outbound text to audio. The bridge
//! is a capability port: real STT/TTS backends are substituted behind
//! [`SpeechBridge`], with [`MockSpeechBridge`] as the in-tree
//! implementation for development and tests.

mod mock;

pub use mock::MockSpeechBridge;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use courtvoice_core::Language;

/// Speech backend errors
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Audio payload is empty")]
    EmptyAudio,

    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("Synthesis failed: {0}")]
    Synthesis(String),
}

/// Result of transcribing inbound audio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    pub text: String,
    pub confidence: f32,
    pub language: Language,
}

/// Reference to a synthesized audio reply
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizedAudio {
    pub audio_url: String,
    pub format: String,
}

/// Options for text-to-voice synthesis
#[derive(Debug, Clone)]
pub struct SynthesisOptions {
    pub language: Language,
    /// Audio container format, e.g. "ogg"
    pub format: String,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            format: "ogg".to_string(),
        }
    }
}

/// Speech backend trait
#[async_trait]
pub trait SpeechBridge: Send + Sync {
    /// Transcribe inbound audio to text
    async fn voice_to_text(&self, audio: &[u8]) -> Result<Transcription, SpeechError>;

    /// Synthesize a spoken reply for the given text
    async fn text_to_voice(
        &self,
        text: &str,
        options: &SynthesisOptions,
    ) -> Result<SynthesizedAudio, SpeechError>;
}
