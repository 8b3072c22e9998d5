//! Mock speech backend
//!
//! Stands in for a real STT/TTS provider in development and tests. It
//! produces stable, inspectable values instead of touching any external
//! service.

use async_trait::async_trait;

use courtvoice_core::Language;

use crate::{SpeechBridge, SpeechError, SynthesisOptions, SynthesizedAudio, Transcription};

/// In-tree speech backend.
///
/// `voice_to_text` replays a canned transcript (what a real backend would
/// have heard); `text_to_voice` mints a URL under a fake audio host.
#[derive(Debug, Clone, Default)]
pub struct MockSpeechBridge {
    transcript: Option<String>,
}

impl MockSpeechBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the transcript returned by `voice_to_text`
    pub fn with_transcript(transcript: impl Into<String>) -> Self {
        Self {
            transcript: Some(transcript.into()),
        }
    }
}

#[async_trait]
impl SpeechBridge for MockSpeechBridge {
    async fn voice_to_text(&self, audio: &[u8]) -> Result<Transcription, SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }

        let text = self
            .transcript
            .clone()
            .ok_or_else(|| SpeechError::Transcription("mock has no transcript configured".into()))?;

        Ok(Transcription {
            text,
            confidence: 0.92,
            language: Language::default(),
        })
    }

    async fn text_to_voice(
        &self,
        text: &str,
        options: &SynthesisOptions,
    ) -> Result<SynthesizedAudio, SpeechError> {
        if text.is_empty() {
            return Err(SpeechError::Synthesis("nothing to synthesize".into()));
        }

        Ok(SynthesizedAudio {
            audio_url: format!(
                "https://audio.courtvoice.local/{}/{}.{}",
                options.language.tag(),
                uuid::Uuid::new_v4(),
                options.format
            ),
            format: options.format.clone(),
        })
    }
}
