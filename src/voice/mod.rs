//! Voice pipeline: push-to-talk capture, STT, TTS and playback
//!
//! There is no wake word and no always-on listening: the presentation
//! surface triggers a single timed capture per "Speak" action, and replies
//! are spoken back best-effort.

mod capture;
mod playback;
mod stt;
mod tts;

use std::time::Duration;

pub use capture::{AudioCapture, SAMPLE_RATE, rms, samples_to_wav};
pub use playback::AudioPlayback;
pub use stt::{CaptureOutcome, SpeechToText};
pub use tts::TextToSpeech;

use crate::config::{ApiKeys, VoiceConfig};
use crate::{Error, Result};

/// Everything needed to hear and speak, bundled for the console
pub struct VoicePipeline {
    capture: AudioCapture,
    playback: AudioPlayback,
    stt: SpeechToText,
    tts: TextToSpeech,
    capture_timeout: Duration,
}

impl VoicePipeline {
    /// Build the pipeline from configuration
    ///
    /// # Errors
    ///
    /// Returns error if audio devices cannot be opened or the required
    /// STT/TTS API keys are missing
    pub fn from_config(voice: &VoiceConfig, keys: &ApiKeys) -> Result<Self> {
        let stt = if voice.stt_model.starts_with("deepgram/") {
            let key = keys
                .deepgram
                .clone()
                .ok_or_else(|| Error::Config("Deepgram API key required".to_string()))?;
            let model = voice
                .stt_model
                .trim_start_matches("deepgram/")
                .to_string();
            SpeechToText::new_deepgram(key, model)?
        } else {
            let key = keys
                .openai
                .clone()
                .ok_or_else(|| Error::Config("OpenAI API key required for Whisper".to_string()))?;
            SpeechToText::new_whisper(key, voice.stt_model.clone())?
        };

        let tts = if voice.tts_model.starts_with("elevenlabs/") {
            let key = keys
                .elevenlabs
                .clone()
                .ok_or_else(|| Error::Config("ElevenLabs API key required".to_string()))?;
            let model = voice
                .tts_model
                .trim_start_matches("elevenlabs/")
                .to_string();
            TextToSpeech::new_elevenlabs(key, voice.tts_voice.clone(), model)?
        } else {
            let key = keys
                .openai
                .clone()
                .ok_or_else(|| Error::Config("OpenAI API key required for TTS".to_string()))?;
            TextToSpeech::new_openai(
                key,
                voice.tts_voice.clone(),
                voice.tts_speed,
                voice.tts_model.clone(),
            )?
        };

        Ok(Self {
            capture: AudioCapture::new()?,
            playback: AudioPlayback::new()?,
            stt,
            tts,
            capture_timeout: Duration::from_secs(voice.capture_timeout_secs),
        })
    }

    /// Capture one utterance and transcribe it
    ///
    /// # Errors
    ///
    /// Returns error when recording fails or the recognition request
    /// cannot be completed; ambiguous audio is an [`CaptureOutcome`], not
    /// an error.
    pub async fn listen(&mut self) -> Result<CaptureOutcome> {
        let samples = self.capture.record_timed(self.capture_timeout).await?;
        self.stt.recognize(&samples).await
    }

    /// Speak a reply, best-effort
    ///
    /// Synthesis or playback failures are logged as warnings and swallowed;
    /// a reply that cannot be spoken is still displayed by the caller.
    pub async fn speak(&mut self, text: &str) {
        let audio = match self.tts.synthesize(text).await {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!(error = %e, "speech synthesis failed");
                return;
            }
        };

        if let Err(e) = self.playback.play_mp3(&audio).await {
            tracing::warn!(error = %e, "speech playback failed");
        }
    }
}
