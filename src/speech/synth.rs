//! Speech engine boundary
//!
//! `Synth` is the seam between the dispatcher and the platform engine. The
//! native backend wraps the `tts` crate; construction fails on systems
//! with no usable engine (headless CI, missing speech-dispatcher) and the
//! dispatcher treats that as a permanent failed state.

use log::{debug, warn};
use tts::Tts;

use crate::{IvnError, Language, Result};

/// Platform speech engine interface.
pub trait Synth {
    /// Speak text. With `interrupt`, any in-progress utterance is cancelled
    /// rather than queued behind.
    fn speak(&mut self, text: &str, interrupt: bool) -> Result<()>;

    /// Stop the current utterance, if any.
    fn cancel(&mut self) -> Result<()>;

    /// Select the engine voice for a language.
    fn set_language(&mut self, language: Language) -> Result<()>;

    /// Pitch as a multiple of the engine's normal pitch.
    fn set_pitch(&mut self, multiplier: f32) -> Result<()>;

    /// Rate as a multiple of the engine's normal rate.
    fn set_rate(&mut self, multiplier: f32) -> Result<()>;
}

/// Create the native speech synthesizer
pub fn create_synth() -> Result<Box<dyn Synth>> {
    let synth = NativeSynth::new()?;
    Ok(Box::new(synth))
}

/// Native TTS backend over the `tts` crate
pub struct NativeSynth {
    tts: Tts,
}

impl NativeSynth {
    pub fn new() -> Result<Self> {
        let tts = Tts::default()
            .map_err(|e| IvnError::Speech(format!("engine initialization failed: {}", e)))?;
        debug!("Native TTS backend created");
        Ok(Self { tts })
    }
}

impl Synth for NativeSynth {
    fn speak(&mut self, text: &str, interrupt: bool) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.tts
            .speak(text, interrupt)
            .map(|_| ())
            .map_err(|e| IvnError::Speech(format!("speak failed: {}", e)))
    }

    fn cancel(&mut self) -> Result<()> {
        if !self.tts.supported_features().stop {
            return Ok(());
        }
        self.tts
            .stop()
            .map(|_| ())
            .map_err(|e| IvnError::Speech(format!("stop failed: {}", e)))
    }

    fn set_language(&mut self, language: Language) -> Result<()> {
        if !self.tts.supported_features().voice {
            debug!("Engine has no voice selection, keeping current voice");
            return Ok(());
        }

        let voices = self
            .tts
            .voices()
            .map_err(|e| IvnError::Speech(format!("voice listing failed: {}", e)))?;

        // Prefer an exact region match (es-ES, en-GB), else any voice with
        // the right primary language.
        let wanted = language.bcp47();
        let voice = voices
            .iter()
            .find(|v| v.language().as_str().eq_ignore_ascii_case(wanted))
            .or_else(|| {
                voices
                    .iter()
                    .find(|v| v.language().primary_language() == language.code())
            });

        match voice {
            Some(voice) => {
                debug!("Voice for {}: {}", language, voice.name());
                self.tts
                    .set_voice(voice)
                    .map_err(|e| IvnError::Speech(format!("voice switch failed: {}", e)))
            }
            None => {
                // The engine still gets the text; it speaks with whatever
                // voice is active, as the original app did for any locale.
                warn!("No installed voice for {}, keeping current voice", language);
                Ok(())
            }
        }
    }

    fn set_pitch(&mut self, multiplier: f32) -> Result<()> {
        if !self.tts.supported_features().pitch {
            return Ok(());
        }
        let pitch = (self.tts.normal_pitch() * multiplier)
            .clamp(self.tts.min_pitch(), self.tts.max_pitch());
        self.tts
            .set_pitch(pitch)
            .map_err(|e| IvnError::Speech(format!("pitch change failed: {}", e)))
    }

    fn set_rate(&mut self, multiplier: f32) -> Result<()> {
        if !self.tts.supported_features().rate {
            return Ok(());
        }
        let rate =
            (self.tts.normal_rate() * multiplier).clamp(self.tts.min_rate(), self.tts.max_rate());
        self.tts
            .set_rate(rate)
            .map_err(|e| IvnError::Speech(format!("rate change failed: {}", e)))
    }
}
