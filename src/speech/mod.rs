//! Speech dispatch
//!
//! Deciding what to say is separate from saying it: `resolve_speech_text`
//! is a pure function over the note and the translation table, and
//! `SpeechDispatcher` owns the engine lifecycle around it. The engine
//! either comes up at startup or never does; a failed engine is announced
//! once and every later speak request is a quiet no-op.

pub mod synth;

use log::{debug, warn};

use self::synth::{create_synth, Synth};
use crate::note::Note;
use crate::translation::TranslationTable;
use crate::Language;

/// Resolve the text spoken for a note in a target language.
///
/// An English target goes through the translation table and falls back to
/// the original content on a miss; the untranslated Spanish is then spoken
/// with the English voice, which is what the app has always done. Any
/// other target speaks the content verbatim.
pub fn resolve_speech_text<'a>(
    note: &'a Note,
    language: Language,
    table: &'a TranslationTable,
) -> &'a str {
    match language {
        Language::English => table.lookup(note.content()).unwrap_or(note.content()),
        Language::Spanish => note.content(),
    }
}

enum Engine {
    Ready(Box<dyn Synth>),
    Failed,
}

/// Dispatches notes to the speech engine.
pub struct SpeechDispatcher {
    engine: Engine,
    table: TranslationTable,
}

impl SpeechDispatcher {
    /// Bring up the native engine and apply the startup voice settings.
    ///
    /// Initialization failure is reported to the user here, once; there is
    /// no retry, and the dispatcher stays usable as a no-op.
    pub fn initialize(
        table: TranslationTable,
        pitch: f32,
        rate: f32,
        startup_language: Language,
    ) -> Self {
        match create_synth() {
            Ok(synth) => {
                let mut dispatcher = Self::with_synth(synth, table);
                dispatcher.configure(pitch, rate, startup_language);
                dispatcher
            }
            Err(e) => {
                warn!("Speech engine initialization failed: {}", e);
                eprintln!(
                    "Speech is unavailable: {} ({})",
                    e,
                    crate::platform::speech_setup_hint()
                );
                Self::without_engine(table)
            }
        }
    }

    /// Dispatcher over an already-constructed engine.
    pub fn with_synth(synth: Box<dyn Synth>, table: TranslationTable) -> Self {
        Self {
            engine: Engine::Ready(synth),
            table,
        }
    }

    /// Dispatcher whose engine never came up; every speak is a no-op.
    pub fn without_engine(table: TranslationTable) -> Self {
        Self {
            engine: Engine::Failed,
            table,
        }
    }

    /// Startup voice settings. Pitch and rate are applied once, here;
    /// later language switches reuse whatever is set.
    pub fn configure(&mut self, pitch: f32, rate: f32, language: Language) {
        let Engine::Ready(synth) = &mut self.engine else {
            return;
        };
        if let Err(e) = synth.set_language(language) {
            debug!("Startup voice selection failed: {}", e);
        }
        if let Err(e) = synth.set_pitch(pitch) {
            debug!("Startup pitch failed: {}", e);
        }
        if let Err(e) = synth.set_rate(rate) {
            debug!("Startup rate failed: {}", e);
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.engine, Engine::Ready(_))
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Resolve and speak a note, interrupting any in-progress utterance.
    ///
    /// Engine trouble after startup is logged at debug level only; the
    /// user was already told at initialization whether speech works.
    pub fn speak(&mut self, note: &Note, language: Language) {
        let text = resolve_speech_text(note, language, &self.table);

        let Engine::Ready(synth) = &mut self.engine else {
            debug!("Speech engine unavailable, ignoring speak request");
            return;
        };

        if let Err(e) = synth.set_language(language) {
            debug!("Voice switch failed: {}", e);
        }
        if let Err(e) = synth.speak(text, true) {
            debug!("Utterance failed: {}", e);
        }
    }

    /// Stop the current utterance, if any.
    pub fn cancel(&mut self) {
        if let Engine::Ready(synth) = &mut self.engine {
            if let Err(e) = synth.cancel() {
                debug!("Cancel failed: {}", e);
            }
        }
    }
}
