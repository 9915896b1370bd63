//! Configuration loading
//!
//! Settings live in an INI file at `~/.ivn.cfg`. Every key is optional and
//! a missing file just means defaults:
//!
//! ```ini
//! [speech]
//! pitch = 0.9
//! rate = 0.9
//! language = es
//!
//! [notes]
//! translations = /home/user/extra-translations.json
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use ini::Ini;
use log::debug;

use crate::{IvnError, Language, Result};

/// Voice pitch applied at engine startup.
pub const DEFAULT_PITCH: f32 = 0.9;
/// Voice rate applied at engine startup.
pub const DEFAULT_RATE: f32 = 0.9;

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    pitch: f32,
    rate: f32,
    default_language: Language,
    translations_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `~/.ivn.cfg`, falling back to defaults when
    /// the file does not exist.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            Self::from_file(&path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::defaults(path))
        }
    }

    /// Parse a config file. Unknown sections and keys are ignored;
    /// malformed values are errors.
    pub fn from_file(path: &Path) -> Result<Self> {
        let ini = Ini::load_from_file(path)
            .map_err(|e| IvnError::Config(format!("{}: {}", path.display(), e)))?;
        let mut config = Self::defaults(path.to_path_buf());

        if let Some(speech) = ini.section(Some("speech")) {
            if let Some(value) = speech.get("pitch") {
                config.pitch = parse_float("pitch", value)?;
            }
            if let Some(value) = speech.get("rate") {
                config.rate = parse_float("rate", value)?;
            }
            if let Some(value) = speech.get("language") {
                config.default_language = Language::from_str(value)
                    .map_err(|_| IvnError::Config(format!("invalid language '{}'", value)))?;
            }
        }

        if let Some(notes) = ini.section(Some("notes")) {
            if let Some(value) = notes.get("translations") {
                config.translations_path = Some(PathBuf::from(value));
            }
        }

        debug!("Config loaded from {}", path.display());
        Ok(config)
    }

    fn defaults(path: PathBuf) -> Self {
        Self {
            path,
            pitch: DEFAULT_PITCH,
            rate: DEFAULT_RATE,
            default_language: Language::Spanish,
            translations_path: None,
        }
    }

    /// Where the configuration was (or would be) read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Language used when a speak command names none.
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Optional JSON table merged over the built-in translations.
    pub fn translations_path(&self) -> Option<&Path> {
        self.translations_path.as_deref()
    }
}

fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ivn.cfg")
}

fn parse_float(key: &str, value: &str) -> Result<f32> {
    value
        .trim()
        .parse()
        .map_err(|_| IvnError::Config(format!("invalid {} value '{}'", key, value)))
}
