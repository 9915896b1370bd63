//! Spoken language selection
//!
//! Every note can be spoken in one of two voices. The variants carry the
//! locale tags the speech engine is asked for; anything else is rejected
//! at the command parsing boundary so the core never sees an unknown tag.

use std::fmt;
use std::str::FromStr;

use crate::IvnError;

/// Language a note is spoken in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Spanish,
    English,
}

impl Language {
    /// Primary language subtag ("es", "en")
    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    /// Full BCP 47 tag used when matching engine voices
    pub fn bcp47(&self) -> &'static str {
        match self {
            Language::Spanish => "es-ES",
            Language::English => "en-GB",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = IvnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" | "es-es" => Ok(Language::Spanish),
            "en" | "en-gb" => Ok(Language::English),
            other => Err(IvnError::Command(format!(
                "unknown language '{}' (expected es or en)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!("es-ES".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!("en-gb".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_codes() {
        assert_eq!(Language::Spanish.code(), "es");
        assert_eq!(Language::English.bcp47(), "en-GB");
        assert_eq!(Language::Spanish.to_string(), "es");
    }
}
