//! Command parsing for the interactive loop
//!
//! Each tap target of the original phrase board maps to one line command.
//! Speaking is the common case, so `say 3 en` also works as just `3 en`
//! or `3`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{IvnError, Language, Result};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the note board.
    List,
    /// Speak note `index` (1-based), in `language` or the configured default.
    Say {
        index: usize,
        language: Option<Language>,
    },
    /// Append a note to the board.
    Add { title: String, content: String },
    /// Copy note content to the clipboard.
    Copy { index: usize },
    Register,
    Login,
    Users,
    Help,
    Quit,
}

/// `say 3 en`, `say 3`, `3 en`, `3`
static SAY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:say\s+)?(\d+)(?:\s+(\S+))?$").unwrap());

/// Parse one input line.
pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();

    match line {
        "list" | "notes" => return Ok(Command::List),
        "register" => return Ok(Command::Register),
        "login" => return Ok(Command::Login),
        "users" => return Ok(Command::Users),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    if let Some(rest) = line.strip_prefix("add ") {
        let (title, content) = rest
            .split_once('|')
            .ok_or_else(|| IvnError::Command("usage: add <title> | <content>".into()))?;
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(IvnError::Command("usage: add <title> | <content>".into()));
        }
        return Ok(Command::Add {
            title: title.to_string(),
            content: content.to_string(),
        });
    }

    if let Some(rest) = line.strip_prefix("copy ") {
        return Ok(Command::Copy {
            index: parse_index(rest.trim())?,
        });
    }

    if let Some(caps) = SAY_RE.captures(line) {
        let index = parse_index(&caps[1])?;
        let language = match caps.get(2) {
            Some(tag) => Some(tag.as_str().parse()?),
            None => None,
        };
        return Ok(Command::Say { index, language });
    }

    Err(IvnError::Command(format!(
        "unknown command '{}', try help",
        line
    )))
}

fn parse_index(s: &str) -> Result<usize> {
    let index: usize = s
        .parse()
        .map_err(|_| IvnError::Command(format!("'{}' is not a note number", s)))?;
    if index == 0 {
        return Err(IvnError::Command("note numbers start at 1".into()));
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_say_forms() {
        assert_eq!(
            parse("say 3 en").unwrap(),
            Command::Say {
                index: 3,
                language: Some(Language::English)
            }
        );
        assert_eq!(
            parse("3 es").unwrap(),
            Command::Say {
                index: 3,
                language: Some(Language::Spanish)
            }
        );
        assert_eq!(
            parse("12").unwrap(),
            Command::Say {
                index: 12,
                language: None
            }
        );
    }

    #[test]
    fn test_add() {
        assert_eq!(
            parse("add Saludo | Hola, ¿cómo estás?").unwrap(),
            Command::Add {
                title: "Saludo".to_string(),
                content: "Hola, ¿cómo estás?".to_string()
            }
        );
        assert!(parse("add Saludo").is_err());
        assert!(parse("add | Hola").is_err());
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse("list").unwrap(), Command::List);
        assert_eq!(parse(" quit ").unwrap(), Command::Quit);
        assert_eq!(parse("?").unwrap(), Command::Help);
        assert_eq!(parse("copy 2").unwrap(), Command::Copy { index: 2 });
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse("0").is_err());
        assert!(parse("say").is_err());
        assert!(parse("say 3 fr").is_err());
        assert!(parse("speak loudly").is_err());
    }
}
