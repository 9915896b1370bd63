//! Clipboard integration
//!
//! `copy <n>` puts a note's content on the system clipboard so the phrase
//! can be pasted into a chat when speaking it aloud is not an option.

use arboard::Clipboard;
use log::debug;

use crate::{IvnError, Result};

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    debug!("Copying {} chars to clipboard", text.len());

    let mut clipboard = Clipboard::new()
        .map_err(|e| IvnError::Other(format!("Failed to open clipboard: {}", e)))?;

    clipboard
        .set_text(text)
        .map_err(|e| IvnError::Other(format!("Failed to copy to clipboard: {}", e)))?;

    Ok(())
}
