//! ivn - Inclusive voice notes for the terminal
//!
//! A phrase board for people who communicate through synthesized speech:
//! an ordered list of short notes, each speakable in Spanish or English,
//! backed by an exact-match translation table and in-memory accounts.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod language;
pub mod note;
pub mod platform;
pub mod speech;
pub mod translation;
pub mod users;

pub use error::{IvnError, Result};
pub use language::Language;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "ivn";
