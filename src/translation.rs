//! Spanish to English phrase translation
//!
//! A closed, exact-match table from source phrase to English equivalent.
//! A lookup miss is not an error; the speech layer falls back to the
//! original text. Extra entries can be loaded from a JSON file listed in
//! the config, a plain array of `{"source": ..., "target": ...}` records.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::{IvnError, Result};

/// Phrases the app knows how to translate out of the box.
const BUILTIN: &[(&str, &str)] = &[
    ("Hola, ¿cómo estás?", "Hello, how are you?"),
    ("¿Podrías ayudarme, por favor?", "Could you help me, please?"),
    ("¿Dónde está el baño?", "Where is the bathroom?"),
];

/// One record in a translation table file.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationEntry {
    pub source: String,
    pub target: String,
}

/// Exact-match source phrase -> English phrase mapping.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the built-in phrase pairs.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(source, target)| (source.to_string(), target.to_string()))
                .collect(),
        }
    }

    /// Load a table from a JSON file of `TranslationEntry` records.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            IvnError::Config(format!("cannot open translation table {}: {}", path.display(), e))
        })?;
        let records: Vec<TranslationEntry> = serde_json::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} translation entries from {}",
            records.len(),
            path.display()
        );

        let mut table = Self::new();
        for record in records {
            table.insert(record.source, record.target);
        }
        Ok(table)
    }

    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(source.into(), target.into());
    }

    /// Fold another table on top of this one; its entries win on collision.
    pub fn merge(&mut self, other: TranslationTable) {
        self.entries.extend(other.entries);
    }

    /// Exact-match lookup. A miss returns `None`, never an error.
    pub fn lookup(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
