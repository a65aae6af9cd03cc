use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use furikake_core::error::LexiconError;

/// One JmdictFurigana record: a surface text and its ruby segments.
/// See <https://github.com/Doublevil/JmdictFurigana>
#[derive(Debug, Clone, Deserialize)]
pub struct FuriganaEntry {
    pub text: String,
    #[serde(default)]
    pub reading: String,
    pub furigana: Vec<Ruby>,
}

/// A run of surface text, with a reading when it contains kanji.
#[derive(Debug, Clone, Deserialize)]
pub struct Ruby {
    pub ruby: String,
    pub rt: Option<String>,
}

/// Exact-match index from surface text to its ruby segments.
///
/// Matching is on the literal input string; no normalization. The
/// source lists one record per (text, reading) pair, so duplicate
/// surface texts occur; the first record wins.
#[derive(Debug, Default)]
pub struct FuriganaIndex {
    entries: HashMap<String, FuriganaEntry>,
}

impl FuriganaIndex {
    /// Load the index from a JmdictFurigana JSON file. The published
    /// file starts with a UTF-8 BOM, which is stripped.
    pub fn load_from_file(path: &Path) -> Result<Self, LexiconError> {
        if !path.exists() {
            return Err(LexiconError::FileNotFound(path.display().to_string()));
        }
        tracing::info!("loading furigana from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let index = Self::from_json(&json, &path.display().to_string())?;
        tracing::info!("loaded {} furigana entries", index.len());
        Ok(index)
    }

    pub fn from_json(json: &str, source_name: &str) -> Result<Self, LexiconError> {
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);
        let entries: Vec<FuriganaEntry> =
            serde_json::from_str(json).map_err(|e| LexiconError::Malformed {
                file: source_name.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::from_entries(entries))
    }

    pub fn from_entries(entries: Vec<FuriganaEntry>) -> Self {
        let mut index = Self::default();
        for entry in entries {
            index.entries.entry(entry.text.clone()).or_insert(entry);
        }
        index
    }

    /// The rendered ruby string for a surface text, or None when the
    /// text is not in the index.
    pub fn lookup(&self, word: &str) -> Option<String> {
        self.entries.get(word).map(|entry| render(&entry.furigana))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Concatenate segments into reading-bracket notation.
///
/// A segment with a reading renders as `text[reading]`. A single space
/// separates a no-reading segment from an immediately preceding
/// reading segment, so a kana run never merges visually into the
/// bracket group before it. No space at the string start or between
/// consecutive no-reading segments.
fn render(segments: &[Ruby]) -> String {
    let mut out = String::new();
    let mut prev_had_reading = false;

    for segment in segments {
        match &segment.rt {
            Some(rt) => {
                out.push_str(&segment.ruby);
                out.push('[');
                out.push_str(rt);
                out.push(']');
                prev_had_reading = true;
            }
            None => {
                if prev_had_reading {
                    out.push(' ');
                }
                out.push_str(&segment.ruby);
                prev_had_reading = false;
            }
        }
    }

    out
}
