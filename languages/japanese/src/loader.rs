use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use furikake_core::error::LexiconError;

use crate::dictionary::{JmdictIndex, WordEntry};
use crate::pos_tags;

// JSON structures for parsing the jmdict-simplified format
#[derive(Debug, Deserialize)]
struct JmdictJson {
    words: Vec<JmdictJsonEntry>,
}

#[derive(Debug, Deserialize)]
struct JmdictJsonEntry {
    #[serde(default)]
    kanji: Vec<KanjiElement>,
    #[serde(default)]
    kana: Vec<KanaElement>,
    #[serde(default)]
    sense: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct KanjiElement {
    text: String,
}

#[derive(Debug, Deserialize)]
struct KanaElement {
    text: String,
}

#[derive(Debug, Deserialize)]
struct Sense {
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: Vec<String>,
    #[serde(default)]
    gloss: Vec<Gloss>,
}

#[derive(Debug, Deserialize)]
struct Gloss {
    lang: String,
    text: String,
}

pub struct JmdictLoader;

impl JmdictLoader {
    /// Load the lexicon from a jmdict-simplified JSON file.
    pub fn load_from_file(path: &Path) -> Result<JmdictIndex, LexiconError> {
        if !path.exists() {
            return Err(LexiconError::FileNotFound(path.display().to_string()));
        }
        tracing::info!("loading lexicon from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let index = Self::load_from_json(&json, &path.display().to_string())?;
        tracing::info!("loaded {} lexicon entries", index.len());
        Ok(index)
    }

    /// Build the index from jmdict-simplified JSON text.
    ///
    /// `source_name` identifies the input in build-failure diagnostics.
    pub fn load_from_json(json: &str, source_name: &str) -> Result<JmdictIndex, LexiconError> {
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);
        let data: JmdictJson =
            serde_json::from_str(json).map_err(|e| LexiconError::Malformed {
                file: source_name.to_string(),
                message: e.to_string(),
            })?;

        let mut index = JmdictIndex::new();
        for json_entry in &data.words {
            let Some(entry) = build_entry(json_entry) else {
                continue;
            };

            if json_entry.kanji.is_empty() {
                // No kanji writing: the reading doubles as the lookup key
                if !entry.reading.is_empty() {
                    index.insert(entry.reading.clone(), entry);
                }
            } else {
                for kanji in &json_entry.kanji {
                    index.insert(kanji.text.clone(), entry.clone());
                }
            }
        }
        Ok(index)
    }
}

/// Merge one source entry into a `WordEntry`, or None when it has no
/// English content.
fn build_entry(json_entry: &JmdictJsonEntry) -> Option<WordEntry> {
    let reading = json_entry
        .kana
        .first()
        .map(|k| k.text.trim().to_string())
        .unwrap_or_default();

    let mut tags = BTreeSet::new();
    let mut senses = BTreeMap::new();
    let mut number = 0u32;

    for sense in &json_entry.sense {
        for tag in &sense.part_of_speech {
            tags.insert(pos_tags::expand(tag).to_string());
        }

        let glosses: Vec<&str> = sense
            .gloss
            .iter()
            .filter(|g| g.lang == "eng")
            .map(|g| g.text.as_str())
            .collect();
        if glosses.is_empty() {
            continue;
        }
        number += 1;
        senses.insert(number, format!("{}: {}", number, glosses.join("; ")));
    }

    if senses.is_empty() {
        return None;
    }

    Some(WordEntry {
        reading,
        parts_of_speech: tags.into_iter().collect::<Vec<_>>().join("; "),
        senses,
    })
}
