use std::path::Path;

use furikake_core::error::LexiconError;
use furikake_core::fields::LINE_BREAK;
use furikake_core::providers::SentenceProvider;

/// One corpus sentence with its translation.
#[derive(Debug, Clone)]
pub struct SentencePair {
    pub japanese: String,
    pub translation: String,
}

/// Example-sentence corpus over a tab-separated file of
/// `japanese<TAB>translation` lines, e.g. a Tatoeba pair export.
///
/// Lookup is containment on the Japanese side; corpus order is the
/// ranking.
pub struct TsvSentenceCorpus {
    pairs: Vec<SentencePair>,
}

impl TsvSentenceCorpus {
    pub fn load_from_file(path: &Path) -> Result<Self, LexiconError> {
        if !path.exists() {
            return Err(LexiconError::FileNotFound(path.display().to_string()));
        }
        tracing::info!("loading sentence corpus from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let corpus = Self::from_tsv(&text);
        tracing::info!("loaded {} sentence pairs", corpus.len());
        Ok(corpus)
    }

    /// Lines without a tab or with an empty Japanese side are dropped.
    pub fn from_tsv(text: &str) -> Self {
        let pairs = text
            .lines()
            .filter_map(|line| {
                let (japanese, translation) = line.split_once('\t')?;
                let japanese = japanese.trim();
                if japanese.is_empty() {
                    return None;
                }
                Some(SentencePair {
                    japanese: japanese.to_string(),
                    translation: translation.trim().to_string(),
                })
            })
            .collect();
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl SentenceProvider for TsvSentenceCorpus {
    fn sentences(&self, word: &str, limit: usize) -> Vec<String> {
        if word.is_empty() || limit == 0 {
            return Vec::new();
        }
        self.pairs
            .iter()
            .filter(|pair| pair.japanese.contains(word))
            .take(limit)
            .map(|pair| {
                if pair.translation.is_empty() {
                    pair.japanese.clone()
                } else {
                    format!("{}{}{}", pair.japanese, LINE_BREAK, pair.translation)
                }
            })
            .collect()
    }
}
