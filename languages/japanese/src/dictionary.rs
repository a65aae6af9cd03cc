use std::collections::{BTreeMap, HashMap};

/// Merged dictionary entry for one surface form.
#[derive(Debug, Clone)]
pub struct WordEntry {
    /// Kana reading (first reading element of the source entry).
    pub reading: String,
    /// Expanded part-of-speech texts, joined with "; ".
    pub parts_of_speech: String,
    /// 1-based sense number → "N: gloss; gloss" text.
    pub senses: BTreeMap<u32, String>,
}

impl WordEntry {
    /// Up to `limit` sense texts in sense order.
    ///
    /// Internal ";" characters are flattened to "," so callers can use
    /// their own delimiters downstream. Absent sense numbers are
    /// skipped, so the result may be shorter than `limit`.
    pub fn glosses(&self, limit: usize) -> Vec<String> {
        let mut out = Vec::new();
        for number in 1..=limit as u32 {
            if let Some(sense) = self.senses.get(&number) {
                out.push(sense.replace(';', ","));
            }
        }
        out
    }
}

/// Exact-match index from surface form to its dictionary entry.
///
/// Entries sharing a key are merged with a first-entry-wins rule:
/// later duplicates are ignored, matching the source lexicon's
/// behavior that downstream output depends on.
#[derive(Debug, Default)]
pub struct JmdictIndex {
    entries: HashMap<String, WordEntry>,
}

impl JmdictIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, key: String, entry: WordEntry) {
        self.entries.entry(key).or_insert(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(reading: &str, senses: &[&str]) -> WordEntry {
        WordEntry {
            reading: reading.to_string(),
            parts_of_speech: String::new(),
            senses: senses
                .iter()
                .enumerate()
                .map(|(i, text)| (i as u32 + 1, format!("{}: {}", i + 1, text)))
                .collect(),
        }
    }

    #[test]
    fn first_entry_wins_on_duplicate_keys() {
        let mut index = JmdictIndex::new();
        index.insert("市".to_string(), entry("いち", &["market"]));
        index.insert("市".to_string(), entry("し", &["city"]));

        let found = index.lookup("市").unwrap();
        assert_eq!(found.reading, "いち");
        assert_eq!(found.glosses(5), vec!["1: market"]);
    }

    #[test]
    fn glosses_respect_limit_and_replace_semicolons() {
        let word = entry("たべる", &["to eat; to dine", "to live on"]);
        assert_eq!(
            word.glosses(1),
            vec!["1: to eat, to dine"]
        );
        assert_eq!(
            word.glosses(5),
            vec!["1: to eat, to dine", "2: to live on"]
        );
    }

    #[test]
    fn glosses_skip_absent_sense_numbers() {
        let mut word = entry("かく", &["to write"]);
        word.senses.insert(3, "3: to draw".to_string());
        assert_eq!(word.glosses(5), vec!["1: to write", "3: to draw"]);
    }

    #[test]
    fn lookup_is_exact_match_only() {
        let mut index = JmdictIndex::new();
        index.insert("食べる".to_string(), entry("たべる", &["to eat"]));
        assert!(index.lookup("食べ").is_none());
        assert!(index.lookup("食べるる").is_none());
    }
}
