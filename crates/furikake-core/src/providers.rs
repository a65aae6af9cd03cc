use crate::error::ProviderError;

/// Kana → romanized text conversion.
pub trait Transliterator: Send + Sync {
    fn transliterate(&self, kana: &str) -> String;
}

/// Ranked example sentences for a word, pre-formatted for display.
pub trait SentenceProvider: Send + Sync {
    fn sentences(&self, word: &str, limit: usize) -> Vec<String>;
}

/// Pronunciation audio keyed by (word, kana reading).
///
/// Returns `Ok(None)` when the service has no audio for the word; the
/// caller treats errors the same way and continues without audio.
pub trait AudioProvider: Send + Sync {
    fn fetch(&self, word: &str, kana: &str) -> Result<Option<String>, ProviderError>;
}

pub struct NullSentenceProvider;

impl SentenceProvider for NullSentenceProvider {
    fn sentences(&self, _word: &str, _limit: usize) -> Vec<String> {
        Vec::new()
    }
}

pub struct NullAudioProvider;

impl AudioProvider for NullAudioProvider {
    fn fetch(&self, _word: &str, _kana: &str) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }
}
