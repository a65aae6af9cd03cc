//! Pronunciation audio fetched from a third-party dictionary service.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use furikake_core::error::ProviderError;
use furikake_core::providers::AudioProvider;

/// Byte length of the service's fixed "not available" clip: missing
/// words come back as this placeholder with a success status.
const PLACEHOLDER_CLIP_LEN: usize = 52288;

/// Anything shorter than this is an error page, not audio.
const MIN_CLIP_LEN: usize = 1024;

/// Blocking client for a pronunciation service keyed on (kanji, kana).
///
/// Fetched clips are written into `media_dir` and referenced with an
/// Anki-style `[sound:...]` tag.
pub struct PronunciationClient {
    base_url: String,
    media_dir: PathBuf,
    client: reqwest::blocking::Client,
}

impl PronunciationClient {
    pub fn new(
        base_url: impl Into<String>,
        media_dir: impl Into<PathBuf>,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ProviderError::Service(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            media_dir: media_dir.into(),
            client,
        })
    }
}

impl AudioProvider for PronunciationClient {
    fn fetch(&self, word: &str, kana: &str) -> Result<Option<String>, ProviderError> {
        if word.is_empty() && kana.is_empty() {
            return Ok(None);
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("kanji", word), ("kana", kana)])
            .send()
            .map_err(|e| ProviderError::Service(e.to_string()))?;
        if !response.status().is_success() {
            return Err(ProviderError::Service(format!(
                "pronunciation service returned {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .map_err(|e| ProviderError::Service(e.to_string()))?;
        if !looks_like_audio(&bytes) {
            tracing::debug!(%word, len = bytes.len(), "placeholder or invalid clip, ignoring");
            return Ok(None);
        }

        let file_name = clip_file_name(word, kana);
        let path = self.media_dir.join(&file_name);
        fs::write(&path, &bytes)?;
        tracing::info!(%word, file = %file_name, "saved pronunciation clip");

        Ok(Some(format!("[sound:{file_name}]")))
    }
}

fn clip_file_name(word: &str, kana: &str) -> String {
    let sanitize = |s: &str| s.replace(['/', '\\', ':'], "_");
    format!("furikake_{}_{}.mp3", sanitize(word), sanitize(kana))
}

/// The service answers missing words with a fixed apology clip instead
/// of an error status; reject it by length along with anything that is
/// not an MP3 payload.
fn looks_like_audio(bytes: &[u8]) -> bool {
    if bytes.len() < MIN_CLIP_LEN || bytes.len() == PLACEHOLDER_CLIP_LEN {
        return false;
    }
    // ID3 header or bare MPEG frame sync
    bytes.starts_with(b"ID3") || (bytes[0] == 0xFF && bytes[1] & 0xE0 == 0xE0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_and_short_payloads_are_rejected() {
        assert!(!looks_like_audio(b"<html>not found</html>"));
        assert!(!looks_like_audio(&vec![0xFFu8; PLACEHOLDER_CLIP_LEN]));
    }

    #[test]
    fn mp3_payloads_are_accepted() {
        let mut id3 = b"ID3".to_vec();
        id3.resize(4096, 0);
        assert!(looks_like_audio(&id3));

        let mut frame = vec![0xFF, 0xFB];
        frame.resize(4096, 0);
        assert!(looks_like_audio(&frame));
    }

    #[test]
    fn html_of_audio_length_is_rejected() {
        let mut page = b"<html>".to_vec();
        page.resize(4096, b' ');
        assert!(!looks_like_audio(&page));
    }

    #[test]
    fn file_names_are_fs_safe() {
        assert_eq!(clip_file_name("食べる", "たべる"), "furikake_食べる_たべる.mp3");
        assert_eq!(clip_file_name("a/b", "c:d"), "furikake_a_b_c_d.mp3");
    }
}
