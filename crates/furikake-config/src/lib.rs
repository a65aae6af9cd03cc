use serde::{Deserialize, Serialize};

use furikake_core::fields::{ConjugatedForm, FieldMapping, FieldRole};

/// Maps logical field roles to record field names.
///
/// Every destination is optional; a role left unmapped simply skips
/// that derivation. `pitch_field` is reserved for a future
/// pitch-accent renderer and is never written to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Field holding the source word (kanji/kana).
    pub source_field: String,

    pub furigana_field: Option<String>,
    pub kana_field: Option<String>,
    pub romaji_field: Option<String>,
    pub type_field: Option<String>,
    pub definition_field: Option<String>,
    pub alternates_field: Option<String>,
    pub sentence_field: Option<String>,
    pub audio_field: Option<String>,
    pub pitch_field: Option<String>,

    pub masu_field: Option<String>,
    pub te_field: Option<String>,
    pub past_field: Option<String>,
    pub negative_field: Option<String>,
    pub potential_field: Option<String>,
    pub passive_field: Option<String>,
    pub conditional_field: Option<String>,
    pub volitional_field: Option<String>,
    pub desire_field: Option<String>,
    pub imperative_field: Option<String>,

    /// Maximum number of dictionary senses to pull.
    pub number_of_defs: usize,
    /// Maximum number of example sentences to pull.
    pub number_of_sentences: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            source_field: "Expression".to_string(),
            furigana_field: None,
            kana_field: None,
            romaji_field: None,
            type_field: None,
            definition_field: None,
            alternates_field: None,
            sentence_field: None,
            audio_field: None,
            pitch_field: None,
            masu_field: None,
            te_field: None,
            past_field: None,
            negative_field: None,
            potential_field: None,
            passive_field: None,
            conditional_field: None,
            volitional_field: None,
            desire_field: None,
            imperative_field: None,
            number_of_defs: 5,
            number_of_sentences: 3,
        }
    }
}

impl FieldMapping for FieldConfig {
    fn destination(&self, role: FieldRole) -> Option<&str> {
        let dest = match role {
            FieldRole::Furigana => &self.furigana_field,
            FieldRole::Kana => &self.kana_field,
            FieldRole::Romaji => &self.romaji_field,
            FieldRole::PartOfSpeech => &self.type_field,
            FieldRole::Definition => &self.definition_field,
            FieldRole::Alternates => &self.alternates_field,
            FieldRole::Sentences => &self.sentence_field,
            FieldRole::Audio => &self.audio_field,
            FieldRole::PitchAccent => &self.pitch_field,
            FieldRole::Conjugated(form) => match form {
                ConjugatedForm::Masu => &self.masu_field,
                ConjugatedForm::Te => &self.te_field,
                ConjugatedForm::Past => &self.past_field,
                ConjugatedForm::Negative => &self.negative_field,
                ConjugatedForm::Potential => &self.potential_field,
                ConjugatedForm::Passive => &self.passive_field,
                ConjugatedForm::Conditional => &self.conditional_field,
                ConjugatedForm::Volitional => &self.volitional_field,
                ConjugatedForm::Desire => &self.desire_field,
                ConjugatedForm::Imperative => &self.imperative_field,
            },
        };
        dest.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_roles_have_no_destination() {
        let config = FieldConfig::default();
        assert_eq!(config.destination(FieldRole::Furigana), None);
        assert_eq!(
            config.destination(FieldRole::Conjugated(ConjugatedForm::Te)),
            None
        );
    }

    #[test]
    fn mapped_roles_resolve() {
        let config = FieldConfig {
            kana_field: Some("Reading".to_string()),
            te_field: Some("TeForm".to_string()),
            ..FieldConfig::default()
        };
        assert_eq!(config.destination(FieldRole::Kana), Some("Reading"));
        assert_eq!(
            config.destination(FieldRole::Conjugated(ConjugatedForm::Te)),
            Some("TeForm")
        );
    }
}
