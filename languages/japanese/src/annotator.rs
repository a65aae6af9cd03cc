use furikake_config::FieldConfig;
use furikake_core::fields::{
    ConjugatedForm, DerivedFieldSet, FieldMapping, FieldRole, LINE_BREAK,
};
use furikake_core::preprocess::{DefaultPreprocessor, Preprocessor};
use furikake_core::providers::{
    AudioProvider, NullAudioProvider, NullSentenceProvider, SentenceProvider, Transliterator,
};
use furikake_core::record::Record;
use furikake_core::update;

use crate::classifier;
use crate::conjugator;
use crate::dictionary::JmdictIndex;
use crate::furigana::FuriganaIndex;
use crate::romaji::HepburnTransliterator;

/// Derives annotation fields for Japanese words and applies them to
/// records.
///
/// The indexes and external providers are injected at construction;
/// the annotator holds no other state and can be shared across
/// sequential invocations.
pub struct JapaneseAnnotator {
    dictionary: JmdictIndex,
    furigana: FuriganaIndex,
    transliterator: Box<dyn Transliterator>,
    sentences: Box<dyn SentenceProvider>,
    audio: Box<dyn AudioProvider>,
}

impl JapaneseAnnotator {
    pub fn new(dictionary: JmdictIndex, furigana: FuriganaIndex) -> Self {
        Self {
            dictionary,
            furigana,
            transliterator: Box::new(HepburnTransliterator),
            sentences: Box::new(NullSentenceProvider),
            audio: Box::new(NullAudioProvider),
        }
    }

    pub fn with_transliterator(mut self, transliterator: Box<dyn Transliterator>) -> Self {
        self.transliterator = transliterator;
        self
    }

    pub fn with_sentence_provider(mut self, sentences: Box<dyn SentenceProvider>) -> Self {
        self.sentences = sentences;
        self
    }

    pub fn with_audio_provider(mut self, audio: Box<dyn AudioProvider>) -> Self {
        self.audio = audio;
        self
    }

    /// Derive every configured field value for one source word.
    ///
    /// The record is only read here: to resolve the current kana value
    /// for romanization and to skip roles whose destination field the
    /// record does not carry. Nothing in this path can fail; external
    /// provider errors are logged and recovered as "no value".
    pub fn derive(
        &self,
        word: &str,
        record: &dyn Record,
        config: &FieldConfig,
    ) -> DerivedFieldSet {
        let mut derived = DerivedFieldSet::new();
        if word.is_empty() {
            return derived;
        }

        if wants(record, config, FieldRole::Furigana) {
            if let Some(ruby) = self.furigana.lookup(word) {
                derived.insert(FieldRole::Furigana, ruby);
            }
        }

        self.derive_dictionary_group(word, record, config, &mut derived);

        if wants(record, config, FieldRole::Sentences) {
            let sentences = self.sentences.sentences(word, config.number_of_sentences);
            if !sentences.is_empty() {
                derived.insert(FieldRole::Sentences, sentences.join(LINE_BREAK));
            }
        }

        if wants(record, config, FieldRole::Romaji) {
            let kana = resolvable_kana(&derived, record, config);
            if !kana.is_empty() {
                derived.insert(FieldRole::Romaji, self.transliterator.transliterate(&kana));
            }
        }

        if wants(record, config, FieldRole::Audio) && audio_destination_empty(record, config) {
            let kana = resolvable_kana(&derived, record, config);
            match self.audio.fetch(word, &kana) {
                Ok(Some(value)) => derived.insert(FieldRole::Audio, value),
                Ok(None) => tracing::debug!(%word, "no pronunciation audio available"),
                Err(e) => {
                    tracing::warn!(%word, error = %e, "audio fetch failed, continuing without audio");
                }
            }
        }

        derived
    }

    /// The definition, kana, word-type, and conjugation steps share one
    /// dictionary lookup; a word absent from the dictionary skips the
    /// whole group.
    fn derive_dictionary_group(
        &self,
        word: &str,
        record: &dyn Record,
        config: &FieldConfig,
        derived: &mut DerivedFieldSet,
    ) {
        let wants_definition = wants(record, config, FieldRole::Definition);
        let wants_alternates = wants(record, config, FieldRole::Alternates);
        let wants_kana = wants(record, config, FieldRole::Kana);
        let wants_type = wants(record, config, FieldRole::PartOfSpeech);
        let wants_any_form = ConjugatedForm::ALL
            .iter()
            .any(|form| wants(record, config, FieldRole::Conjugated(*form)));

        if !(wants_definition || wants_kana || wants_type || wants_any_form) {
            return;
        }

        let Some(entry) = self.dictionary.lookup(word) else {
            tracing::debug!(%word, "not in dictionary, skipping dictionary-derived fields");
            return;
        };

        if wants_definition {
            let mut senses = entry.glosses(config.number_of_defs);
            if wants_alternates {
                // Split: first sense alone, ordinal stripped, the rest
                // into the alternates destination
                if !senses.is_empty() {
                    let primary = senses.remove(0);
                    let primary = primary
                        .strip_prefix("1: ")
                        .map(str::to_string)
                        .unwrap_or(primary);
                    derived.insert(FieldRole::Definition, primary);
                    if !senses.is_empty() {
                        derived.insert(FieldRole::Alternates, senses.join(LINE_BREAK));
                    }
                }
            } else if !senses.is_empty() {
                derived.insert(FieldRole::Definition, senses.join(LINE_BREAK));
            }
        }

        if wants_kana {
            derived.insert(FieldRole::Kana, entry.reading.clone());
        }

        let class = classifier::classify(&entry.parts_of_speech);

        if wants_type {
            derived.insert(
                FieldRole::PartOfSpeech,
                classifier::type_label(word, &class),
            );
        }

        if wants_any_form {
            for (form, value) in conjugator::conjugate(word, &class) {
                if wants(record, config, FieldRole::Conjugated(form)) {
                    derived.insert(FieldRole::Conjugated(form), value);
                }
            }
        }
    }

    /// Derive and apply for one record. Returns whether the record
    /// changed.
    pub fn process_one(&self, record: &mut dyn Record, config: &FieldConfig) -> bool {
        let Some(raw) = record.get(&config.source_field) else {
            tracing::debug!(field = %config.source_field, "record has no source field");
            return false;
        };
        let word = DefaultPreprocessor.process(raw);
        if word.is_empty() {
            return false;
        }

        let derived = self.derive(&word, &*record, config);
        update::apply(record, &derived, config)
    }

    /// Run `process_one` over a batch; returns how many records
    /// changed.
    pub fn process_many<'a, I>(&self, records: I, config: &FieldConfig) -> usize
    where
        I: IntoIterator<Item = &'a mut dyn Record>,
    {
        let mut changed = 0;
        for record in records {
            if self.process_one(record, config) {
                changed += 1;
            }
        }
        tracing::info!(changed, "batch update finished");
        changed
    }
}

fn wants(record: &dyn Record, config: &FieldConfig, role: FieldRole) -> bool {
    config
        .destination(role)
        .is_some_and(|dest| record.has_field(dest))
}

/// The kana value usable for romanization and audio this pass: freshly
/// derived if present, else whatever the record currently holds.
fn resolvable_kana(derived: &DerivedFieldSet, record: &dyn Record, config: &FieldConfig) -> String {
    if let Some(kana) = derived.get(FieldRole::Kana) {
        return kana.to_string();
    }
    config
        .destination(FieldRole::Kana)
        .and_then(|dest| record.get(dest))
        .unwrap_or_default()
        .to_string()
}

fn audio_destination_empty(record: &dyn Record, config: &FieldConfig) -> bool {
    config
        .destination(FieldRole::Audio)
        .and_then(|dest| record.get(dest))
        .is_none_or(str::is_empty)
}
