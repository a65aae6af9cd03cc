use furikake_config::FieldConfig;
use furikake_core::error::ProviderError;
use furikake_core::fields::{ConjugatedForm, FieldRole};
use furikake_core::providers::AudioProvider;
use furikake_core::record::{MemoryRecord, Record};

use furikake_lang_japanese::{
    FuriganaIndex, JapaneseAnnotator, JmdictLoader, TsvSentenceCorpus,
};

const LEXICON: &str = r#"{
    "words": [
        {
            "kanji": [{"text": "食べる"}],
            "kana": [{"text": "たべる"}],
            "sense": [
                {
                    "partOfSpeech": ["v1", "vt"],
                    "gloss": [
                        {"lang": "eng", "text": "to eat"},
                        {"lang": "eng", "text": "to consume"}
                    ]
                },
                {
                    "partOfSpeech": ["v1", "vt"],
                    "gloss": [{"lang": "eng", "text": "to live on"}]
                },
                {
                    "partOfSpeech": ["v1", "vt"],
                    "gloss": [{"lang": "eng", "text": "to eat one's fill"}]
                }
            ]
        },
        {
            "kanji": [{"text": "勉強"}],
            "kana": [{"text": "べんきょう"}],
            "sense": [
                {
                    "partOfSpeech": ["n", "vs"],
                    "gloss": [{"lang": "eng", "text": "study"}]
                }
            ]
        },
        {
            "kanji": [{"text": "行く"}],
            "kana": [{"text": "いく"}],
            "sense": [
                {
                    "partOfSpeech": ["v5k-s", "vi"],
                    "gloss": [{"lang": "eng", "text": "to go"}]
                }
            ]
        },
        {
            "kanji": [{"text": "市"}],
            "kana": [{"text": "いち"}],
            "sense": [
                {
                    "partOfSpeech": ["n"],
                    "gloss": [{"lang": "eng", "text": "market"}]
                }
            ]
        },
        {
            "kanji": [{"text": "市"}],
            "kana": [{"text": "し"}],
            "sense": [
                {
                    "partOfSpeech": ["n"],
                    "gloss": [{"lang": "eng", "text": "city"}]
                }
            ]
        }
    ]
}"#;

const FURIGANA: &str = r#"[
    {
        "text": "食べる",
        "reading": "たべる",
        "furigana": [{"ruby": "食", "rt": "た"}, {"ruby": "べる"}]
    },
    {
        "text": "勉強",
        "reading": "べんきょう",
        "furigana": [{"ruby": "勉", "rt": "べん"}, {"ruby": "強", "rt": "きょう"}]
    }
]"#;

const SENTENCES: &str = "私はりんごを食べる。\tI eat an apple.\n彼はパンを食べた。\tHe ate bread.";

fn annotator() -> JapaneseAnnotator {
    let dictionary = JmdictLoader::load_from_json(LEXICON, "fixture").unwrap();
    let furigana = FuriganaIndex::from_json(FURIGANA, "fixture").unwrap();
    JapaneseAnnotator::new(dictionary, furigana)
        .with_sentence_provider(Box::new(TsvSentenceCorpus::from_tsv(SENTENCES)))
}

fn full_config() -> FieldConfig {
    FieldConfig {
        source_field: "Expression".to_string(),
        furigana_field: Some("Furigana".to_string()),
        kana_field: Some("Reading".to_string()),
        romaji_field: Some("Romaji".to_string()),
        type_field: Some("WordType".to_string()),
        definition_field: Some("Meaning".to_string()),
        alternates_field: Some("Alternates".to_string()),
        sentence_field: Some("Examples".to_string()),
        audio_field: Some("Audio".to_string()),
        masu_field: Some("MasuForm".to_string()),
        te_field: Some("TeForm".to_string()),
        ..FieldConfig::default()
    }
}

fn empty_record() -> MemoryRecord {
    MemoryRecord::from_fields([
        ("Expression", ""),
        ("Furigana", ""),
        ("Reading", ""),
        ("Romaji", ""),
        ("WordType", ""),
        ("Meaning", ""),
        ("Alternates", ""),
        ("Examples", ""),
        ("Audio", ""),
        ("MasuForm", ""),
        ("TeForm", ""),
    ])
}

struct StaticAudio(&'static str);

impl AudioProvider for StaticAudio {
    fn fetch(&self, _word: &str, _kana: &str) -> Result<Option<String>, ProviderError> {
        Ok(Some(self.0.to_string()))
    }
}

struct FailingAudio;

impl AudioProvider for FailingAudio {
    fn fetch(&self, _word: &str, _kana: &str) -> Result<Option<String>, ProviderError> {
        Err(ProviderError::Service("connection refused".to_string()))
    }
}

#[test]
fn unknown_word_derives_nothing() {
    let annotator = annotator();
    let derived = annotator.derive("存在しない", &empty_record(), &full_config());
    assert!(derived.is_empty());
}

#[test]
fn known_word_fills_the_whole_field_set() {
    let annotator = annotator();
    let derived = annotator.derive("食べる", &empty_record(), &full_config());

    assert_eq!(derived.get(FieldRole::Furigana), Some("食[た] べる"));
    assert_eq!(derived.get(FieldRole::Kana), Some("たべる"));
    assert_eq!(derived.get(FieldRole::Romaji), Some("taberu"));
    assert_eq!(
        derived.get(FieldRole::PartOfSpeech),
        Some("Transitive ichidan verb")
    );
    assert_eq!(derived.get(FieldRole::Definition), Some("to eat, to consume"));
    assert_eq!(
        derived.get(FieldRole::Alternates),
        Some("2: to live on<br>3: to eat one's fill")
    );
    // Containment match: the second corpus line has 食べた, not 食べる
    assert_eq!(
        derived.get(FieldRole::Sentences),
        Some("私はりんごを食べる。<br>I eat an apple.")
    );
    assert_eq!(
        derived.get(FieldRole::Conjugated(ConjugatedForm::Masu)),
        Some("食べます")
    );
    assert_eq!(
        derived.get(FieldRole::Conjugated(ConjugatedForm::Te)),
        Some("食べて")
    );
    // No destination configured for the other forms
    assert_eq!(derived.get(FieldRole::Conjugated(ConjugatedForm::Past)), None);
}

#[test]
fn without_alternates_destination_all_senses_go_to_the_meaning() {
    let annotator = annotator();
    let config = FieldConfig {
        alternates_field: None,
        ..full_config()
    };
    let derived = annotator.derive("食べる", &empty_record(), &config);
    assert_eq!(
        derived.get(FieldRole::Definition),
        Some("1: to eat, to consume<br>2: to live on<br>3: to eat one's fill")
    );
    assert_eq!(derived.get(FieldRole::Alternates), None);
}

#[test]
fn duplicate_lexicon_keys_keep_the_first_entry() {
    let annotator = annotator();
    let derived = annotator.derive("市", &empty_record(), &full_config());
    assert_eq!(derived.get(FieldRole::Kana), Some("いち"));
    assert_eq!(derived.get(FieldRole::Definition), Some("market"));
    assert_eq!(derived.get(FieldRole::Alternates), None);
}

#[test]
fn romaji_falls_back_to_the_record_kana() {
    let annotator = annotator();
    let mut record = empty_record();
    record.set("Reading", "こんにちは");

    // Word not in the lexicon, so no kana is derived this pass
    let derived = annotator.derive("こんにちは!", &record, &full_config());
    assert_eq!(derived.get(FieldRole::Kana), None);
    assert_eq!(derived.get(FieldRole::Romaji), Some("konnichiha"));
}

#[test]
fn missing_destination_fields_skip_their_derivations() {
    let annotator = annotator();
    let record = MemoryRecord::from_fields([("Expression", ""), ("Reading", "")]);
    let derived = annotator.derive("食べる", &record, &full_config());

    assert_eq!(derived.get(FieldRole::Kana), Some("たべる"));
    assert_eq!(derived.get(FieldRole::Furigana), None);
    assert_eq!(derived.get(FieldRole::Definition), None);
    assert_eq!(derived.get(FieldRole::Conjugated(ConjugatedForm::Te)), None);
}

#[test]
fn audio_is_skipped_when_the_destination_is_occupied() {
    let annotator = annotator().with_audio_provider(Box::new(StaticAudio("[sound:x.mp3]")));
    let mut record = empty_record();
    record.set("Audio", "[sound:manual.mp3]");

    let derived = annotator.derive("食べる", &record, &full_config());
    assert_eq!(derived.get(FieldRole::Audio), None);

    let derived = annotator.derive("食べる", &empty_record(), &full_config());
    assert_eq!(derived.get(FieldRole::Audio), Some("[sound:x.mp3]"));
}

#[test]
fn audio_failure_never_fails_the_derivation() {
    let annotator = annotator().with_audio_provider(Box::new(FailingAudio));
    let derived = annotator.derive("食べる", &empty_record(), &full_config());
    assert_eq!(derived.get(FieldRole::Audio), None);
    assert_eq!(derived.get(FieldRole::Kana), Some("たべる"));
}

#[test]
fn process_one_strips_markup_and_reports_change() {
    let annotator = annotator();
    let config = full_config();
    let mut record = empty_record();
    record.set("Expression", "<b>食べる</b>[sound:old.mp3]");

    assert!(annotator.process_one(&mut record, &config));
    assert_eq!(record.get("Reading"), Some("たべる"));
    assert_eq!(record.get("TeForm"), Some("食べて"));

    // Second pass: everything already filled, nothing to change
    assert!(!annotator.process_one(&mut record, &config));
}

#[test]
fn editing_the_source_word_refreshes_conjugations_only() {
    let annotator = annotator();
    let config = full_config();
    let mut record = empty_record();
    record.set("Expression", "食べる");
    assert!(annotator.process_one(&mut record, &config));

    record.set("Expression", "行く");
    assert!(annotator.process_one(&mut record, &config));

    // Fill-if-empty fields keep the first word's values
    assert_eq!(record.get("Reading"), Some("たべる"));
    // Conjugated forms track the current source word
    assert_eq!(record.get("TeForm"), Some("行って"));
    assert_eq!(record.get("MasuForm"), Some("行きます"));
}

#[test]
fn empty_source_is_a_no_op() {
    let annotator = annotator();
    let mut record = empty_record();
    assert!(!annotator.process_one(&mut record, &full_config()));
}

#[test]
fn process_many_counts_changed_records() {
    let annotator = annotator();
    let config = full_config();

    let mut eat = empty_record();
    eat.set("Expression", "食べる");
    let mut unknown = empty_record();
    unknown.set("Expression", "存在しない");
    let blank = empty_record();

    let mut records = [eat, unknown, blank];
    let changed = annotator.process_many(
        records.iter_mut().map(|r| r as &mut dyn Record),
        &config,
    );
    assert_eq!(changed, 1);
}
