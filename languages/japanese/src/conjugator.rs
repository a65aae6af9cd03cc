//! Japanese verb and i-adjective conjugation.
//!
//! A pure classification → table transform: the word's category picks
//! a stem/suffix rule set, with hard-coded tables for the irregular
//! verbs 来る and する and the one-word godan exception 行く.

use std::collections::BTreeMap;

use furikake_core::fields::ConjugatedForm as Form;

use crate::classifier::WordClassification;

/// Sparse form → value map; only forms applicable to the word's
/// category are present. Alternative realizations of one form are
/// joined with "・".
pub type ConjugatedForms = BTreeMap<Form, String>;

/// Euphonic rows for one godan ending class.
#[derive(Debug, Clone, Copy)]
struct Godan {
    a: &'static str,
    i: &'static str,
    e: &'static str,
    o: &'static str,
    te: &'static str,
    past: &'static str,
}

impl Godan {
    const fn new(
        a: &'static str,
        i: &'static str,
        e: &'static str,
        o: &'static str,
        te: &'static str,
        past: &'static str,
    ) -> Self {
        Self { a, i, e, o, te, past }
    }
}

const U: Godan = Godan::new("わ", "い", "え", "お", "って", "った");
const TSU: Godan = Godan::new("た", "ち", "て", "と", "って", "った");
const RU: Godan = Godan::new("ら", "り", "れ", "ろ", "って", "った");
const KU: Godan = Godan::new("か", "き", "け", "こ", "いて", "いた");
const GU: Godan = Godan::new("が", "ぎ", "げ", "ご", "いで", "いだ");
const MU: Godan = Godan::new("ま", "み", "め", "も", "んで", "んだ");
const BU: Godan = Godan::new("ば", "び", "べ", "ぼ", "んで", "んだ");
const NU: Godan = Godan::new("な", "に", "ね", "の", "んで", "んだ");
const SU: Godan = Godan::new("さ", "し", "せ", "そ", "して", "した");
/// 行く: regular く rows, but the って/った euphonic change.
const IKU: Godan = Godan::new("か", "き", "け", "こ", "って", "った");

fn godan_row(ending: char, stem: &str) -> Option<&'static Godan> {
    let row = match ending {
        'う' => &U,
        'つ' => &TSU,
        'る' => &RU,
        'く' => {
            if stem == "行" {
                &IKU
            } else {
                &KU
            }
        }
        'ぐ' => &GU,
        'む' => &MU,
        'ぶ' => &BU,
        'ぬ' => &NU,
        'す' => &SU,
        _ => return None,
    };
    Some(row)
}

/// Conjugate a dictionary-form word according to its classification.
///
/// Words that are neither verbs nor i-adjectives yield no forms.
pub fn conjugate(word: &str, class: &WordClassification) -> ConjugatedForms {
    if class.verb {
        if word == "来る" {
            return kuru_forms();
        }
        if word == "する" {
            return suru_forms("");
        }
        if class.ichidan {
            return ichidan_forms(word);
        }
        if class.godan {
            return godan_forms(word);
        }
        if class.suru {
            // Lexicon entries are inconsistent about carrying the する suffix
            let stem = word.strip_suffix("する").unwrap_or(word);
            return suru_forms(stem);
        }
        ConjugatedForms::new()
    } else if class.i_adjective {
        i_adjective_forms(word)
    } else {
        ConjugatedForms::new()
    }
}

fn strip_last(word: &str) -> &str {
    match word.char_indices().last() {
        Some((idx, _)) => &word[..idx],
        None => word,
    }
}

fn ichidan_forms(word: &str) -> ConjugatedForms {
    let stem = strip_last(word);
    let mut forms = ConjugatedForms::new();
    forms.insert(Form::Masu, format!("{stem}ます"));
    forms.insert(Form::Te, format!("{stem}て"));
    forms.insert(Form::Past, format!("{stem}た"));
    forms.insert(Form::Negative, format!("{stem}ない・{stem}なかった"));
    forms.insert(Form::Potential, format!("{stem}れる"));
    forms.insert(Form::Passive, format!("{stem}られる"));
    forms.insert(Form::Conditional, format!("{stem}れば・{stem}たら"));
    forms.insert(Form::Volitional, format!("{stem}よう"));
    forms.insert(Form::Desire, format!("{stem}たい"));
    forms.insert(
        Form::Imperative,
        format!("{stem}ろ・{stem}てください・{stem}なさい"),
    );
    forms
}

fn godan_forms(word: &str) -> ConjugatedForms {
    let Some(ending) = word.chars().last() else {
        return ConjugatedForms::new();
    };
    let stem = strip_last(word);
    let Some(row) = godan_row(ending, stem) else {
        tracing::debug!(%word, "unrecognized godan ending, no forms produced");
        return ConjugatedForms::new();
    };
    let Godan { a, i, e, o, te, past } = *row;

    let mut forms = ConjugatedForms::new();
    forms.insert(Form::Masu, format!("{stem}{i}ます"));
    forms.insert(Form::Te, format!("{stem}{te}"));
    forms.insert(Form::Past, format!("{stem}{past}"));
    forms.insert(Form::Negative, format!("{stem}{a}ない・{stem}{a}なかった"));
    forms.insert(Form::Potential, format!("{stem}{e}る"));
    forms.insert(Form::Passive, format!("{stem}{a}れる"));
    forms.insert(Form::Conditional, format!("{stem}{e}ば・{stem}{past}ら"));
    forms.insert(Form::Volitional, format!("{stem}{o}う"));
    forms.insert(Form::Desire, format!("{stem}{i}たい"));
    forms.insert(
        Form::Imperative,
        format!("{stem}{e}・{stem}{te}ください・{stem}{i}なさい"),
    );
    forms
}

fn suru_forms(stem: &str) -> ConjugatedForms {
    let mut forms = ConjugatedForms::new();
    forms.insert(Form::Masu, format!("{stem}します"));
    forms.insert(Form::Te, format!("{stem}して"));
    forms.insert(Form::Past, format!("{stem}した"));
    forms.insert(Form::Negative, format!("{stem}しない・{stem}しなかった"));
    forms.insert(Form::Potential, format!("{stem}できる"));
    forms.insert(Form::Passive, format!("{stem}される"));
    forms.insert(Form::Conditional, format!("{stem}すれば・{stem}したら"));
    forms.insert(Form::Volitional, format!("{stem}しよう"));
    forms.insert(Form::Desire, format!("{stem}したい"));
    forms.insert(
        Form::Imperative,
        format!("{stem}しろ・{stem}してください・{stem}しなさい"),
    );
    forms
}

fn kuru_forms() -> ConjugatedForms {
    let mut forms = ConjugatedForms::new();
    forms.insert(Form::Masu, "来[き]ます".to_string());
    forms.insert(Form::Te, "来[き]て".to_string());
    forms.insert(Form::Past, "来[き]た".to_string());
    forms.insert(Form::Negative, "来[こ]ない・来[こ]なかった".to_string());
    forms.insert(Form::Potential, "来[こ]られる".to_string());
    forms.insert(Form::Passive, "来[こ]られる".to_string());
    forms.insert(Form::Conditional, "来[く]れば・来[き]たら".to_string());
    forms.insert(Form::Volitional, "来[こ]よう".to_string());
    forms.insert(Form::Desire, "来[き]たい".to_string());
    forms.insert(
        Form::Imperative,
        "来[こ]い・来[き]てください・来[き]なさい".to_string(),
    );
    forms
}

fn i_adjective_forms(word: &str) -> ConjugatedForms {
    // いい inflects on its classical stem
    let stem = if word == "いい" { "よ" } else { strip_last(word) };
    let mut forms = ConjugatedForms::new();
    forms.insert(Form::Te, format!("{stem}くて"));
    forms.insert(Form::Past, format!("{stem}かった"));
    forms.insert(Form::Negative, format!("{stem}くない・{stem}くなかった"));
    forms
}
