use furikake_core::fields::LINE_BREAK;

/// Normalized word categories, derived from raw part-of-speech text by
/// case-insensitive substring tests. Categories are independent and may
/// co-occur (a word can be both a noun and a suru verb).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordClassification {
    pub noun: bool,
    pub na_adjective: bool,
    pub i_adjective: bool,
    pub transitive: bool,
    pub intransitive: bool,
    pub verb: bool,
    pub ichidan: bool,
    pub godan: bool,
    pub suru: bool,
}

pub fn classify(raw_pos: &str) -> WordClassification {
    let pos = raw_pos.to_lowercase();
    WordClassification {
        noun: pos.contains("noun"),
        na_adjective: pos.contains("adjectival noun"),
        i_adjective: pos.contains("adjective (keiyoushi)"),
        // "transitive verb" is a substring of "intransitive verb", so
        // the marker must start the text or follow a space
        transitive: pos.starts_with("transitive verb") || pos.contains(" transitive verb"),
        intransitive: pos.contains("intransitive verb"),
        verb: pos.contains("verb"),
        ichidan: pos.contains("ichidan"),
        godan: pos.contains("godan"),
        suru: pos.contains("suru"),
    }
}

/// Human-readable word type label.
///
/// Matched category labels concatenate in fixed precedence, separated
/// by line breaks; the transitivity words join inline with the verb
/// kind that follows them.
pub fn type_label(word: &str, class: &WordClassification) -> String {
    let mut label = String::new();

    if class.noun {
        label.push_str("Noun");
        label.push_str(LINE_BREAK);
    }
    if class.na_adjective {
        label.push_str("na-adjective");
        label.push_str(LINE_BREAK);
    }
    if class.i_adjective {
        label.push_str("i-adjective");
        label.push_str(LINE_BREAK);
    }
    if class.transitive {
        label.push_str("Transitive ");
        if class.intransitive {
            label.push_str("and intransitive ");
        }
    } else if class.intransitive {
        label.push_str("Intransitive ");
    }
    if class.ichidan {
        label.push_str("ichidan verb");
        label.push_str(LINE_BREAK);
    }
    if class.godan {
        let ending: String = word.chars().last().map(String::from).unwrap_or_default();
        label.push_str(&format!("godan verb with '{ending}' ending"));
        label.push_str(LINE_BREAK);
    }
    if class.suru {
        label.push_str(&format!("suru verb {word}する"));
        label.push_str(LINE_BREAK);
    }

    let label = label.trim();
    label.strip_suffix(LINE_BREAK).unwrap_or(label).to_string()
}
