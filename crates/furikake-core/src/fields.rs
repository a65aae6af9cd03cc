use std::collections::BTreeMap;

/// Line-break separator for multi-line flashcard field values.
pub const LINE_BREAK: &str = "<br>";

/// Conjugated forms produced by the conjugation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConjugatedForm {
    Masu,
    Te,
    Past,
    Negative,
    Potential,
    Passive,
    Conditional,
    Volitional,
    Desire,
    Imperative,
}

impl ConjugatedForm {
    pub const ALL: [ConjugatedForm; 10] = [
        ConjugatedForm::Masu,
        ConjugatedForm::Te,
        ConjugatedForm::Past,
        ConjugatedForm::Negative,
        ConjugatedForm::Potential,
        ConjugatedForm::Passive,
        ConjugatedForm::Conditional,
        ConjugatedForm::Volitional,
        ConjugatedForm::Desire,
        ConjugatedForm::Imperative,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConjugatedForm::Masu => "masu",
            ConjugatedForm::Te => "te",
            ConjugatedForm::Past => "past",
            ConjugatedForm::Negative => "negative",
            ConjugatedForm::Potential => "potential",
            ConjugatedForm::Passive => "passive",
            ConjugatedForm::Conditional => "conditional",
            ConjugatedForm::Volitional => "volitional",
            ConjugatedForm::Desire => "desire",
            ConjugatedForm::Imperative => "imperative",
        }
    }
}

/// Logical field roles a derivation can produce.
///
/// `PitchAccent` is reserved: it can be mapped to a destination but no
/// derivation step produces a value for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldRole {
    Furigana,
    Kana,
    Romaji,
    PartOfSpeech,
    Definition,
    Alternates,
    Sentences,
    Audio,
    PitchAccent,
    Conjugated(ConjugatedForm),
}

/// How the update driver writes a derived value into its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Write only when the destination is currently empty. Used for
    /// values that must never override manual edits.
    FillIfEmpty,
    /// Write whenever the value differs from the destination. Used for
    /// conjugated forms, which track the current source word.
    ReplaceIfDifferent,
}

impl FieldRole {
    pub fn policy(&self) -> WritePolicy {
        match self {
            FieldRole::Conjugated(_) => WritePolicy::ReplaceIfDifferent,
            _ => WritePolicy::FillIfEmpty,
        }
    }
}

/// Maps logical field roles to destination field names.
pub trait FieldMapping: Send + Sync {
    /// Destination field name for a role, or None when unmapped.
    fn destination(&self, role: FieldRole) -> Option<&str>;
}

/// The output of one derivation pass: role → derived value.
///
/// Built fresh per invocation; absent roles mean "nothing derived",
/// never an empty string.
#[derive(Debug, Default, Clone)]
pub struct DerivedFieldSet {
    values: BTreeMap<FieldRole, String>,
}

impl DerivedFieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a derived value. Empty values are dropped so that
    /// downstream policy checks only ever see real content.
    pub fn insert(&mut self, role: FieldRole, value: String) {
        if !value.is_empty() {
            self.values.insert(role, value);
        }
    }

    pub fn get(&self, role: FieldRole) -> Option<&str> {
        self.values.get(&role).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldRole, &String)> {
        self.values.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
