pub mod annotator;
pub mod classifier;
pub mod conjugator;
pub mod dictionary;
pub mod furigana;
pub mod loader;
mod pos_tags;
pub mod romaji;
pub mod sentences;

pub use annotator::JapaneseAnnotator;
pub use classifier::WordClassification;
pub use conjugator::ConjugatedForms;
pub use dictionary::{JmdictIndex, WordEntry};
pub use furigana::{FuriganaIndex, Ruby};
pub use loader::JmdictLoader;
pub use romaji::HepburnTransliterator;
pub use sentences::TsvSentenceCorpus;
