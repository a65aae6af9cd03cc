//! Kana → Hepburn romanization.

use unicode_normalization::UnicodeNormalization;

use furikake_core::providers::Transliterator;

pub struct HepburnTransliterator;

impl Transliterator for HepburnTransliterator {
    fn transliterate(&self, kana: &str) -> String {
        to_romaji(kana)
    }
}

fn to_romaji(kana: &str) -> String {
    // NFKC folds half-width kana, then katakana maps onto the
    // hiragana tables
    let folded: String = kana.nfkc().map(fold_katakana).collect();
    let chars: Vec<char> = folded.chars().collect();

    let mut out = String::with_capacity(kana.len());
    let mut geminate = false;
    let mut idx = 0;

    while idx < chars.len() {
        let c = chars[idx];

        if c == 'っ' {
            geminate = true;
            idx += 1;
            continue;
        }
        if c == 'ー' {
            if let Some(vowel) = out.chars().last().filter(|c| "aeiou".contains(*c)) {
                out.push(vowel);
            }
            idx += 1;
            continue;
        }
        if c == 'ん' {
            out.push('n');
            // apostrophe keeps a following vowel or y from merging
            if let Some((next, _)) = syllable_at(&chars, idx + 1) {
                if next.starts_with(|c| "aeiouy".contains(c)) {
                    out.push('\'');
                }
            }
            idx += 1;
            continue;
        }

        match syllable_at(&chars, idx) {
            Some((romaji, consumed)) => {
                if geminate {
                    if romaji.starts_with("ch") {
                        out.push('t');
                    } else if let Some(first) = romaji.chars().next().filter(|c| !"aeiou".contains(*c)) {
                        out.push(first);
                    }
                    geminate = false;
                }
                out.push_str(romaji);
                idx += consumed;
            }
            None => {
                geminate = false;
                out.push(c);
                idx += 1;
            }
        }
    }

    out
}

fn fold_katakana(c: char) -> char {
    if ('ァ'..='ヶ').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Romaji of the syllable starting at `idx`, digraphs first.
fn syllable_at(chars: &[char], idx: usize) -> Option<(&'static str, usize)> {
    let first = *chars.get(idx)?;
    if let Some(second) = chars.get(idx + 1) {
        if let Some(romaji) = digraph(first, *second) {
            return Some((romaji, 2));
        }
    }
    monograph(first).map(|romaji| (romaji, 1))
}

fn digraph(first: char, second: char) -> Option<&'static str> {
    let romaji = match (first, second) {
        ('き', 'ゃ') => "kya",
        ('き', 'ゅ') => "kyu",
        ('き', 'ょ') => "kyo",
        ('ぎ', 'ゃ') => "gya",
        ('ぎ', 'ゅ') => "gyu",
        ('ぎ', 'ょ') => "gyo",
        ('し', 'ゃ') => "sha",
        ('し', 'ゅ') => "shu",
        ('し', 'ょ') => "sho",
        ('し', 'ぇ') => "she",
        ('じ', 'ゃ') => "ja",
        ('じ', 'ゅ') => "ju",
        ('じ', 'ょ') => "jo",
        ('じ', 'ぇ') => "je",
        ('ち', 'ゃ') => "cha",
        ('ち', 'ゅ') => "chu",
        ('ち', 'ょ') => "cho",
        ('ち', 'ぇ') => "che",
        ('ぢ', 'ゃ') => "ja",
        ('ぢ', 'ゅ') => "ju",
        ('ぢ', 'ょ') => "jo",
        ('に', 'ゃ') => "nya",
        ('に', 'ゅ') => "nyu",
        ('に', 'ょ') => "nyo",
        ('ひ', 'ゃ') => "hya",
        ('ひ', 'ゅ') => "hyu",
        ('ひ', 'ょ') => "hyo",
        ('び', 'ゃ') => "bya",
        ('び', 'ゅ') => "byu",
        ('び', 'ょ') => "byo",
        ('ぴ', 'ゃ') => "pya",
        ('ぴ', 'ゅ') => "pyu",
        ('ぴ', 'ょ') => "pyo",
        ('み', 'ゃ') => "mya",
        ('み', 'ゅ') => "myu",
        ('み', 'ょ') => "myo",
        ('り', 'ゃ') => "rya",
        ('り', 'ゅ') => "ryu",
        ('り', 'ょ') => "ryo",
        ('ふ', 'ぁ') => "fa",
        ('ふ', 'ぃ') => "fi",
        ('ふ', 'ぇ') => "fe",
        ('ふ', 'ぉ') => "fo",
        ('う', 'ぃ') => "wi",
        ('う', 'ぇ') => "we",
        ('て', 'ぃ') => "ti",
        ('で', 'ぃ') => "di",
        _ => return None,
    };
    Some(romaji)
}

fn monograph(c: char) -> Option<&'static str> {
    let romaji = match c {
        'あ' | 'ぁ' => "a",
        'い' | 'ぃ' => "i",
        'う' | 'ぅ' => "u",
        'え' | 'ぇ' => "e",
        'お' | 'ぉ' => "o",
        'か' => "ka",
        'き' => "ki",
        'く' => "ku",
        'け' => "ke",
        'こ' => "ko",
        'が' => "ga",
        'ぎ' => "gi",
        'ぐ' => "gu",
        'げ' => "ge",
        'ご' => "go",
        'さ' => "sa",
        'し' => "shi",
        'す' => "su",
        'せ' => "se",
        'そ' => "so",
        'ざ' => "za",
        'じ' => "ji",
        'ず' => "zu",
        'ぜ' => "ze",
        'ぞ' => "zo",
        'た' => "ta",
        'ち' => "chi",
        'つ' => "tsu",
        'て' => "te",
        'と' => "to",
        'だ' => "da",
        'ぢ' => "ji",
        'づ' => "zu",
        'で' => "de",
        'ど' => "do",
        'な' => "na",
        'に' => "ni",
        'ぬ' => "nu",
        'ね' => "ne",
        'の' => "no",
        'は' => "ha",
        'ひ' => "hi",
        'ふ' => "fu",
        'へ' => "he",
        'ほ' => "ho",
        'ば' => "ba",
        'び' => "bi",
        'ぶ' => "bu",
        'べ' => "be",
        'ぼ' => "bo",
        'ぱ' => "pa",
        'ぴ' => "pi",
        'ぷ' => "pu",
        'ぺ' => "pe",
        'ぽ' => "po",
        'ま' => "ma",
        'み' => "mi",
        'む' => "mu",
        'め' => "me",
        'も' => "mo",
        'や' | 'ゃ' => "ya",
        'ゆ' | 'ゅ' => "yu",
        'よ' | 'ょ' => "yo",
        'ら' => "ra",
        'り' => "ri",
        'る' => "ru",
        'れ' => "re",
        'ろ' => "ro",
        'わ' => "wa",
        'ゐ' => "i",
        'ゑ' => "e",
        'を' => "o",
        'ゔ' => "vu",
        _ => return None,
    };
    Some(romaji)
}
