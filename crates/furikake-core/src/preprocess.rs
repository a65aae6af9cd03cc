pub trait Preprocessor {
    // Default flashcard-field preprocessor
    fn process(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix('<') {
                // HTML tag; an unterminated one swallows the remainder
                match after.find('>') {
                    Some(end) => rest = &after[end + 1..],
                    None => break,
                }
            } else if rest.starts_with("[sound:") {
                match rest.find(']') {
                    Some(end) => rest = &rest[end + 1..],
                    None => break,
                }
            } else {
                let Some(c) = rest.chars().next() else { break };
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }

        out.trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup_and_whitespace() {
        let p = DefaultPreprocessor;
        assert_eq!(p.process("  食べる "), "食べる");
        assert_eq!(p.process("<b>食べる</b>"), "食べる");
        assert_eq!(p.process("食べる[sound:taberu.mp3]"), "食べる");
        assert_eq!(p.process(""), "");
    }

    #[test]
    fn keeps_reading_brackets() {
        let p = DefaultPreprocessor;
        assert_eq!(p.process("食[た]べる"), "食[た]べる");
    }
}
