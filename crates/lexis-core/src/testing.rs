use crate::language::{LanguageProcessor, Token};

/// Minimal processor: lowercase, split on non-letters, "the" is a stopword,
/// "is" is skipped for enhancement.
pub struct SimpleProcessor;

impl LanguageProcessor for SimpleProcessor {
    fn language_code(&self) -> &str {
        "en"
    }

    fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        let normalized = self.normalize(text);
        normalized
            .split(|c: char| !c.is_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .enumerate()
            .map(|(position, w)| Token {
                surface: w.to_string(),
                normalized: w.to_string(),
                position,
            })
            .collect()
    }

    fn is_stopword(&self, word: &str) -> bool {
        word == "the"
    }

    fn skip_enhancement(&self, word: &str) -> bool {
        word == "is"
    }
}
