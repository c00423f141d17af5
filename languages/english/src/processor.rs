use std::sync::LazyLock;

use lexis_core::language::{LanguageProcessor, Token};
use regex::Regex;

use crate::stoplist;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]+\b").expect("word pattern is valid"));

/// English language processor
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishProcessor;

impl EnglishProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageProcessor for EnglishProcessor {
    fn language_code(&self) -> &str {
        "en"
    }

    fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
    }

    // Only whole runs of ASCII letters count; "café" yields nothing, "don't" yields "don" and "t".
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let normalized = self.normalize(text);

        WORD_PATTERN
            .find_iter(&normalized)
            .map(|m| Token {
                surface: m.as_str().to_string(),
                normalized: m.as_str().to_string(),
                position: m.start(),
            })
            .collect()
    }

    fn is_stopword(&self, word: &str) -> bool {
        stoplist::is_common_word(word)
    }

    fn skip_enhancement(&self, word: &str) -> bool {
        stoplist::is_auxiliary_verb(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        EnglishProcessor::new()
            .tokenize(text)
            .into_iter()
            .map(|t| t.normalized)
            .collect()
    }

    #[test]
    fn test_tokenize_folds_case() {
        assert_eq!(words("The Cat Sat"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_tokenize_word_boundaries() {
        assert_eq!(words("don't stop-me now, 42times x2"), vec!["don", "t", "stop", "me", "now"]);
        assert!(words("café naïve").is_empty());
        assert_eq!(words("under_score"), Vec::<String>::new());
    }

    #[test]
    fn test_token_positions() {
        let tokens = EnglishProcessor::new().tokenize("  Hello world");
        assert_eq!(tokens[0].position, 2);
        assert_eq!(tokens[1].position, 8);
    }

    #[test]
    fn test_stoplists() {
        let processor = EnglishProcessor::new();
        assert!(processor.is_stopword("into"));
        assert!(!processor.is_stopword("are"));
        assert!(processor.skip_enhancement("are"));
        assert!(!processor.skip_enhancement("cat"));
    }
}
