/// Text processing interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "en", "pt", etc.)
    fn language_code(&self) -> &str;

    /// Normalize text before tokenizing (case folding, etc.)
    fn normalize(&self, text: &str) -> String;

    /// Break text into word tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Common function words never added to the dictionary
    fn is_stopword(&self, word: &str) -> bool;

    /// Words never sent for enrichment, even when still untranslated
    fn skip_enhancement(&self, word: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
    pub position: usize,
}
