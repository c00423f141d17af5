/// Frequent function words kept out of the vocabulary
pub const COMMON_WORDS: &[&str] = &[
    "the", "a", "and", "to", "of", "in", "is", "that", "it", "for",
    "on", "with", "as", "was", "at", "be", "this", "but", "his", "by",
    "from", "not", "have", "had", "has", "or", "an", "they", "one", "all",
    "would", "there", "their", "what", "so", "up", "out", "if", "about", "can",
    "just", "who", "will", "than", "its", "over", "such", "into", "him",
];

/// Auxiliary verbs never sent for translation
pub const AUXILIARY_VERBS: &[&str] = &["is", "be", "was", "has", "have", "are", "am"];

pub fn is_common_word(word: &str) -> bool {
    COMMON_WORDS.contains(&word)
}

pub fn is_auxiliary_verb(word: &str) -> bool {
    AUXILIARY_VERBS.contains(&word)
}
