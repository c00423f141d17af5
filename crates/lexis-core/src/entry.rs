use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single dictionary value.
///
/// A JSON object is an `Enhanced` entry and is kept exactly as written.
/// Anything else is a `Legacy` value; a legacy string equal to its own key
/// marks a word that has not been translated yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Entry {
    Legacy(Value),
    Enhanced(EnhancedEntry),
}

/// Structured record for a word, usually `{ "translation", "meaning" }`.
///
/// Backed by the raw JSON object so fields written by other tools, missing
/// fields, and non-string values all survive a load/save cycle untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnhancedEntry {
    fields: Map<String, Value>,
}

impl Entry {
    /// Untranslated marker for a freshly extracted word
    pub fn placeholder(word: &str) -> Self {
        Entry::Legacy(Value::String(word.to_string()))
    }

    pub fn is_placeholder_for(&self, word: &str) -> bool {
        matches!(self, Entry::Legacy(Value::String(value)) if value == word)
    }

    /// Migrate to the structured shape. A legacy value becomes the translation as-is.
    pub fn into_enhanced(self) -> EnhancedEntry {
        match self {
            Entry::Legacy(translation) => EnhancedEntry::from_parts(translation, String::new()),
            Entry::Enhanced(entry) => entry,
        }
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Entry::Enhanced(EnhancedEntry { fields }),
            other => Entry::Legacy(other),
        }
    }
}

impl From<Entry> for Value {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Legacy(value) => value,
            Entry::Enhanced(entry) => Value::Object(entry.fields),
        }
    }
}

impl EnhancedEntry {
    pub fn new(translation: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self::from_parts(Value::String(translation.into()), meaning.into())
    }

    fn from_parts(translation: Value, meaning: String) -> Self {
        let mut fields = Map::new();
        fields.insert("translation".to_string(), translation);
        fields.insert("meaning".to_string(), Value::String(meaning));
        Self { fields }
    }

    /// Entry used when no lookup produced anything
    pub fn fallback(word: &str) -> Self {
        Self::new(word, String::new())
    }

    /// `translation`, when present as a string
    pub fn translation(&self) -> Option<&str> {
        self.fields.get("translation").and_then(Value::as_str)
    }

    /// `meaning`, when present as a string
    pub fn meaning(&self) -> Option<&str> {
        self.fields.get("meaning").and_then(Value::as_str)
    }
}

impl From<EnhancedEntry> for Entry {
    fn from(entry: EnhancedEntry) -> Self {
        Entry::Enhanced(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shapes() {
        let legacy: Entry = serde_json::from_str(r#""casa""#).unwrap();
        assert_eq!(legacy, Entry::Legacy("casa".into()));

        let enhanced: Entry =
            serde_json::from_str(r#"{"translation": "gato", "meaning": "a cat"}"#).unwrap();
        assert_eq!(enhanced, Entry::Enhanced(EnhancedEntry::new("gato", "a cat")));

        let number: Entry = serde_json::from_str("42").unwrap();
        assert_eq!(number, Entry::Legacy(42.into()));
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(Entry::placeholder("cat").is_placeholder_for("cat"));
        assert!(!Entry::Legacy("gato".into()).is_placeholder_for("cat"));
        assert!(!Entry::Legacy(Value::Null).is_placeholder_for("null"));
        assert!(!Entry::Enhanced(EnhancedEntry::fallback("cat")).is_placeholder_for("cat"));
    }

    #[test]
    fn test_migration_is_total() {
        let migrated = Entry::Legacy("ser".into()).into_enhanced();
        assert_eq!(migrated.translation(), Some("ser"));
        assert_eq!(migrated.meaning(), Some(""));

        let kept = EnhancedEntry::new("gato", "a cat");
        assert_eq!(Entry::from(kept.clone()).into_enhanced(), kept);
    }

    #[test]
    fn test_non_string_scalar_migrates_verbatim() {
        let migrated = Entry::Legacy(3.into()).into_enhanced();

        assert_eq!(
            Value::from(Entry::from(migrated)),
            serde_json::json!({ "translation": 3, "meaning": "" })
        );
    }

    #[test]
    fn test_objects_round_trip_unchanged() {
        for json in [
            r#"{"translation":"gato","meaning":"","audio":"cat.mp3"}"#,
            r#"{"meaning":"feline"}"#,
            r#"{"translation":"gato","meaning":null}"#,
            r#"{}"#,
        ] {
            let entry: Entry = serde_json::from_str(json).unwrap();
            assert_eq!(serde_json::to_string(&entry).unwrap(), json);
        }
    }

    #[test]
    fn test_accessors_ignore_non_strings() {
        let entry: Entry = serde_json::from_str(r#"{"translation":"gato","meaning":null}"#).unwrap();
        let entry = entry.into_enhanced();

        assert_eq!(entry.translation(), Some("gato"));
        assert_eq!(entry.meaning(), None);
    }
}
