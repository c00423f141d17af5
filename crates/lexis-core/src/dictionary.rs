use std::collections::HashMap;
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::entry::Entry;
use crate::error::DictionaryError;

/// Word dictionary persisted as a single JSON object.
///
/// Keeps keys in insertion order, so a dictionary loaded from disk iterates
/// in the order the file listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<(String, Entry)>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.index.get(word).map(|&idx| &self.entries[idx].1)
    }

    /// Insert unless the word is already present. Returns whether it was inserted.
    pub fn insert_if_absent(&mut self, word: String, entry: Entry) -> bool {
        if self.index.contains_key(&word) {
            return false;
        }

        self.index.insert(word.clone(), self.entries.len());
        self.entries.push((word, entry));
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(word, entry)| (word.as_str(), entry))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    /// Reorder entries by ascending key
    pub fn sort_keys(&mut self) {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(idx, (word, _))| (word.clone(), idx))
            .collect();
    }

    /// Parse a dictionary from its JSON object form, keeping key order.
    /// Every value is accepted; only the top level must be an object.
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        Ok(raw
            .into_iter()
            .map(|(word, value)| (word, Entry::from(value)))
            .collect())
    }

    /// Two-space indented JSON with non-ASCII characters written as-is
    pub fn to_json_pretty(&self) -> Result<String, DictionaryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a dictionary file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        if !path.exists() {
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        tracing::info!("Loading dictionary from: {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_json(&json)?;
        tracing::info!("Loaded {} dictionary entries", dictionary.len());
        Ok(dictionary)
    }

    /// Load a dictionary file, starting empty when it does not exist yet.
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, DictionaryError> {
        match Self::load(path) {
            Err(DictionaryError::FileNotFound(_)) => {
                tracing::info!("No dictionary at {}, starting empty", path.display());
                Ok(Self::new())
            }
            result => result,
        }
    }

    /// Overwrite the dictionary file with the full mapping
    pub fn save(&self, path: &Path) -> Result<(), DictionaryError> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Saved {} entries to {}", self.len(), path.display());
        Ok(())
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, entry) in &self.entries {
            map.serialize_entry(word, entry)?;
        }
        map.end()
    }
}

impl FromIterator<(String, Entry)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, Entry)>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for (word, entry) in iter {
            dictionary.insert_if_absent(word, entry);
        }
        dictionary
    }
}

impl IntoIterator for Dictionary {
    type Item = (String, Entry);
    type IntoIter = std::vec::IntoIter<(String, Entry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
