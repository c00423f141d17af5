use std::collections::HashMap;
use std::time::Duration;

use lexis_lookup::{DefinitionProvider, LanguageCode, Translator};

use crate::dictionary::Dictionary;
use crate::entry::{EnhancedEntry, Entry};
use crate::language::LanguageProcessor;
use crate::lookup::LookupOutcome;

/// Words processed between pacing pauses
pub const PACING_INTERVAL: usize = 50;
pub const PACING_PAUSE: Duration = Duration::from_secs(1);
pub const MEANING_MAX_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct EnhanceOptions {
    pub from_lang: LanguageCode,
    pub to_lang: LanguageCode,
    pub meaning_max_chars: usize,
    pub pacing_interval: usize,
    pub pacing_pause: Duration,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            from_lang: "en".to_string(),
            to_lang: "pt-BR".to_string(),
            meaning_max_chars: MEANING_MAX_CHARS,
            pacing_interval: PACING_INTERVAL,
            pacing_pause: PACING_PAUSE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnhanceReport {
    /// Placeholders sent for lookup
    pub selected: usize,
    /// Selected words that got a distinct translation
    pub translated: usize,
    /// Selected words that got a non-empty meaning
    pub defined: usize,
    /// Legacy entries converted without lookup
    pub migrated: usize,
    pub total: usize,
}

/// Untranslated words eligible for lookup, in dictionary order
pub fn select_placeholders(dictionary: &Dictionary, processor: &dyn LanguageProcessor) -> Vec<String> {
    dictionary
        .iter()
        .filter(|(word, entry)| entry.is_placeholder_for(word) && !processor.skip_enhancement(word))
        .map(|(word, _)| word.to_string())
        .collect()
}

/// First `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Look up one word. Lookup failures fall back to the word itself and an empty meaning.
pub async fn enhance_word(
    word: &str,
    definitions: &dyn DefinitionProvider,
    translator: &dyn Translator,
    options: &EnhanceOptions,
) -> EnhancedEntry {
    let definition =
        LookupOutcome::from_result("definition", word, definitions.define(word).await).found();
    if let Some(d) = &definition {
        tracing::debug!(
            "'{}' ({}): {}",
            word,
            d.part_of_speech.as_deref().unwrap_or("unknown"),
            d.text
        );
    }
    let meaning = definition
        .map(|d| truncate_chars(&d.text, options.meaning_max_chars))
        .unwrap_or_default();

    let translation = LookupOutcome::from_result(
        "translation",
        word,
        translator
            .translate(word, options.from_lang.clone(), options.to_lang.clone())
            .await,
    );
    let translation = match translation {
        LookupOutcome::Found(t) if t.text.to_lowercase() != word.to_lowercase() => {
            match t.confidence {
                Some(confidence) => tracing::debug!(
                    "'{}' -> '{}' via {} (match {:.2})",
                    word,
                    t.text,
                    t.provider,
                    confidence
                ),
                None => tracing::debug!("'{}' -> '{}' via {}", word, t.text, t.provider),
            }
            t.text
        }
        _ => word.to_string(),
    };

    EnhancedEntry::new(translation, meaning)
}

/// Rebuild the dictionary in its original key order with every entry structured.
///
/// Freshly enhanced words take their new entry, structured entries are kept
/// verbatim, and remaining legacy values are migrated. Returns the migration count.
pub fn merge(original: Dictionary, mut enhanced: HashMap<String, EnhancedEntry>) -> (Dictionary, usize) {
    let mut migrated = 0;

    let merged = original
        .into_iter()
        .map(|(word, entry)| {
            let entry = match (enhanced.remove(&word), entry) {
                (Some(fresh), _) => Entry::Enhanced(fresh),
                (None, entry @ Entry::Enhanced(_)) => entry,
                (None, legacy) => {
                    migrated += 1;
                    Entry::Enhanced(legacy.into_enhanced())
                }
            };
            (word, entry)
        })
        .collect();

    (merged, migrated)
}

/// Enhance every eligible placeholder, one word at a time, then merge
pub async fn run_enhancement(
    dictionary: Dictionary,
    processor: &dyn LanguageProcessor,
    definitions: &dyn DefinitionProvider,
    translator: &dyn Translator,
    options: &EnhanceOptions,
) -> (Dictionary, EnhanceReport) {
    let words = select_placeholders(&dictionary, processor);
    tracing::info!("Found {} words to translate...", words.len());

    let mut report = EnhanceReport {
        selected: words.len(),
        ..EnhanceReport::default()
    };
    let mut enhanced = HashMap::with_capacity(words.len());

    for (i, word) in words.iter().enumerate() {
        if options.pacing_interval > 0 && i > 0 && i % options.pacing_interval == 0 {
            tracing::info!("Processed {}/{} words...", i, words.len());
            tokio::time::sleep(options.pacing_pause).await;
        }

        let entry = enhance_word(word, definitions, translator, options).await;
        if entry.translation() != Some(word.as_str()) {
            report.translated += 1;
        }
        if entry.meaning().is_some_and(|meaning| !meaning.is_empty()) {
            report.defined += 1;
        }
        enhanced.insert(word.clone(), entry);
    }

    let (merged, migrated) = merge(dictionary, enhanced);
    report.migrated = migrated;
    report.total = merged.len();

    (merged, report)
}
