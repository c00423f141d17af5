use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::dictionary::Dictionary;
use crate::entry::Entry;
use crate::error::CorpusError;
use crate::language::LanguageProcessor;

/// Inputs for one extraction run
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub data_dir: PathBuf,
    pub file_count: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Distinct words found across the corpus
    pub unique_words: usize,
    /// Words inserted as placeholders this run, sorted
    pub new_words: Vec<String>,
    /// Dictionary size after the run
    pub total_words: usize,
}

/// `{data_dir}/1.txt` through `{data_dir}/{file_count}.txt`
pub fn corpus_paths(data_dir: &Path, file_count: u32) -> Vec<PathBuf> {
    (1..=file_count)
        .map(|i| data_dir.join(format!("{i}.txt")))
        .collect()
}

/// Distinct normalized tokens across every corpus file that exists
pub fn collect_vocabulary(
    processor: &dyn LanguageProcessor,
    paths: &[PathBuf],
) -> Result<BTreeSet<String>, CorpusError> {
    let mut words = BTreeSet::new();
    let mut files_read = 0;

    for path in paths {
        if !path.exists() {
            continue;
        }

        let text = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.clone(),
            source,
        })?;
        files_read += 1;

        let tokens = processor.tokenize(&text);
        tracing::debug!("{}: {} tokens", path.display(), tokens.len());
        words.extend(tokens.into_iter().map(|token| token.normalized));
    }

    if files_read == 0 {
        tracing::warn!("No corpus files found");
    }
    tracing::info!(
        "Read {} of {} corpus files, found {} unique words",
        files_read,
        paths.len(),
        words.len()
    );

    Ok(words)
}

/// Words not yet in the dictionary and not on the stoplist, ascending
pub fn select_new_words(
    vocabulary: &BTreeSet<String>,
    dictionary: &Dictionary,
    processor: &dyn LanguageProcessor,
) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|word| !dictionary.contains(word) && !processor.is_stopword(word))
        .cloned()
        .collect()
}

/// Insert each word as an untranslated placeholder. Returns how many were inserted.
pub fn add_placeholders(dictionary: &mut Dictionary, words: &[String]) -> usize {
    let mut inserted = 0;

    for (i, word) in words.iter().enumerate() {
        if i % 10 == 0 {
            tracing::debug!("Processing word {}/{}: {}", i + 1, words.len(), word);
        }

        if dictionary.insert_if_absent(word.clone(), Entry::placeholder(word)) {
            inserted += 1;
        }
    }

    inserted
}

/// Seed the dictionary with every new corpus word. Keys come back sorted.
pub fn run_extraction(
    processor: &dyn LanguageProcessor,
    options: &ExtractOptions,
    mut dictionary: Dictionary,
) -> Result<(Dictionary, ExtractReport), CorpusError> {
    tracing::info!(
        "Extracting {} words from {} text files...",
        processor.language_code(),
        options.file_count
    );
    let paths = corpus_paths(&options.data_dir, options.file_count);
    let vocabulary = collect_vocabulary(processor, &paths)?;

    let new_words = select_new_words(&vocabulary, &dictionary, processor);
    tracing::info!("New words to add: {}", new_words.len());

    add_placeholders(&mut dictionary, &new_words);
    dictionary.sort_keys();

    let report = ExtractReport {
        unique_words: vocabulary.len(),
        new_words,
        total_words: dictionary.len(),
    };

    Ok((dictionary, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SimpleProcessor;

    fn write_corpus(dir: &Path, files: &[(u32, &str)]) {
        for (i, text) in files {
            std::fs::write(dir.join(format!("{i}.txt")), text).unwrap();
        }
    }

    #[test]
    fn test_corpus_paths() {
        let paths = corpus_paths(Path::new("data"), 100);
        assert_eq!(paths.len(), 100);
        assert_eq!(paths[0], Path::new("data/1.txt"));
        assert_eq!(paths[99], Path::new("data/100.txt"));
    }

    #[test]
    fn test_missing_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_corpus(dir.path(), &[(3, "river stone"), (7, "Stone bridge")]);

        let paths = corpus_paths(dir.path(), 10);
        let words = collect_vocabulary(&SimpleProcessor, &paths).unwrap();

        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        assert_eq!(words, vec!["bridge", "river", "stone"]);
    }

    #[test]
    fn test_existing_and_stoplisted_words_are_not_new() {
        let vocabulary: BTreeSet<String> = ["the", "cat", "dog", "owl"]
            .into_iter()
            .map(String::from)
            .collect();
        let dictionary: Dictionary = [("dog".to_string(), Entry::Legacy("cão".into()))]
            .into_iter()
            .collect();

        let new_words = select_new_words(&vocabulary, &dictionary, &SimpleProcessor);
        assert_eq!(new_words, vec!["cat".to_string(), "owl".to_string()]);
    }

    #[test]
    fn test_add_placeholders_skips_existing_keys() {
        let mut dictionary: Dictionary = [("cat".to_string(), Entry::Legacy("gato".into()))]
            .into_iter()
            .collect();

        let inserted = add_placeholders(&mut dictionary, &["cat".into(), "sun".into()]);

        assert_eq!(inserted, 1);
        assert_eq!(dictionary.get("cat"), Some(&Entry::Legacy("gato".into())));
        assert!(dictionary.get("sun").unwrap().is_placeholder_for("sun"));
    }

    #[test]
    fn test_run_extraction_sorts_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write_corpus(dir.path(), &[(1, "zinc Apple the mango"), (2, "apple")]);
        let options = ExtractOptions {
            data_dir: dir.path().to_path_buf(),
            file_count: 100,
        };
        let existing: Dictionary = [("zinc".to_string(), Entry::Legacy("zinco".into()))]
            .into_iter()
            .collect();

        let (dictionary, report) = run_extraction(&SimpleProcessor, &options, existing).unwrap();

        assert_eq!(report.unique_words, 4);
        assert_eq!(report.new_words, vec!["apple".to_string(), "mango".to_string()]);
        assert_eq!(report.total_words, 3);
        assert_eq!(
            dictionary.words().collect::<Vec<_>>(),
            vec!["apple", "mango", "zinc"]
        );

        let (again, report) = run_extraction(&SimpleProcessor, &options, dictionary.clone()).unwrap();
        assert!(report.new_words.is_empty());
        assert_eq!(again, dictionary);
    }
}
