use std::path::PathBuf;

/// Failures loading or saving the dictionary file. All of these are fatal for a run.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures reading the text corpus
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
