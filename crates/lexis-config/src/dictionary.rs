use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("public/dictionary.json")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("public/data")
}

fn default_file_count() -> u32 {
    100
}

/// Where the dictionary file and the numbered corpus live
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Directory holding `1.txt` .. `{file_count}.txt`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_file_count")]
    pub file_count: u32,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let path = env::var("DICTIONARY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_path());

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let file_count = env::var("DATA_FILE_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_file_count);

        Self {
            path,
            data_dir,
            file_count,
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            data_dir: default_data_dir(),
            file_count: default_file_count(),
        }
    }
}
