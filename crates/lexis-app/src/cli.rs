use std::path::PathBuf;

use clap::Parser;
use lexis_config::Config;

/// Seed the dictionary with placeholder entries for every new corpus word
#[derive(Debug, Parser)]
#[command(name = "extract-vocabulary", version)]
pub struct ExtractArgs {
    /// JSON config file (defaults plus environment otherwise)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dictionary file to update
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Directory holding the numbered corpus files
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Number of corpus files, read as 1.txt ..= N.txt
    #[arg(long)]
    pub files: Option<u32>,
}

impl ExtractArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.dictionary {
            config.dictionary.path = path.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.dictionary.data_dir = dir.clone();
        }
        if let Some(files) = self.files {
            config.dictionary.file_count = files;
        }
    }
}

/// Fill in translations and meanings for untranslated dictionary entries
#[derive(Debug, Parser)]
#[command(name = "enhance-dictionary", version)]
pub struct EnhanceArgs {
    /// JSON config file (defaults plus environment otherwise)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dictionary file to update
    #[arg(long)]
    pub dictionary: Option<PathBuf>,
}

impl EnhanceArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.dictionary {
            config.dictionary.path = path.clone();
        }
    }
}
