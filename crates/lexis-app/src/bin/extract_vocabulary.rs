use anyhow::Context;
use clap::Parser;
use lexis_app::cli::ExtractArgs;
use lexis_app::logging::init_tracing;
use lexis_app::settings::load_config;
use lexis_core::dictionary::Dictionary;
use lexis_core::extract::{ExtractOptions, run_extraction};
use lexis_lang_english::EnglishProcessor;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = ExtractArgs::parse();

    let mut config = load_config(args.config.as_deref())?;
    args.apply(&mut config);
    init_tracing(config.json_logs());
    if let Some(path) = &args.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let dict_path = config.dictionary.path.clone();
    let dictionary = Dictionary::load_or_default(&dict_path)
        .with_context(|| format!("Failed to load dictionary {}", dict_path.display()))?;

    let options = ExtractOptions {
        data_dir: config.dictionary.data_dir.clone(),
        file_count: config.dictionary.file_count,
    };
    let (dictionary, report) = run_extraction(&EnglishProcessor::new(), &options, dictionary)
        .context("Failed to read corpus")?;

    dictionary
        .save(&dict_path)
        .with_context(|| format!("Failed to save dictionary {}", dict_path.display()))?;

    tracing::info!("Dictionary updated with {} new words", report.new_words.len());
    tracing::info!("Total words in dictionary: {}", report.total_words);

    Ok(())
}
