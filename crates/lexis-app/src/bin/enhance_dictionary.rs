use anyhow::Context;
use clap::Parser;
use lexis_app::cli::EnhanceArgs;
use lexis_app::logging::init_tracing;
use lexis_app::settings::load_config;
use lexis_core::dictionary::Dictionary;
use lexis_core::enhance::{EnhanceOptions, run_enhancement};
use lexis_lang_english::{EnglishProcessor, FreeDictionaryClient, MyMemoryTranslator};
use lexis_lookup::{DefinitionProvider, Translator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = EnhanceArgs::parse();

    let mut config = load_config(args.config.as_deref())?;
    args.apply(&mut config);
    init_tracing(config.json_logs());
    if let Some(path) = &args.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    if !config.translator.provider.eq_ignore_ascii_case("mymemory") {
        anyhow::bail!("Unsupported translator provider: {}", config.translator.provider);
    }

    let dict_path = config.dictionary.path.clone();
    let dictionary = Dictionary::load(&dict_path)
        .with_context(|| format!("Failed to load dictionary {}", dict_path.display()))?;

    let timeout = config.network.request_timeout();
    let definitions =
        FreeDictionaryClient::new(config.network.definition_api_url.clone(), timeout)
            .context("Failed to build definition client")?;
    let translator = MyMemoryTranslator::new(config.translator.api_url.clone(), timeout)
        .context("Failed to build translation client")?;

    tracing::info!(
        "Using {} for definitions and {} for translations ({} -> {})",
        definitions.metadata().name,
        translator.metadata().name,
        config.translator.from_lang,
        config.translator.to_lang
    );

    let options = EnhanceOptions {
        from_lang: config.translator.from_lang.clone(),
        to_lang: config.translator.to_lang.clone(),
        ..EnhanceOptions::default()
    };
    let (dictionary, report) = run_enhancement(
        dictionary,
        &EnglishProcessor::new(),
        &definitions,
        &translator,
        &options,
    )
    .await;

    dictionary
        .save(&dict_path)
        .with_context(|| format!("Failed to save dictionary {}", dict_path.display()))?;

    tracing::info!("Dictionary updated with translations and meanings!");
    tracing::info!(
        "Looked up {} words: {} translated, {} with meanings, {} legacy entries converted",
        report.selected,
        report.translated,
        report.defined,
        report.migrated
    );
    tracing::info!("Total words: {}", report.total);

    Ok(())
}
