use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use lexis_config::Config;

/// Load a JSON config file. Missing sections and fields take their defaults.
fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let file =
        File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(config)
}

/// Config from an explicit file, otherwise defaults with environment overrides
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => load_config_file(path),
        None => Ok(Config::new()),
    }
}
