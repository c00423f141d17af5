use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::network::NetworkConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod network;
pub mod translator;

fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub network: NetworkConfig,
    pub translator: TranslatorConfig,

    /// Log output: "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| default_log_format());

        Config {
            dictionary: DictionaryConfig::new(),
            network: NetworkConfig::new(),
            translator: TranslatorConfig::new(),

            log_format,
        }
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            network: NetworkConfig::default(),
            translator: TranslatorConfig::default(),
            log_format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_layout() {
        let config = Config::default();

        assert_eq!(
            config.dictionary.path,
            std::path::PathBuf::from("public/dictionary.json")
        );
        assert_eq!(config.dictionary.data_dir, std::path::PathBuf::from("public/data"));
        assert_eq!(config.dictionary.file_count, 100);
        assert_eq!(config.network.request_timeout_secs, 5);
        assert_eq!(config.translator.from_lang, "en");
        assert_eq!(config.translator.to_lang, "pt-BR");
        assert!(!config.json_logs());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(
            r#"{ "dictionary": { "path": "out/dict.json" }, "log_format": "JSON" }"#,
        )
        .unwrap();

        assert_eq!(config.dictionary.path, std::path::PathBuf::from("out/dict.json"));
        assert_eq!(config.dictionary.data_dir, std::path::PathBuf::from("public/data"));
        assert_eq!(
            config.network.definition_api_url,
            "https://api.dictionaryapi.dev/api/v2/entries/en"
        );
        assert!(config.json_logs());
    }
}
