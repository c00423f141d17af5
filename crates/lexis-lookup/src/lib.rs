//! Provider interfaces for the external lookup services used to enrich
//! dictionary entries.

mod definition;
mod translator;

pub use definition::{Definition, DefinitionError, DefinitionProvider};
pub use translator::{LanguageCode, TranslateError, Translation, Translator};

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}
