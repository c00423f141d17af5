pub mod definition;
pub mod processor;
pub mod stoplist;
pub mod translator;

pub use definition::FreeDictionaryClient;
pub use processor::EnglishProcessor;
pub use translator::MyMemoryTranslator;
