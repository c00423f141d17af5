use std::fmt::Display;

/// Result of one external lookup after errors have been absorbed
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome<T> {
    Found(T),
    Unavailable,
}

impl<T> LookupOutcome<T> {
    /// Absorb a provider error. The reason only shows up in debug logs.
    pub fn from_result<E: Display>(service: &str, word: &str, result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LookupOutcome::Found(value),
            Err(e) => {
                tracing::debug!("{} lookup unavailable for '{}': {}", service, word, e);
                LookupOutcome::Unavailable
            }
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            LookupOutcome::Found(value) => Some(value),
            LookupOutcome::Unavailable => None,
        }
    }
}
