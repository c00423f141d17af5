pub mod dictionary;
pub mod enhance;
pub mod entry;
pub mod error;
pub mod extract;
pub mod language;
pub mod lookup;

#[cfg(test)]
mod testing;
