//! Storage layer abstraction trait definition

mod file_reader;
mod intent_store;

pub use file_reader::{FileReader, TokioFileReader};
pub use intent_store::{InMemoryIntentStore, IntentStore};
