//! StudentConnect Core Library
//!
//! Provides the interaction state of the StudentConnect dashboards, including:
//! - View navigation (`ViewController`): which dashboard panel is visible
//! - Progressive form stepping and submission gating (`MultiStepForm`)
//! - Event board search / filter / analytics (`EventBoard`)
//! - Image preview decoding (`file_preview`)
//! - CSRF header construction (`csrf`)
//!
//! This library is frontend-independent; the page-scoped intent store and the
//! file reader are abstracted through traits so any frontend can plug in its own.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, ValidationError};
pub use services::{
    EventBoard, EventCatalog, FormStepSequence, MultiStepForm, PreviewSlot, SubmitControl,
    ViewController, ViewRegistry,
};
pub use traits::{FileReader, InMemoryIntentStore, IntentStore, TokioFileReader};
