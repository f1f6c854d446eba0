//! 交互状态服务层

pub mod csrf;
mod event_board;
mod event_catalog;
pub mod file_preview;
mod form_stepper;
mod form_validation;
mod navigation_intent;
mod view_controller;

pub use csrf::{csrf_headers, resolve_token, token_from_cookie};
pub use event_board::{CategoryFilter, EventAnalytics, EventBoard, SearchScope};
pub use event_catalog::EventCatalog;
pub use file_preview::{PreviewSlot, SelectedFile, accept_image, read_as_data_url};
pub use form_stepper::{FormStepSequence, StepControls};
pub use form_validation::{
    DATE_FORMAT, MIN_PASSWORD_LEN, MultiStepForm, SubmitControl, SubmitOutcome, TIME_FORMAT,
    validate_event_date, validate_event_time, validate_passwords,
};
pub use navigation_intent::{persist_pending_navigation, take_pending_navigation};
pub use view_controller::{LinkOutcome, ViewController, ViewRegistry};
