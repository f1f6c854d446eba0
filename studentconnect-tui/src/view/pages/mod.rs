//! 页面视图

pub mod create_event;
pub mod discover;
pub mod event_details;
pub mod overview;
pub mod profile;
pub mod welcome;

mod form;
