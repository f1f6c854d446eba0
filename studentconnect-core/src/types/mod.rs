//! Type definition module

mod event;
mod form;
mod intent;
mod view;

pub use event::{CatalogEntry, EventCategory, EventDetails, EventRow, Speaker};
pub use form::{FieldMark, FormData, FormField};
pub use intent::{INTENT_SET, PendingNavigation};
pub use view::{DashboardLayout, DashboardRole, ExternalLink, NavLink, NavTarget, ViewId, views};
