//! 跨页面导航意图（一次写入，一次读取）

use serde::{Deserialize, Serialize};

use super::view::{ViewId, views};

/// Value stored under an intent key when the intent is set
pub const INTENT_SET: &str = "true";

/// A one-shot instruction to pre-select a view on the next page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingNavigation {
    /// Open the create-event form
    CreateEvent,
    /// Open the profile page
    Profile,
}

impl PendingNavigation {
    /// All intents, in the order they are checked on load
    pub const ALL: [PendingNavigation; 2] = [PendingNavigation::CreateEvent, PendingNavigation::Profile];

    /// Key in the page-scoped string store
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::CreateEvent => "showCreateEvent",
            Self::Profile => "showProfile",
        }
    }

    /// View activated when this intent is consumed
    #[must_use]
    pub fn target_view(self) -> ViewId {
        match self {
            Self::CreateEvent => ViewId::new(views::CREATE_EVENT),
            Self::Profile => ViewId::new(views::PROFILE),
        }
    }
}
