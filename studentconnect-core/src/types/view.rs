//! 视图与导航链接类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

/// Well-known view container ids.
pub mod views {
    /// Organizer landing view
    pub const OVERVIEW: &str = "dashboard-overview";
    /// Organizer progressive create-event form
    pub const CREATE_EVENT: &str = "create-event-view";
    /// Profile page (both roles)
    pub const PROFILE: &str = "profile-page";
    /// Student event grid
    pub const DISCOVER: &str = "discover-page";
    /// Student event details
    pub const EVENT_DETAILS: &str = "event-details-page";
}

/// Identifier of a view container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Destinations that leave the dashboard instead of switching views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalLink {
    /// About page (ordinary navigation)
    About,
    /// Logout (requires confirmation)
    Logout,
}

/// What a navigation link points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// A view inside the dashboard
    View(ViewId),
    /// An external destination
    External(ExternalLink),
}

/// Clickable control bound to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Stable key, used by frontends for labels and icons
    pub key: &'static str,
    pub target: NavTarget,
}

impl NavLink {
    #[must_use]
    pub fn view(key: &'static str, id: &str) -> Self {
        Self {
            key,
            target: NavTarget::View(ViewId::new(id)),
        }
    }

    #[must_use]
    pub fn external(key: &'static str, link: ExternalLink) -> Self {
        Self {
            key,
            target: NavTarget::External(link),
        }
    }

    /// Target view id, `None` for external links
    #[must_use]
    pub fn target_view(&self) -> Option<&ViewId> {
        match &self.target {
            NavTarget::View(id) => Some(id),
            NavTarget::External(_) => None,
        }
    }
}

/// Dashboard role (which layout to load)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardRole {
    #[default]
    Organizer,
    Student,
}

impl DashboardRole {
    /// Layout of this role's dashboard
    #[must_use]
    pub fn layout(self) -> DashboardLayout {
        match self {
            Self::Organizer => DashboardLayout::organizer(),
            Self::Student => DashboardLayout::student(),
        }
    }
}

/// Views, links and default view of a dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardLayout {
    pub views: Vec<ViewId>,
    pub links: Vec<NavLink>,
    pub default_view: ViewId,
}

impl DashboardLayout {
    /// Organizer dashboard
    #[must_use]
    pub fn organizer() -> Self {
        Self {
            views: vec![
                ViewId::new(views::OVERVIEW),
                ViewId::new(views::CREATE_EVENT),
                ViewId::new(views::PROFILE),
            ],
            links: vec![
                NavLink::view("overview", views::OVERVIEW),
                NavLink::view("create-event", views::CREATE_EVENT),
                NavLink::view("profile", views::PROFILE),
                NavLink::external("about", ExternalLink::About),
                NavLink::external("logout", ExternalLink::Logout),
            ],
            default_view: ViewId::new(views::OVERVIEW),
        }
    }

    /// Student dashboard
    ///
    /// The details view has no sidebar link; it is reached from the event grid.
    #[must_use]
    pub fn student() -> Self {
        Self {
            views: vec![
                ViewId::new(views::DISCOVER),
                ViewId::new(views::EVENT_DETAILS),
                ViewId::new(views::PROFILE),
            ],
            links: vec![
                NavLink::view("discover", views::DISCOVER),
                NavLink::view("profile", views::PROFILE),
                NavLink::external("about", ExternalLink::About),
                NavLink::external("logout", ExternalLink::Logout),
            ],
            default_view: ViewId::new(views::DISCOVER),
        }
    }
}
