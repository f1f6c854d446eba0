//! View navigation state machine
//!
//! Exactly one registered view is visible after every completed transition.
//! Sidebar links are highlighted to match: the first link targeting the
//! visible view is active, or none when no link targets it.

use crate::error::{CoreError, CoreResult};
use crate::types::{DashboardLayout, ExternalLink, NavLink, NavTarget, PendingNavigation, ViewId};

/// Ordered set of view ids resolved once per page load.
#[derive(Debug, Clone)]
pub struct ViewRegistry {
    views: Vec<ViewId>,
}

impl ViewRegistry {
    /// Resolve the registry, failing on duplicate ids
    pub fn resolve(views: impl IntoIterator<Item = ViewId>) -> CoreResult<Self> {
        let mut resolved: Vec<ViewId> = Vec::new();
        for view in views {
            if resolved.contains(&view) {
                return Err(CoreError::DuplicateView(view.to_string()));
            }
            resolved.push(view);
        }
        Ok(Self { views: resolved })
    }

    /// Index of a view
    #[must_use]
    pub fn position(&self, id: &ViewId) -> Option<usize> {
        self.views.iter().position(|view| view == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ViewId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewId> {
        self.views.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

/// Result of following a navigation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The link's view is now visible
    Activated(ViewId),
    /// The link leaves the dashboard; the caller performs the navigation
    External(ExternalLink),
    /// No link at that index, or its view is not registered
    Missing,
}

/// Visibility controller for the dashboard views.
#[derive(Debug, Clone)]
pub struct ViewController {
    registry: ViewRegistry,
    links: Vec<NavLink>,
    default_view: ViewId,
    visible: usize,
    active_link: Option<usize>,
}

impl ViewController {
    /// Build the controller for a page load.
    ///
    /// A pending navigation intent selects the initial view; without one (or
    /// when its view is not part of this layout) the layout's default view is
    /// shown.
    pub fn initialize(layout: DashboardLayout, pending: Option<PendingNavigation>) -> CoreResult<Self> {
        let DashboardLayout {
            views,
            links,
            default_view,
        } = layout;

        let registry = ViewRegistry::resolve(views)?;
        let Some(default_index) = registry.position(&default_view) else {
            return Err(CoreError::ViewNotRegistered(default_view.to_string()));
        };

        let mut controller = Self {
            registry,
            links,
            default_view,
            visible: default_index,
            active_link: None,
        };

        let initial = match pending {
            Some(intent) if controller.registry.contains(&intent.target_view()) => {
                log::info!("Opening {} from navigation intent", intent.target_view());
                intent.target_view()
            }
            Some(intent) => {
                log::warn!(
                    "Navigation intent {intent:?} targets unregistered view {}, showing default",
                    intent.target_view()
                );
                controller.default_view.clone()
            }
            None => controller.default_view.clone(),
        };
        controller.activate_view(&initial);

        Ok(controller)
    }

    /// Make `id` the visible view and highlight its link.
    ///
    /// Returns `false` (and changes nothing) when `id` is not registered.
    pub fn activate_view(&mut self, id: &ViewId) -> bool {
        let Some(index) = self.registry.position(id) else {
            log::debug!("No view registered as {id}, ignoring");
            return false;
        };

        self.active_link = self
            .links
            .iter()
            .position(|link| link.target_view() == Some(id));
        self.visible = index;
        true
    }

    /// Follow the link at `index`
    pub fn follow_link(&mut self, index: usize) -> LinkOutcome {
        let Some(link) = self.links.get(index) else {
            return LinkOutcome::Missing;
        };

        match &link.target {
            NavTarget::View(id) => {
                let id = id.clone();
                if self.activate_view(&id) {
                    LinkOutcome::Activated(id)
                } else {
                    LinkOutcome::Missing
                }
            }
            NavTarget::External(external) => LinkOutcome::External(*external),
        }
    }

    /// Currently visible view
    #[must_use]
    pub fn visible_view(&self) -> &ViewId {
        &self.registry.views[self.visible]
    }

    #[must_use]
    pub fn is_visible(&self, id: &ViewId) -> bool {
        self.visible_view() == id
    }

    /// Number of visible views (always 1)
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.registry.iter().filter(|view| self.is_visible(view)).count()
    }

    #[must_use]
    pub fn active_link_index(&self) -> Option<usize> {
        self.active_link
    }

    #[must_use]
    pub fn active_link(&self) -> Option<&NavLink> {
        self.active_link.and_then(|index| self.links.get(index))
    }

    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    #[must_use]
    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    #[must_use]
    pub fn default_view(&self) -> &ViewId {
        &self.default_view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::views;

    fn organizer() -> ViewController {
        ViewController::initialize(DashboardLayout::organizer(), None).unwrap()
    }

    #[test]
    fn every_registered_view_activates_exclusively() {
        let mut controller = organizer();
        let ids: Vec<ViewId> = controller.registry().iter().cloned().collect();

        for id in &ids {
            assert!(controller.activate_view(id));
            assert_eq!(controller.visible_count(), 1);
            assert!(controller.is_visible(id));
            assert_eq!(controller.active_link().and_then(NavLink::target_view), Some(id));
        }
    }

    #[test]
    fn view_without_link_leaves_no_active_link() {
        let mut controller =
            ViewController::initialize(DashboardLayout::student(), None).unwrap();
        assert!(controller.activate_view(&ViewId::new(views::EVENT_DETAILS)));
        assert_eq!(controller.visible_count(), 1);
        assert_eq!(controller.active_link_index(), None);
    }

    #[test]
    fn unregistered_view_is_ignored() {
        let mut controller = organizer();
        controller.activate_view(&ViewId::new(views::PROFILE));

        assert!(!controller.activate_view(&ViewId::new("settings-view")));
        assert!(controller.is_visible(&ViewId::new(views::PROFILE)));
        assert_eq!(controller.active_link_index(), Some(2));
    }

    #[test]
    fn initialize_without_intent_shows_default() {
        let controller = organizer();
        assert!(controller.is_visible(&ViewId::new(views::OVERVIEW)));
        assert_eq!(controller.active_link_index(), Some(0));
    }

    #[test]
    fn initialize_with_intent_shows_target() {
        let controller = ViewController::initialize(
            DashboardLayout::organizer(),
            Some(PendingNavigation::CreateEvent),
        )
        .unwrap();
        assert!(controller.is_visible(&ViewId::new(views::CREATE_EVENT)));
    }

    #[test]
    fn intent_for_missing_view_falls_back_to_default() {
        let controller = ViewController::initialize(
            DashboardLayout::student(),
            Some(PendingNavigation::CreateEvent),
        )
        .unwrap();
        assert!(controller.is_visible(&ViewId::new(views::DISCOVER)));
    }

    #[test]
    fn first_matching_link_wins() {
        let mut layout = DashboardLayout::organizer();
        layout.links.push(NavLink::view("quick-create", views::CREATE_EVENT));
        let mut controller = ViewController::initialize(layout, None).unwrap();

        controller.activate_view(&ViewId::new(views::CREATE_EVENT));
        assert_eq!(controller.active_link_index(), Some(1));
    }

    #[test]
    fn follow_link_reports_external_targets() {
        let mut controller = organizer();
        assert_eq!(
            controller.follow_link(1),
            LinkOutcome::Activated(ViewId::new(views::CREATE_EVENT))
        );
        assert_eq!(
            controller.follow_link(4),
            LinkOutcome::External(ExternalLink::Logout)
        );
        // External links do not change the visible view
        assert!(controller.is_visible(&ViewId::new(views::CREATE_EVENT)));
        assert_eq!(controller.follow_link(99), LinkOutcome::Missing);
    }

    #[test]
    fn layout_errors_fail_loudly() {
        let mut missing_default = DashboardLayout::organizer();
        missing_default.default_view = ViewId::new("nowhere");
        assert!(matches!(
            ViewController::initialize(missing_default, None),
            Err(CoreError::ViewNotRegistered(id)) if id == "nowhere"
        ));

        let mut duplicated = DashboardLayout::organizer();
        duplicated.views.push(ViewId::new(views::PROFILE));
        assert!(matches!(
            ViewController::initialize(duplicated, None),
            Err(CoreError::DuplicateView(_))
        ));
    }
}
