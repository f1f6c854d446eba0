//! 导航更新逻辑

use studentconnect_core::services::LinkOutcome;
use studentconnect_core::types::ExternalLink;

use crate::message::NavigationMessage;
use crate::model::App;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    let len = app.controller.links().len();

    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next(len);
        }

        NavigationMessage::Confirm => follow_selected(app),

        NavigationMessage::SelectFirst => {
            app.navigation.selected = 0;
        }

        NavigationMessage::SelectLast => {
            app.navigation.select_last(len);
        }
    }
}

/// 按 Enter 打开光标所在的链接
fn follow_selected(app: &mut App) {
    match app.controller.follow_link(app.navigation.selected) {
        LinkOutcome::Activated(view) => {
            log::debug!("Switched to {view}");
            app.selected_event = None;
            app.board.stop_search();
            app.clear_status(); // 切换页面时清除状态消息
        }
        LinkOutcome::External(ExternalLink::About) => app.modal.show_about(),
        LinkOutcome::External(ExternalLink::Logout) => app.modal.show_logout_confirm(),
        LinkOutcome::Missing => {
            log::debug!("No navigation link at {}", app.navigation.selected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::AppConfig;
    use crate::model::Page;
    use crate::model::state::Modal;
    use crate::update::test_support::test_app;
    use studentconnect_core::types::DashboardRole;

    fn organizer() -> AppConfig {
        AppConfig {
            role: Some(DashboardRole::Organizer),
            ..AppConfig::default()
        }
    }

    #[test]
    fn confirm_switches_page_and_keeps_one_view_visible() {
        let (mut app, _rt, _dir) = test_app(organizer());
        assert_eq!(app.current_page(), Some(Page::Overview));

        update(&mut app, NavigationMessage::SelectNext);
        update(&mut app, NavigationMessage::Confirm);
        assert_eq!(app.current_page(), Some(Page::CreateEvent));
        assert_eq!(app.controller.visible_count(), 1);
        assert_eq!(app.controller.active_link_index(), Some(1));
    }

    #[test]
    fn moving_the_cursor_does_not_switch_page() {
        let (mut app, _rt, _dir) = test_app(organizer());
        update(&mut app, NavigationMessage::SelectNext);
        update(&mut app, NavigationMessage::SelectNext);
        assert_eq!(app.current_page(), Some(Page::Overview));
        assert_eq!(app.navigation.selected, 2);
    }

    #[test]
    fn external_links_open_modals_without_leaving_the_page() {
        let (mut app, _rt, _dir) = test_app(organizer());
        update(&mut app, NavigationMessage::SelectLast);
        update(&mut app, NavigationMessage::Confirm);
        assert!(matches!(
            app.modal.active,
            Some(Modal::ConfirmLogout { .. })
        ));
        assert_eq!(app.current_page(), Some(Page::Overview));

        app.modal.close();
        update(&mut app, NavigationMessage::SelectPrevious);
        update(&mut app, NavigationMessage::Confirm);
        assert!(matches!(app.modal.active, Some(Modal::About)));
    }
}
