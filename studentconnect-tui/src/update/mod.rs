//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理（ViewController::follow_link）
//!         mod content;            // 内容面板子消息处理（列表、表单）
//!         mod modal;              // 弹窗子消息处理（登录、退出确认）
//!
//!
//!     除 Noop 外的每条消息都记为一次用户操作，
//!     用于暂停自动刷新（pause_on_interaction）。
//!
//!     表单提交、图片选择等需要 Backend 的操作在 content.rs 中完成：
//!         - 提交活动    → EventRepository::append，然后页面重载
//!         - 保存资料    → 写入 showProfile 意图，然后页面重载
//!         - 选择图片    → PreviewWorker::spawn，结果由主循环取回
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;
mod navigation;

use std::time::Instant;

use studentconnect_core::types::{ViewId, views};

use crate::i18n::{current_language, set_language, t};
use crate::message::AppMessage;
use crate::model::state::AuthTab;
use crate::model::{App, Page};
use crate::view::theme::set_theme;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    if !matches!(msg, AppMessage::Noop) {
        app.refresh.mark_interaction(Instant::now());
    }

    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::OpenAuth => {
            app.modal.show_auth(AuthTab::from_role(app.role));
        }

        AppMessage::GoBack => go_back(app),

        AppMessage::Refresh => match app.reload_rows() {
            Ok(()) => app.set_status(t().status_bar.refreshed),
            Err(e) => app.report_error(&e),
        },

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ToggleTheme => {
            app.config.theme = app.config.theme.toggle();
            set_theme(app.config.theme);
            app.save_config();
        }

        AppMessage::ToggleLanguage => {
            let next = current_language().next();
            set_language(next);
            app.config.language = next.code().to_string();
            app.save_config();
        }

        AppMessage::Noop => {}
    }
}

fn go_back(app: &mut App) {
    // 如果有弹窗打开，先关闭弹窗
    if app.modal.is_open() {
        app.modal.close();
        app.clear_status();
    } else if app.board.searching {
        app.board.stop_search();
    } else if app.current_page() == Some(Page::EventDetails) {
        // 详情页返回发现页
        app.controller.activate_view(&ViewId::new(views::DISCOVER));
        app.selected_event = None;
        app.clear_status();
    } else if app.focus.is_content() {
        app.focus = app.focus.toggle();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use studentconnect_core::traits::InMemoryIntentStore;
    use tempfile::TempDir;
    use tokio::runtime::Runtime;

    use crate::backend::{
        AppConfig, Backend, InMemoryEventRepository, LocalConfigService, PreviewWorker,
        mock_events,
    };
    use crate::model::App;

    /// 使用临时配置目录和内存存储的应用实例
    pub fn test_app(config: AppConfig) -> (App, Runtime, TempDir) {
        let runtime = Runtime::new().unwrap();
        let dir = TempDir::new().unwrap();
        let backend = Backend::new(
            Box::new(LocalConfigService::with_path(dir.path().join("config.json"))),
            Box::new(InMemoryIntentStore::new()),
            Box::new(InMemoryEventRepository::new(mock_events())),
            PreviewWorker::new(runtime.handle().clone()),
        );
        let app = App::new(backend, config).unwrap();
        (app, runtime, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::test_app;
    use super::*;
    use crate::backend::AppConfig;
    use crate::model::Screen;
    use crate::model::state::Modal;
    use studentconnect_core::types::DashboardRole;

    #[test]
    fn welcome_screen_opens_auth_on_the_current_role_tab() {
        let (mut app, _rt, _dir) = test_app(AppConfig::default());
        assert_eq!(app.screen, Screen::Welcome);

        update(&mut app, AppMessage::OpenAuth);
        assert!(matches!(
            app.modal.active,
            Some(Modal::Auth {
                tab: AuthTab::Organizer,
                ..
            })
        ));
    }

    #[test]
    fn go_back_closes_modal_before_anything_else() {
        let config = AppConfig {
            role: Some(DashboardRole::Student),
            ..AppConfig::default()
        };
        let (mut app, _rt, _dir) = test_app(config);
        app.modal.show_help();
        app.focus = app.focus.toggle();

        update(&mut app, AppMessage::GoBack);
        assert!(!app.modal.is_open());
        assert!(app.focus.is_content());

        update(&mut app, AppMessage::GoBack);
        assert!(app.focus.is_navigation());
    }

    #[test]
    fn theme_toggle_is_saved() {
        let config = AppConfig {
            role: Some(DashboardRole::Organizer),
            ..AppConfig::default()
        };
        let (mut app, _rt, _dir) = test_app(config);
        let before = app.config.theme;

        update(&mut app, AppMessage::ToggleTheme);
        assert_ne!(app.config.theme, before);

        let saved = app.backend.config_service.load().unwrap();
        assert_eq!(saved.theme, app.config.theme);
    }

    #[test]
    fn refresh_reports_status() {
        let config = AppConfig {
            role: Some(DashboardRole::Organizer),
            ..AppConfig::default()
        };
        let (mut app, _rt, _dir) = test_app(config);
        update(&mut app, AppMessage::Refresh);
        assert_eq!(app.status_message.as_deref(), Some(t().status_bar.refreshed));
    }
}
