//! 弹窗更新逻辑

use studentconnect_core::ValidationError;
use studentconnect_core::services::validate_passwords;

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::App;
use crate::model::state::{AuthMode, AuthTab, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Auth { .. } => handle_auth(app, msg),
        Modal::ConfirmLogout { .. } => handle_confirm_logout(app, msg),
        Modal::About | Modal::Help | Modal::Error { .. } => handle_simple_modal(app, msg),
    }
}

/// 处理登录 / 注册弹窗
fn handle_auth(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Auth {
        ref mut tab,
        ref mut mode,
        ref mut email,
        ref mut password,
        ref mut confirm,
        ref mut focus,
        ref mut show_password,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    let total_fields = Modal::auth_field_count(*tab, *mode);

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField => {
            *focus = (*focus + 1) % total_fields;
        }

        ModalMessage::PrevField => {
            if *focus == 0 {
                *focus = total_fields - 1;
            } else {
                *focus -= 1;
            }
        }

        ModalMessage::ToggleTab => {
            *tab = tab.toggle();
            *error = None;
            *focus = (*focus).min(Modal::auth_field_count(*tab, *mode) - 1);
        }

        ModalMessage::ToggleMode => {
            *mode = mode.toggle();
            *error = None;
            *focus = (*focus).min(Modal::auth_field_count(*tab, *mode) - 1);
        }

        ModalMessage::TogglePassword => {
            *show_password = !*show_password;
        }

        ModalMessage::Input(c) => {
            match *focus {
                0 => email.push(c),
                1 => password.push(c),
                _ => confirm.push(c),
            }
            *error = None;
        }

        ModalMessage::Backspace => match *focus {
            0 => {
                email.pop();
            }
            1 => {
                password.pop();
            }
            _ => {
                confirm.pop();
            }
        },

        ModalMessage::Confirm => {
            match check_credentials(*tab, *mode, email, password, confirm) {
                Ok(()) => {
                    let role = tab.role();
                    log::info!("Signed in as {role:?}");
                    app.modal.close();
                    match app.enter_dashboard(role) {
                        Ok(()) => app.set_status(t().status_bar.welcome_back),
                        Err(e) => app.report_error(&e),
                    }
                }
                Err(e) => {
                    log::debug!("Sign-in rejected: {e}");
                    *error = Some(e.to_string());
                }
            }
        }

        ModalMessage::ToggleChoice => {}
    }
}

/// 本地检查登录表单
///
/// 只有组织者注册需要确认密码。
fn check_credentials(
    tab: AuthTab,
    mode: AuthMode,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    if email.trim().is_empty() {
        missing.push("email".to_string());
    }
    if password.is_empty() {
        missing.push("password".to_string());
    }
    if !missing.is_empty() {
        return Err(ValidationError::RequiredFieldsMissing(missing));
    }

    if tab == AuthTab::Organizer && mode == AuthMode::Signup {
        validate_passwords(password, confirm)?;
    }
    Ok(())
}

/// 处理退出登录确认
fn handle_confirm_logout(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmLogout {
        ref mut confirm_focused,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::ToggleChoice => {
            *confirm_focused = !*confirm_focused;
        }

        ModalMessage::Confirm => {
            if *confirm_focused {
                log::info!("Logging out of {:?} dashboard", app.role);
                app.modal.close();
                app.config.role = None;
                app.save_config();
                app.should_quit = true;
            } else {
                app.modal.close();
            }
        }

        _ => {}
    }
}

/// 处理简单弹窗（关于、帮助、提示）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if let ModalMessage::Close | ModalMessage::Confirm = msg {
        app.modal.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::AppConfig;
    use crate::model::{Page, Screen};
    use crate::update::test_support::test_app;
    use studentconnect_core::types::DashboardRole;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, ModalMessage::Input(c));
        }
    }

    fn auth_error(app: &App) -> Option<String> {
        match &app.modal.active {
            Some(Modal::Auth { error, .. }) => error.clone(),
            _ => None,
        }
    }

    #[test]
    fn student_login_enters_discover_dashboard() {
        let (mut app, _rt, _dir) = test_app(AppConfig::default());
        app.modal.show_auth(AuthTab::Student);
        type_text(&mut app, "asha@college.edu");
        update(&mut app, ModalMessage::NextField);
        type_text(&mut app, "secret");

        update(&mut app, ModalMessage::Confirm);
        assert!(!app.modal.is_open());
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.current_page(), Some(Page::Discover));
        assert_eq!(app.config.role, Some(DashboardRole::Student));
    }

    #[test]
    fn empty_credentials_stay_in_the_modal() {
        let (mut app, _rt, _dir) = test_app(AppConfig::default());
        app.modal.show_auth(AuthTab::Student);
        update(&mut app, ModalMessage::Confirm);
        assert_eq!(
            auth_error(&app).as_deref(),
            Some("Please fill in all required fields.")
        );
        assert_eq!(app.screen, Screen::Welcome);
    }

    #[test]
    fn organizer_signup_checks_password_confirmation() {
        let (mut app, _rt, _dir) = test_app(AppConfig::default());
        app.modal.show_auth(AuthTab::Organizer);
        update(&mut app, ModalMessage::ToggleMode);
        type_text(&mut app, "club@college.edu");
        update(&mut app, ModalMessage::NextField);
        type_text(&mut app, "longpassword");
        update(&mut app, ModalMessage::NextField);
        type_text(&mut app, "longpassw0rd");

        update(&mut app, ModalMessage::Confirm);
        assert_eq!(
            auth_error(&app).as_deref(),
            Some("Passwords do not match. Please check and try again.")
        );

        for _ in 0..3 {
            update(&mut app, ModalMessage::Backspace);
        }
        type_text(&mut app, "ord");
        update(&mut app, ModalMessage::Confirm);
        assert_eq!(app.current_page(), Some(Page::Overview));
    }

    #[test]
    fn short_signup_password_is_rejected() {
        assert_eq!(
            check_credentials(AuthTab::Organizer, AuthMode::Signup, "a@b.c", "short", "short"),
            Err(ValidationError::PasswordTooShort { min: 8 })
        );
        // 登录和学生注册不检查长度
        assert!(check_credentials(AuthTab::Organizer, AuthMode::Login, "a@b.c", "short", "").is_ok());
        assert!(check_credentials(AuthTab::Student, AuthMode::Signup, "a@b.c", "short", "").is_ok());
    }

    #[test]
    fn switching_to_login_clamps_the_field_cursor() {
        let (mut app, _rt, _dir) = test_app(AppConfig::default());
        app.modal.show_auth(AuthTab::Organizer);
        update(&mut app, ModalMessage::ToggleMode);
        update(&mut app, ModalMessage::PrevField);
        update(&mut app, ModalMessage::ToggleMode);
        assert!(matches!(app.modal.active, Some(Modal::Auth { focus: 1, .. })));
    }

    #[test]
    fn confirmed_logout_forgets_the_role_and_quits() {
        let config = AppConfig {
            role: Some(DashboardRole::Organizer),
            ..AppConfig::default()
        };
        let (mut app, _rt, _dir) = test_app(config);

        app.modal.show_logout_confirm();
        update(&mut app, ModalMessage::Confirm);
        assert!(!app.should_quit);
        assert!(!app.modal.is_open());

        app.modal.show_logout_confirm();
        update(&mut app, ModalMessage::ToggleChoice);
        update(&mut app, ModalMessage::Confirm);
        assert!(app.should_quit);
        assert_eq!(app.backend.config_service.load().unwrap().role, None);
    }
}
