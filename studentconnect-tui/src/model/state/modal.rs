//! 弹窗/对话框状态

use studentconnect_core::types::DashboardRole;

use crate::i18n::t;

/// 登录弹窗的角色标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Student,
    Organizer,
}

impl AuthTab {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            AuthTab::Student => AuthTab::Organizer,
            AuthTab::Organizer => AuthTab::Student,
        }
    }

    /// 登录成功后进入的面板
    pub fn role(self) -> DashboardRole {
        match self {
            AuthTab::Student => DashboardRole::Student,
            AuthTab::Organizer => DashboardRole::Organizer,
        }
    }

    pub fn from_role(role: DashboardRole) -> Self {
        match role {
            DashboardRole::Student => AuthTab::Student,
            DashboardRole::Organizer => AuthTab::Organizer,
        }
    }
}

/// 登录 / 注册
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 登录 / 注册
    Auth {
        tab: AuthTab,
        mode: AuthMode,
        email: String,
        password: String,
        confirm: String,
        /// 0 = 邮箱, 1 = 密码, 2 = 确认密码
        focus: usize,
        show_password: bool,
        error: Option<String>,
    },

    /// 退出登录确认
    ConfirmLogout {
        /// true = 焦点在"确认"按钮
        confirm_focused: bool,
    },

    /// 关于
    About,

    /// 帮助
    Help,

    /// 提示 / 错误
    Error { title: String, message: String },
}

impl Modal {
    /// 登录弹窗当前显示的输入框数量
    ///
    /// 只有组织者注册需要确认密码。
    pub fn auth_field_count(tab: AuthTab, mode: AuthMode) -> usize {
        if tab == AuthTab::Organizer && mode == AuthMode::Signup {
            3
        } else {
            2
        }
    }
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// 显示登录弹窗
    pub fn show_auth(&mut self, tab: AuthTab) {
        self.active = Some(Modal::Auth {
            tab,
            mode: AuthMode::Login,
            email: String::new(),
            password: String::new(),
            confirm: String::new(),
            focus: 0,
            show_password: false,
            error: None,
        });
    }

    pub fn show_logout_confirm(&mut self) {
        self.active = Some(Modal::ConfirmLogout {
            confirm_focused: false,
        });
    }

    pub fn show_about(&mut self) {
        self.active = Some(Modal::About);
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }

    /// 显示提示（校验失败等）
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.show_error(t().modal.notice_title, message);
    }
}
