//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `overview.*`, `profile.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 欢迎页文本
    pub welcome: WelcomeTexts,
    /// 组织者概览页文本
    pub overview: OverviewTexts,
    /// 学生活动发现页文本
    pub discover: DiscoverTexts,
    /// 活动详情页文本
    pub details: DetailsTexts,
    /// 创建活动表单文本
    pub create_event: CreateEventTexts,
    /// 个人资料页文本
    pub profile: ProfileTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
    pub close: &'static str,
    pub back: &'static str,
    pub next: &'static str,
    pub prev: &'static str,
    pub search: &'static str,
    pub all: &'static str,
    pub error: &'static str,
    pub optional: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub open: &'static str,
    pub search: &'static str,
    pub filter: &'static str,
    pub next_step: &'static str,
    pub prev_step: &'static str,
    pub submit: &'static str,
    pub select_file: &'static str,
    pub theme: &'static str,
    pub language: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub login: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

pub struct NavTexts {
    pub title: &'static str,
    pub overview: &'static str,
    pub create_event: &'static str,
    pub profile: &'static str,
    pub discover: &'static str,
    pub event_details: &'static str,
    pub about: &'static str,
    pub logout: &'static str,
}

// ============================================================================
// 页面
// ============================================================================

pub struct WelcomeTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub login_hint: &'static str,
}

pub struct OverviewTexts {
    pub total: &'static str,
    pub pending: &'static str,
    pub approved: &'static str,
    pub my_events: &'static str,
    pub no_events: &'static str,
    pub col_title: &'static str,
    pub col_category: &'static str,
    pub col_date: &'static str,
    pub col_status: &'static str,
}

pub struct DiscoverTexts {
    pub search_placeholder: &'static str,
    pub filter: &'static str,
    pub no_events: &'static str,
    pub organizer: &'static str,
    pub location: &'static str,
}

pub struct DetailsTexts {
    pub about: &'static str,
    pub topics: &'static str,
    pub time: &'static str,
    pub mode: &'static str,
    pub price: &'static str,
    pub speaker: &'static str,
    pub participants: &'static str,
    pub date: &'static str,
    pub no_selection: &'static str,
}

pub struct CreateEventTexts {
    pub step: &'static str,
    pub step_basics: &'static str,
    pub step_schedule: &'static str,
    pub step_details: &'static str,
    pub step_media: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub event_link: &'static str,
    pub contact_email: &'static str,
    pub requirements: &'static str,
    pub prizes: &'static str,
    pub flyer: &'static str,
    pub flyer_hint: &'static str,
    pub preview_ready: &'static str,
}

pub struct ProfileTexts {
    pub name: &'static str,
    pub mobile: &'static str,
    pub avatar: &'static str,
    pub avatar_hint: &'static str,
    pub save: &'static str,
    pub saving: &'static str,
    pub preview_ready: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub auth: AuthModalTexts,
    pub logout_title: &'static str,
    pub logout_message: &'static str,
    pub about_title: &'static str,
    pub about_body: &'static str,
    pub help_title: &'static str,
    pub help_lines: &'static [(&'static str, &'static str)],
    pub notice_title: &'static str,
}

pub struct AuthModalTexts {
    pub title: &'static str,
    pub student: &'static str,
    pub organizer: &'static str,
    pub login: &'static str,
    pub signup: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub confirm_password: &'static str,
    pub show_password: &'static str,
    pub hide_password: &'static str,
    pub switch_tab: &'static str,
    pub switch_mode: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusBarTexts {
    pub refreshed: &'static str,
    pub auto_refresh: &'static str,
    pub auto_refresh_paused: &'static str,
    pub event_submitted: &'static str,
    pub profile_saved: &'static str,
    pub welcome_back: &'static str,
}
