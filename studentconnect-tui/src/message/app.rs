//! 应用主消息枚举

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 欢迎页：打开登录弹窗
    OpenAuth,

    /// 返回上一页
    GoBack,

    /// 重新读取活动数据
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 切换深色 / 浅色主题
    ToggleTheme,

    /// 切换界面语言
    ToggleLanguage,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
