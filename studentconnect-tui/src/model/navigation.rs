//! 导航与焦点状态

use studentconnect_core::types::NavLink;

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧导航面板
    #[default]
    Navigation,
    /// 右侧内容面板
    Content,
}

impl FocusPanel {
    /// 切换到另一个面板
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Navigation,
        }
    }

    pub fn is_navigation(self) -> bool {
        matches!(self, FocusPanel::Navigation)
    }

    pub fn is_content(self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}

/// 导航栏光标
///
/// 光标只是"正在看哪一项"，高亮的当前视图由 ViewController 决定，
/// 两者在按 Enter 时才同步。
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationState {
    /// 当前光标所在的链接索引
    pub selected: usize,
}

impl NavigationState {
    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }
}

/// 导航链接的图标
pub fn link_icon(link: &NavLink) -> &'static str {
    match link.key {
        "overview" => "▤",
        "create-event" => "+",
        "discover" => "◎",
        "profile" => "@",
        "about" => "i",
        "logout" => "⏻",
        _ => "•",
    }
}
