//! 屏幕与页面定义

use studentconnect_core::types::{ViewId, views};

use crate::i18n::t;

/// 顶层屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// 未登录：欢迎页 + 登录弹窗
    #[default]
    Welcome,
    /// 已登录：角色面板
    Dashboard,
}

/// 面板内的页面（与注册的视图一一对应）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    CreateEvent,
    Profile,
    Discover,
    EventDetails,
}

impl Page {
    /// 从视图 ID 解析页面
    pub fn from_view(id: &ViewId) -> Option<Page> {
        match id.as_str() {
            views::OVERVIEW => Some(Page::Overview),
            views::CREATE_EVENT => Some(Page::CreateEvent),
            views::PROFILE => Some(Page::Profile),
            views::DISCOVER => Some(Page::Discover),
            views::EVENT_DETAILS => Some(Page::EventDetails),
            _ => None,
        }
    }

    /// 获取页面标题
    pub fn title(self) -> &'static str {
        let texts = t();
        match self {
            Page::Overview => texts.nav.overview,
            Page::CreateEvent => texts.nav.create_event,
            Page::Profile => texts.nav.profile,
            Page::Discover => texts.nav.discover,
            Page::EventDetails => texts.nav.event_details,
        }
    }

    /// 是否为表单页（内容面板中的字符直接输入字段）
    pub fn is_form(self) -> bool {
        matches!(self, Page::CreateEvent | Page::Profile)
    }

    /// 是否为活动列表页
    pub fn is_board(self) -> bool {
        matches!(self, Page::Overview | Page::Discover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studentconnect_core::types::DashboardLayout;

    #[test]
    fn every_layout_view_has_a_page() {
        for layout in [DashboardLayout::organizer(), DashboardLayout::student()] {
            for view in &layout.views {
                assert!(Page::from_view(view).is_some(), "no page for {view}");
            }
        }
        assert_eq!(Page::from_view(&ViewId::new("settings")), None);
    }
}
