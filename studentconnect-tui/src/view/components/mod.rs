//! 通用组件：导航栏、状态栏、弹窗

pub mod modal;
pub mod navigation;
pub mod statusbar;
