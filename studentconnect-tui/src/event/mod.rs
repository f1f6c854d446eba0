//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     handle_event 按以下顺序判断：
//!         1. 有弹窗打开      → handle_modal_keys
//!         2. 全局快捷键      → Quit / ToggleTheme / ToggleLanguage / ShowHelp
//!         3. 欢迎页          → Enter 打开登录弹窗
//!         4. 处于输入状态    → 字符直接交给内容面板（表单、搜索框）
//!         5. 焦点在导航栏    → handle_navigation_keys
//!         6. 焦点在内容区    → handle_content_keys（按当前页面分发）
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
