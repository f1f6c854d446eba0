//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 所有状态变更都通过 Update 层来触发，View 层只读取。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod navigation;     // 焦点 + 导航栏光标
//!         mod page;           // 屏幕 / 页面
//!
//!         pub mod state;      // 页面数据状态（列表、表单、弹窗、自动刷新）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、视图切换（ViewController）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     "当前显示哪个页面" 不由 TUI 自己维护，而是交给核心库的 ViewController：
//!
//!         App {
//!             controller: ViewController,     // 唯一可见视图 + 高亮的导航链接
//!             navigation: NavigationState,    // 导航栏光标（只是"看着哪一项"）
//!         }
//!
//!     数据流：
//!         用户在导航栏按 Enter
//!             ↓
//!         update/navigation.rs 调用 controller.follow_link(selected)
//!             ↓
//!         LinkOutcome::Activated(view)  → 页面切换
//!         LinkOutcome::External(link)   → 打开"关于"弹窗 / 退出确认弹窗
//!             ↓
//!         view/layout.rs 根据 Page::from_view(controller.visible_view()) 渲染
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、页面重载（App::reload）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     表单提交成功后相当于一次整页刷新：
//!         - 从 IntentStore 取出意图（showCreateEvent / showProfile）
//!         - 重新创建 ViewController（有意图则显示目标视图，否则默认视图）
//!         - 表单恢复初始状态（提交按钮重新可用）
//!         - 重新读取活动数据
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Modal 枚举：
//!         - Auth { tab, mode, email, password, confirm, ... }   登录 / 注册
//!         - ConfirmLogout { confirm_focused }                  退出确认
//!         - About, Help                                        静态内容
//!         - Error { title, message }                           提示 / 错误
//!
//!     ModalState.active: Option<Modal>，None = 无弹窗
//!

mod app;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use navigation::{FocusPanel, NavigationState, link_icon};
pub use page::{Page, Screen};
