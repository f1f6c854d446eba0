//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! Event 层把按键翻译成 Message，Update 层根据 Message 修改 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage：主消息
//!         mod content;        // ContentMessage：列表、搜索、表单
//!         mod modal;          // ModalMessage：登录、确认、提示弹窗
//!         mod navigation;     // NavigationMessage：左侧导航栏
//!
//!     子消息都包在 AppMessage 的对应变体里：
//!         AppMessage::Content(ContentMessage::Submit)
//!         AppMessage::Modal(ModalMessage::ToggleTab)
//!

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
