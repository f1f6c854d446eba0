//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 文件日志
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     终端：
//!         init_terminal()     启用原始模式，进入备用屏幕
//!         restore_terminal()  禁用原始模式，离开备用屏幕，显示光标
//!
//!         无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!         否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     日志：
//!         init_logging() 在终端初始化之前调用。
//!         TUI 占用了 stdout，日志只能写文件：
//!
//!             <data_dir>/studentconnect/logs/studentconnect.log.YYYY-MM-DD
//!
//!         core 和 TUI 中的 log::info! 等宏会经由 tracing-log 转发到同一个文件。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{Term, init_terminal, restore_terminal};
