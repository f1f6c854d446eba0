//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod board;
mod form;
mod modal;
mod refresh;

pub use board::BoardState;
pub use form::{FormState, field_label, step_label};
pub use modal::{AuthMode, AuthTab, Modal, ModalState};
pub use refresh::AutoRefreshState;
