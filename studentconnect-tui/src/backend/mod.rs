//!
//! src/backend/mod.rs
//! Backend 层：持久化与后台任务
//!
//! Backend 层与 UI 解耦，为 Update 层提供：
//!     - 配置的读写（ConfigService）
//!     - 导航意图的跨"页面重载"保存（IntentStore）
//!     - 活动数据的读取与新增（EventRepository）
//!     - 图片预览的异步读取（PreviewWorker）
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（config.json）
//!         mod event_repository;   // 活动仓库（events.json / 内存）
//!         mod intent_store;       // 导航意图存储（intents.json）
//!         mod preview;            // 图片预览读取（tokio 任务 + channel）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 页面重载
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     面板中的"提交"会触发一次页面重载：
//!         1. 提交前写入意图（如 showProfile）
//!         2. Update 层调用 App::reload()
//!         3. reload 从 IntentStore 取出并删除意图，重新创建 ViewController
//!
//!     因此意图存储必须在重载前后保持同一份数据，
//!     FileIntentStore 每次写入都会立即落盘。
//!

mod config_service;
mod event_repository;
mod intent_store;
mod preview;

pub use config_service::{AppConfig, AutoRefreshConfig, ConfigService, LocalConfigService};
#[cfg(test)]
pub use event_repository::InMemoryEventRepository;
pub use event_repository::{EventRepository, JsonEventRepository, mock_events};
pub use intent_store::{FileIntentStore, data_dir};
pub use preview::{PreviewTarget, PreviewWorker};

use studentconnect_core::traits::IntentStore;

/// Backend 服务集合
pub struct Backend {
    pub config_service: Box<dyn ConfigService>,
    pub intents: Box<dyn IntentStore>,
    pub events: Box<dyn EventRepository>,
    pub preview: PreviewWorker,
}

impl Backend {
    pub fn new(
        config_service: Box<dyn ConfigService>,
        intents: Box<dyn IntentStore>,
        events: Box<dyn EventRepository>,
        preview: PreviewWorker,
    ) -> Self {
        Self {
            config_service,
            intents,
            events,
            preview,
        }
    }
}
