//! StudentConnect TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置、意图存储、活动数据、图片预览 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 文件日志（终端被 TUI 占用）
//!     load config             // 主题、语言、记住的角色
//!     Runtime::new()          // 图片预览读取用的 tokio 运行时
//!     App::new()              // 有角色时直接进入面板，否则停在欢迎页
//!     init_terminal()
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use backend::{
    Backend, ConfigService, FileIntentStore, JsonEventRepository, LocalConfigService,
    PreviewWorker, data_dir,
};
use i18n::{Language, set_language};
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::set_theme;

/// 默认活动数据文件
const EVENTS_FILE: &str = "events.json";

fn main() -> Result<(), anyhow::Error> {
    // 0. 日志（guard 必须活到程序结束）
    let _log_guard = init_logging()?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting StudentConnect TUI");

    // 1. 读取配置
    let config_service = LocalConfigService::new();
    let config = config_service.load()?;
    set_theme(config.theme);
    match Language::from_code(&config.language) {
        Some(lang) => set_language(lang),
        None => log::warn!("Unknown language {}, using default", config.language),
    }

    // 2. 后端服务
    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let events_path = config
        .events_source
        .clone()
        .unwrap_or_else(|| data_dir().join(EVENTS_FILE));
    log::info!("Reading events from {}", events_path.display());

    let backend = Backend::new(
        Box::new(config_service),
        Box::new(FileIntentStore::open_default()),
        Box::new(JsonEventRepository::new(events_path)),
        PreviewWorker::new(runtime.handle().clone()),
    );

    // 3. 创建应用实例
    let mut app = model::App::new(backend, config).context("Failed to load dashboard")?;

    // 4. 运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    }
    result
}
