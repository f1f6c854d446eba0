//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入数据目录下按天滚动的文件。
//! 级别由 `RUST_LOG` 控制，默认 info；`log` 宏的输出同样会被收集。

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::backend::data_dir;

/// 日志文件名前缀
const LOG_FILE_PREFIX: &str = "studentconnect.log";

/// 初始化文件日志
///
/// 返回的 guard 必须保持到程序退出，否则缓冲中的日志会丢失。
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = data_dir().join("logs");
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}
