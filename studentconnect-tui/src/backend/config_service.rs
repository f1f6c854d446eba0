//! 配置服务

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use studentconnect_core::types::DashboardRole;

use crate::view::theme::Theme;

/// 自动刷新配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoRefreshConfig {
    pub enabled: bool,
    /// 刷新间隔（秒）
    pub interval_secs: u64,
    /// 是否在状态栏显示刷新指示
    pub enable_indicator: bool,
    /// 用户最近有操作时暂停刷新
    pub pause_on_interaction: bool,
}

impl AutoRefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

impl Default for AutoRefreshConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 10,
            enable_indicator: true,
            pause_on_interaction: true,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 上次登录的面板角色（`None` 表示未登录）
    pub role: Option<DashboardRole>,
    pub theme: Theme,
    pub language: String,
    /// 活动数据文件，未设置时使用数据目录下的 events.json
    pub events_source: Option<PathBuf>,
    pub auto_refresh: AutoRefreshConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            role: None,
            theme: Theme::Dark,
            language: "en-US".to_string(),
            events_source: None,
            auto_refresh: AutoRefreshConfig::default(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("studentconnect")
}

/// 本地配置服务（config.json）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(config_dir().join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;

        // 配置损坏时回退到默认值
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("Ignoring corrupt config {}: {e}", self.path.display());
                Ok(AppConfig::default())
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        log::debug!("Saved config to {}", self.path.display());
        Ok(())
    }
}
