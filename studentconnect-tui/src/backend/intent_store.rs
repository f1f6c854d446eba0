//! 导航意图存储
//!
//! 使用 JSON 文件保存页面级的键值对，实现核心库的 IntentStore trait

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use studentconnect_core::traits::IntentStore;
use studentconnect_core::{CoreError, CoreResult};

/// 获取数据目录路径
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("studentconnect")
}

/// 基于 JSON 文件的意图存储
///
/// 每次写入都会落盘，保证"重新加载"后仍可读取。
pub struct FileIntentStore {
    path: PathBuf,
    /// 内存缓存
    values: HashMap<String, String>,
}

impl FileIntentStore {
    /// 打开存储文件（不存在时视为空）
    pub fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content =
                fs::read_to_string(&path).map_err(|e| CoreError::StorageError(e.to_string()))?;
            serde_json::from_str(&content)?
        } else {
            HashMap::new()
        };
        Ok(Self { path, values })
    }

    /// 打开存储文件，读取失败时从空存储开始
    ///
    /// 损坏的文件会在下一次写入时被覆盖。
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("Ignoring unreadable intent store {}: {e}", path.display());
                Self {
                    path,
                    values: HashMap::new(),
                }
            }
        }
    }

    /// 打开默认位置的存储
    pub fn open_default() -> Self {
        Self::open_or_empty(data_dir().join("intents.json"))
    }

    fn flush(&self) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| CoreError::StorageError(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content).map_err(|e| CoreError::StorageError(e.to_string()))
    }
}

impl IntentStore for FileIntentStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> CoreResult<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studentconnect_core::services::{persist_pending_navigation, take_pending_navigation};
    use studentconnect_core::types::PendingNavigation;

    #[test]
    fn intent_survives_reopening_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intents.json");

        let mut store = FileIntentStore::open(&path).unwrap();
        persist_pending_navigation(&mut store, PendingNavigation::CreateEvent).unwrap();

        let mut reopened = FileIntentStore::open(&path).unwrap();
        assert_eq!(
            take_pending_navigation(&mut reopened).unwrap(),
            Some(PendingNavigation::CreateEvent)
        );

        let mut again = FileIntentStore::open(&path).unwrap();
        assert_eq!(take_pending_navigation(&mut again).unwrap(), None);
    }

    #[test]
    fn corrupt_store_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intents.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            FileIntentStore::open(&path),
            Err(CoreError::SerializationError(_))
        ));
    }

    #[test]
    fn corrupt_store_falls_back_to_empty_and_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intents.json");
        fs::write(&path, "not json").unwrap();

        let mut store = FileIntentStore::open_or_empty(&path);
        assert_eq!(take_pending_navigation(&mut store).unwrap(), None);

        persist_pending_navigation(&mut store, PendingNavigation::Profile).unwrap();
        let mut reopened = FileIntentStore::open(&path).unwrap();
        assert_eq!(
            take_pending_navigation(&mut reopened).unwrap(),
            Some(PendingNavigation::Profile)
        );
    }
}
