//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::traits::FileReader;
use crate::types::EventRow;

/// Build an event row with the common fields
pub fn row(id: &str, title: &str, category: &str, status: &str) -> EventRow {
    EventRow {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        date: "2025-10-05".to_string(),
        status: status.to_string(),
        organizer: None,
        location: None,
    }
}

// ===== MockFileReader =====

/// In-memory file contents keyed by path
pub struct MockFileReader {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MockFileReader {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn with_file(mut self, path: &str, bytes: &[u8]) -> Self {
        self.files.insert(PathBuf::from(path), bytes.to_vec());
        self
    }
}

#[async_trait]
impl FileReader for MockFileReader {
    async fn read(&self, path: &Path) -> CoreResult<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| CoreError::FileReadError(format!("{}: not found", path.display())))
    }
}
