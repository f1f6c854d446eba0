//! 活动仓库
//!
//! 使用 JSON 文件存储活动行（`EventRow` 数组）

use std::fs;
use std::path::PathBuf;

use studentconnect_core::types::EventRow;
use studentconnect_core::{CoreError, CoreResult};

/// 活动数据来源
pub trait EventRepository: Send {
    /// 读取全部活动
    fn load_all(&self) -> CoreResult<Vec<EventRow>>;

    /// 追加一条新活动
    fn append(&mut self, row: EventRow) -> CoreResult<()>;
}

/// 基于 JSON 文件的活动仓库
///
/// 文件不存在时返回内置的示例数据，首次写入时落盘。
pub struct JsonEventRepository {
    path: PathBuf,
}

impl JsonEventRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EventRepository for JsonEventRepository {
    fn load_all(&self) -> CoreResult<Vec<EventRow>> {
        if !self.path.exists() {
            return Ok(mock_events());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| CoreError::StorageError(e.to_string()))?;
        let rows: Vec<EventRow> = serde_json::from_str(&content)?;
        Ok(rows)
    }

    fn append(&mut self, row: EventRow) -> CoreResult<()> {
        let mut rows = self.load_all()?;
        rows.push(row);

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| CoreError::StorageError(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(&rows)?;
        fs::write(&self.path, content).map_err(|e| CoreError::StorageError(e.to_string()))?;

        log::info!("Stored {} events in {}", rows.len(), self.path.display());
        Ok(())
    }
}

/// 内存活动仓库
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryEventRepository {
    rows: Vec<EventRow>,
}

#[cfg(test)]
impl InMemoryEventRepository {
    pub fn new(rows: Vec<EventRow>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
impl EventRepository for InMemoryEventRepository {
    fn load_all(&self) -> CoreResult<Vec<EventRow>> {
        Ok(self.rows.clone())
    }

    fn append(&mut self, row: EventRow) -> CoreResult<()> {
        self.rows.push(row);
        Ok(())
    }
}

fn mock_row(
    id: &str,
    title: &str,
    category: &str,
    date: &str,
    status: &str,
    organizer: &str,
    location: &str,
) -> EventRow {
    EventRow {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        date: date.to_string(),
        status: status.to_string(),
        organizer: Some(organizer.to_string()),
        location: Some(location.to_string()),
    }
}

/// 内置示例活动
pub fn mock_events() -> Vec<EventRow> {
    vec![
        mock_row(
            "aiml-workshop-2025",
            "AI & ML Revolution Workshop",
            "workshop",
            "2025-10-05",
            "Approved",
            "TechNova",
            "Online (Zoom)",
        ),
        mock_row(
            "hackathon-2025",
            "Innovate India Hackathon",
            "hackathon",
            "2025-09-20",
            "Approved",
            "InnovateTech",
            "Bangalore",
        ),
        mock_row(
            "intern-2025",
            "Frontend Developer Internship",
            "internship",
            "2025-11-01",
            "Pending",
            "PixelCraft Studio",
            "Remote",
        ),
        mock_row(
            "cloud-summit-2025",
            "Cloud Computing Summit",
            "techevent",
            "2025-11-01",
            "Approved",
            "GlobalTech",
            "Delhi",
        ),
        mock_row(
            "design-sprint-2025",
            "UI/UX Design Sprint",
            "workshop",
            "2025-12-12",
            "Pending",
            "Campus Design Club",
            "Pune",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_serves_mock_events() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonEventRepository::new(dir.path().join("events.json"));
        assert_eq!(repo.load_all().unwrap(), mock_events());
    }

    #[test]
    fn appended_event_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let mut repo = JsonEventRepository::new(&path);

        let row = mock_row("new", "Rust Meetup", "techevent", "2099-01-01", "Pending", "Club", "Hall");
        repo.append(row.clone()).unwrap();

        let rows = JsonEventRepository::new(&path).load_all().unwrap();
        assert_eq!(rows.len(), mock_events().len() + 1);
        assert_eq!(rows.last(), Some(&row));
    }
}
