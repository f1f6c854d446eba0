//! 活动相关类型定义

use serde::{Deserialize, Serialize};

/// Event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Hackathon,
    Workshop,
    Internship,
    #[serde(rename = "techevent")]
    TechEvent,
}

impl EventCategory {
    /// All categories, in display order
    #[must_use]
    pub fn all() -> &'static [EventCategory] {
        &[
            EventCategory::Hackathon,
            EventCategory::Workshop,
            EventCategory::Internship,
            EventCategory::TechEvent,
        ]
    }

    /// Value stored on rows and submitted with forms
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Hackathon => "hackathon",
            Self::Workshop => "workshop",
            Self::Internship => "internship",
            Self::TechEvent => "techevent",
        }
    }

    /// Human readable name
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Hackathon => "Hackathon",
            Self::Workshop => "Workshop",
            Self::Internship => "Internship",
            Self::TechEvent => "Tech Event",
        }
    }

    /// Parse from the stored value
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.value() == value)
    }
}

/// One rendered event row, handed over from the rendering boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    /// Status text as rendered ("Pending", "Approved", "Denied", ...)
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Event speaker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub role: String,
    pub avatar: String,
}

/// Extended event details shown on the details view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub description: String,
    pub topics: Vec<String>,
    pub time: String,
    pub mode: String,
    pub price: String,
    pub speaker: Speaker,
}

/// Static catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub participants: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub details: Option<EventDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_values_round_trip_through_serde() {
        let json = serde_json::to_string(&EventCategory::TechEvent).unwrap();
        assert_eq!(json, "\"techevent\"");
        assert_eq!(
            EventCategory::from_value("techevent"),
            Some(EventCategory::TechEvent)
        );
        assert_eq!(EventCategory::from_value("party"), None);
    }

    #[test]
    fn event_row_optional_fields_default_to_none() {
        let row: EventRow = serde_json::from_str(
            r#"{"id":"1","title":"AI Workshop","category":"workshop","date":"2025-10-05","status":"Pending"}"#,
        )
        .unwrap();
        assert_eq!(row.organizer, None);
        assert_eq!(row.location, None);
    }
}
