//! Static event-detail catalog

use crate::error::{CoreError, CoreResult};
use crate::types::{CatalogEntry, EventDetails, Speaker};

/// Lookup table of event details keyed by event id.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    entries: Vec<CatalogEntry>,
}

impl EventCatalog {
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Load a catalog from a JSON array of entries
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entry and details for an event.
    ///
    /// Unknown ids and entries without details are both reported as
    /// `EventDetailsUnavailable`.
    pub fn details(&self, event_id: &str) -> CoreResult<(&CatalogEntry, &EventDetails)> {
        self.entries
            .iter()
            .find(|entry| entry.id == event_id)
            .and_then(|entry| entry.details.as_ref().map(|details| (entry, details)))
            .ok_or_else(|| CoreError::EventDetailsUnavailable(event_id.to_string()))
    }

    /// Catalog shipped with the student dashboard
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            CatalogEntry {
                id: "aiml-workshop-2025".into(),
                title: "AI & ML Revolution Workshop".into(),
                category: "workshop".into(),
                date: "Oct 5, 2025".into(),
                participants: "50+".into(),
                image: "https://images.unsplash.com/photo-1620712943543-2fd617224887".into(),
                details: Some(EventDetails {
                    description: "Dive deep into the world of Artificial Intelligence and Machine Learning. \
                                  This hands-on workshop covers the fundamentals, popular algorithms, \
                                  and building your own predictive model from scratch."
                        .into(),
                    topics: vec![
                        "Intro to Python for Data Science (NumPy, Pandas)".into(),
                        "Supervised vs. Unsupervised Learning".into(),
                        "Building a Linear Regression Model".into(),
                        "Understanding Neural Networks".into(),
                        "Deploying a Simple ML Model with Flask".into(),
                    ],
                    time: "10:00 AM - 4:00 PM IST".into(),
                    mode: "Online (Zoom)".into(),
                    price: "Free for students".into(),
                    speaker: Speaker {
                        name: "Dr. Arjun Desai".into(),
                        role: "Lead AI Scientist at TechNova".into(),
                        avatar: "https://randomuser.me/api/portraits/men/32.jpg".into(),
                    },
                }),
            },
            CatalogEntry {
                id: "hackathon-2025".into(),
                title: "Innovate India Hackathon".into(),
                category: "hackathon".into(),
                date: "Sep 20-22, 2025".into(),
                participants: "300+".into(),
                image: "https://images.unsplash.com/photo-1556761175-5973dc0f32e7".into(),
                details: Some(EventDetails {
                    description: "Join India's largest student hackathon! Solve real-world problems, \
                                  build innovative solutions, and network with industry experts."
                        .into(),
                    topics: vec![
                        "Full-stack Development".into(),
                        "Mobile App Development".into(),
                        "Data Science Challenges".into(),
                        "Cybersecurity".into(),
                        "Blockchain".into(),
                    ],
                    time: "Starts 9:00 AM IST".into(),
                    mode: "Hybrid (Online & Bangalore)".into(),
                    price: "Free".into(),
                    speaker: Speaker {
                        name: "Ms. Priya Sharma".into(),
                        role: "CTO, InnovateTech".into(),
                        avatar: "https://randomuser.me/api/portraits/women/44.jpg".into(),
                    },
                }),
            },
            CatalogEntry {
                id: "intern-2025".into(),
                title: "Frontend Developer Internship".into(),
                category: "internship".into(),
                date: "3-Month Role".into(),
                participants: "15 Applicants".into(),
                image: "https://images.unsplash.com/photo-1521737711867-e3b97375f902".into(),
                details: Some(EventDetails {
                    description: "Gain hands-on experience building user interfaces with a dynamic \
                                  tech startup. Work with React, Vue, or Angular on real projects."
                        .into(),
                    topics: vec![
                        "HTML/CSS/JavaScript".into(),
                        "React.js Ecosystem".into(),
                        "UI/UX Principles".into(),
                        "API Integration".into(),
                    ],
                    time: "Full-time (9 AM - 5 PM)".into(),
                    mode: "Remote".into(),
                    price: "Paid Internship".into(),
                    speaker: Speaker {
                        name: "Mr. Raj Kumar".into(),
                        role: "Lead Frontend Engineer".into(),
                        avatar: "https://randomuser.me/api/portraits/men/65.jpg".into(),
                    },
                }),
            },
            CatalogEntry {
                id: "cloud-summit-2025".into(),
                title: "Cloud Computing Summit".into(),
                category: "techevent".into(),
                date: "Nov 1, 2025".into(),
                participants: "500+".into(),
                image: "https://images.unsplash.com/photo-1587825140708-df876c12b44e".into(),
                details: Some(EventDetails {
                    description: "Explore the latest trends and innovations in cloud technology. \
                                  Expert speakers cover AWS, Azure, GCP, and serverless architectures."
                        .into(),
                    topics: vec![
                        "Serverless Computing".into(),
                        "Cloud Security".into(),
                        "DevOps on Cloud".into(),
                        "Containerization (Docker, Kubernetes)".into(),
                        "Multi-cloud Strategies".into(),
                    ],
                    time: "9:00 AM - 6:00 PM IST".into(),
                    mode: "Hybrid (Online & Delhi)".into(),
                    price: "₹500 (Student Discount Available)".into(),
                    speaker: Speaker {
                        name: "Dr. Anya Singh".into(),
                        role: "Cloud Architect, GlobalTech".into(),
                        avatar: "https://randomuser.me/api/portraits/women/72.jpg".into(),
                    },
                }),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_resolves_known_events() {
        let catalog = EventCatalog::builtin();
        let (entry, details) = catalog.details("hackathon-2025").unwrap();
        assert_eq!(entry.title, "Innovate India Hackathon");
        assert_eq!(details.speaker.name, "Ms. Priya Sharma");
        assert_eq!(details.topics.len(), 5);
    }

    #[test]
    fn unknown_or_detail_less_events_are_unavailable() {
        let catalog = EventCatalog::from_json(
            r#"[{"id":"meetup","title":"Meetup","category":"techevent","date":"TBD","participants":"10"}]"#,
        )
        .unwrap();

        let err = catalog.details("meetup").unwrap_err();
        assert_eq!(err.to_string(), "Details for this event are not available yet.");
        assert!(matches!(
            catalog.details("missing"),
            Err(CoreError::EventDetailsUnavailable(id)) if id == "missing"
        ));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        assert!(matches!(
            EventCatalog::from_json("{not json"),
            Err(CoreError::SerializationError(_))
        ));
    }
}
