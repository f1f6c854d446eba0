//! Event board: search, category filter and analytics over rendered rows
//!
//! Filtering only flips a per-row display flag; rows stay on the board.

use serde::Serialize;

use crate::types::EventRow;

/// Which row fields a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Title only (organizer event list)
    TitleOnly,
    /// Title, organizer or location (student event grid)
    TitleOrganizerLocation,
}

/// Category filter button
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a filter button value (`"all"` or a category value)
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    fn matches(&self, row: &EventRow) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => row.category == *category,
        }
    }
}

/// Counts derived from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EventAnalytics {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
}

/// Snapshot of the rendered event rows with their display state.
#[derive(Debug, Clone, Default)]
pub struct EventBoard {
    rows: Vec<EventRow>,
    displayed: Vec<bool>,
}

impl EventBoard {
    #[must_use]
    pub fn new(rows: Vec<EventRow>) -> Self {
        let displayed = vec![true; rows.len()];
        Self { rows, displayed }
    }

    /// Replace all rows (a re-render); every row becomes displayed again
    pub fn replace_rows(&mut self, rows: Vec<EventRow>) {
        self.displayed = vec![true; rows.len()];
        self.rows = rows;
    }

    /// Append a freshly rendered row
    pub fn push(&mut self, row: EventRow) {
        self.rows.push(row);
        self.displayed.push(true);
    }

    #[must_use]
    pub fn rows(&self) -> &[EventRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn is_displayed(&self, index: usize) -> bool {
        self.displayed.get(index).copied().unwrap_or(false)
    }

    /// Displayed rows with their board index
    pub fn displayed_rows(&self) -> impl Iterator<Item = (usize, &EventRow)> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(index, _)| self.is_displayed(*index))
    }

    #[must_use]
    pub fn displayed_count(&self) -> usize {
        self.displayed.iter().filter(|shown| **shown).count()
    }

    /// Case-insensitive substring search; an empty term shows every row
    pub fn search(&mut self, term: &str, scope: SearchScope) {
        let term = term.to_lowercase();
        for (row, shown) in self.rows.iter().zip(self.displayed.iter_mut()) {
            *shown = row_matches(row, &term, scope);
        }
    }

    /// Show only rows of one category (or all)
    pub fn filter_category(&mut self, filter: &CategoryFilter) {
        for (row, shown) in self.rows.iter().zip(self.displayed.iter_mut()) {
            *shown = filter.matches(row);
        }
    }

    /// Totals over every row, displayed or not
    #[must_use]
    pub fn analytics(&self) -> EventAnalytics {
        let status_contains = |needle: &str| {
            self.rows
                .iter()
                .filter(|row| row.status.to_lowercase().contains(needle))
                .count()
        };

        EventAnalytics {
            total: self.rows.len(),
            pending: status_contains("pending"),
            approved: status_contains("approved"),
        }
    }
}

fn row_matches(row: &EventRow, term: &str, scope: SearchScope) -> bool {
    let contains = |text: Option<&str>| text.unwrap_or_default().to_lowercase().contains(term);

    match scope {
        SearchScope::TitleOnly => contains(Some(row.title.as_str())),
        SearchScope::TitleOrganizerLocation => {
            contains(Some(row.title.as_str()))
                || contains(row.organizer.as_deref())
                || contains(row.location.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::row;

    #[test]
    fn search_matches_title_case_insensitively() {
        let mut board = EventBoard::new(vec![
            row("1", "AI Workshop", "workshop", "Pending"),
            row("2", "Hackathon", "hackathon", "Approved"),
        ]);

        board.search("work", SearchScope::TitleOnly);
        assert!(board.is_displayed(0));
        assert!(!board.is_displayed(1));
        assert_eq!(board.len(), 2);

        board.search("", SearchScope::TitleOnly);
        assert_eq!(board.displayed_count(), 2);
    }

    #[test]
    fn student_search_checks_organizer_and_location() {
        let mut first = row("1", "Cloud Summit", "techevent", "Approved");
        first.location = Some("Delhi".into());
        let mut second = row("2", "Hackathon", "hackathon", "Approved");
        second.organizer = Some("InnovateTech".into());
        let mut board = EventBoard::new(vec![first, second]);

        board.search("DELHI", SearchScope::TitleOrganizerLocation);
        assert_eq!(board.displayed_rows().map(|(i, _)| i).collect::<Vec<_>>(), vec![0]);

        board.search("innovate", SearchScope::TitleOrganizerLocation);
        assert_eq!(board.displayed_rows().map(|(i, _)| i).collect::<Vec<_>>(), vec![1]);

        board.search("innovate", SearchScope::TitleOnly);
        assert_eq!(board.displayed_count(), 0);
    }

    #[test]
    fn category_filter_is_exact() {
        let mut board = EventBoard::new(vec![
            row("1", "AI Workshop", "workshop", "Approved"),
            row("2", "Hackathon", "hackathon", "Approved"),
            row("3", "Resume Workshop", "workshop", "Approved"),
        ]);

        board.filter_category(&CategoryFilter::from_value("workshop"));
        assert_eq!(board.displayed_count(), 2);
        assert!(!board.is_displayed(1));

        board.filter_category(&CategoryFilter::from_value("all"));
        assert_eq!(board.displayed_count(), 3);
    }

    #[test]
    fn analytics_count_all_rows_by_status() {
        let mut board = EventBoard::new(vec![
            row("1", "A", "workshop", "Pending"),
            row("2", "B", "workshop", "Approved"),
            row("3", "C", "workshop", "Pending review"),
            row("4", "D", "workshop", "Denied"),
        ]);
        board.search("zzz", SearchScope::TitleOnly);

        assert_eq!(
            board.analytics(),
            EventAnalytics {
                total: 4,
                pending: 2,
                approved: 1,
            }
        );
    }

    #[test]
    fn replacing_rows_resets_display() {
        let mut board = EventBoard::new(vec![row("1", "A", "workshop", "Pending")]);
        board.search("zzz", SearchScope::TitleOnly);
        board.replace_rows(vec![
            row("1", "A", "workshop", "Pending"),
            row("2", "B", "hackathon", "Pending"),
        ]);
        assert_eq!(board.displayed_count(), 2);

        board.push(row("3", "C", "internship", "Pending"));
        assert!(board.is_displayed(2));
    }
}
