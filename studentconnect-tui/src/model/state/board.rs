//! 活动列表状态（组织者表格 / 学生卡片）

use studentconnect_core::services::{CategoryFilter, EventBoard, SearchScope};
use studentconnect_core::types::{EventCategory, EventRow};

/// 最近一次作用于列表的操作，刷新数据后重新套用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LastOp {
    #[default]
    None,
    Search,
    Filter,
}

/// 活动列表页面状态
#[derive(Debug, Default)]
pub struct BoardState {
    pub board: EventBoard,
    /// 在"显示中的行"里的光标
    pub selected: usize,
    /// 搜索词
    pub search: String,
    /// 是否正在输入搜索词
    pub searching: bool,
    pub filter: CategoryFilter,
    scope: Option<SearchScope>,
    last_op: LastOp,
}

impl BoardState {
    pub fn new(rows: Vec<EventRow>) -> Self {
        Self {
            board: EventBoard::new(rows),
            ..Self::default()
        }
    }

    /// 替换数据（刷新），保留当前的搜索或筛选
    pub fn replace_rows(&mut self, rows: Vec<EventRow>) {
        self.board.replace_rows(rows);
        match self.last_op {
            LastOp::None => {}
            LastOp::Search => self.apply_search(),
            LastOp::Filter => self.board.filter_category(&self.filter),
        }
        self.clamp_selection();
    }

    /// 开始输入搜索词
    pub fn start_search(&mut self, scope: SearchScope) {
        self.searching = true;
        self.scope = Some(scope);
    }

    pub fn stop_search(&mut self) {
        self.searching = false;
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search.push(ch);
        self.apply_search();
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
        self.apply_search();
    }

    fn apply_search(&mut self) {
        let scope = self.scope.unwrap_or(SearchScope::TitleOnly);
        self.board.search(&self.search, scope);
        self.last_op = LastOp::Search;
        self.selected = 0;
    }

    /// 所有筛选按钮（"全部" + 各类别）
    pub fn filter_options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(
                EventCategory::all()
                    .iter()
                    .map(|c| CategoryFilter::Only(c.value().to_string())),
            )
            .collect()
    }

    /// 循环切换类别筛选
    pub fn cycle_filter(&mut self, forward: bool) {
        let options = Self::filter_options();
        let current = options.iter().position(|f| *f == self.filter).unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.filter = options[next].clone();
        self.board.filter_category(&self.filter);
        self.last_op = LastOp::Filter;
        self.selected = 0;
    }

    /// 显示中的行
    pub fn visible_rows(&self) -> Vec<&EventRow> {
        self.board.displayed_rows().map(|(_, row)| row).collect()
    }

    /// 光标所在的行
    pub fn selected_row(&self) -> Option<&EventRow> {
        self.board
            .displayed_rows()
            .nth(self.selected)
            .map(|(_, row)| row)
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.board.displayed_count() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.board.displayed_count().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.board.displayed_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock_events;

    #[test]
    fn search_survives_a_refresh() {
        let mut state = BoardState::new(mock_events());
        state.start_search(SearchScope::TitleOrganizerLocation);
        for ch in "delhi".chars() {
            state.push_search_char(ch);
        }
        assert_eq!(state.visible_rows().len(), 1);

        state.replace_rows(mock_events());
        assert_eq!(state.visible_rows().len(), 1);
        assert_eq!(state.selected_row().map(|r| r.id.as_str()), Some("cloud-summit-2025"));
    }

    #[test]
    fn filter_cycles_through_every_category() {
        let mut state = BoardState::new(mock_events());
        state.cycle_filter(true);
        assert_eq!(state.filter, CategoryFilter::Only("hackathon".into()));
        assert_eq!(state.visible_rows().len(), 1);

        state.cycle_filter(false);
        state.cycle_filter(false);
        assert_eq!(state.filter, CategoryFilter::Only("techevent".into()));
    }

    #[test]
    fn selection_stays_inside_displayed_rows() {
        let mut state = BoardState::new(mock_events());
        state.select_last();
        state.select_next();
        assert_eq!(state.selected, mock_events().len() - 1);

        state.cycle_filter(true);
        state.select_next();
        assert_eq!(state.selected, 0);
    }
}
