//! 自动刷新状态

use std::time::Instant;

use crate::backend::AutoRefreshConfig;

/// 自动刷新计时
#[derive(Debug, Clone, Copy)]
pub struct AutoRefreshState {
    pub last_refresh: Instant,
    pub last_interaction: Option<Instant>,
}

impl AutoRefreshState {
    pub fn new(now: Instant) -> Self {
        Self {
            last_refresh: now,
            last_interaction: None,
        }
    }

    /// 记录一次用户操作
    pub fn mark_interaction(&mut self, now: Instant) {
        self.last_interaction = Some(now);
    }

    /// 最近一个刷新间隔内是否有操作
    pub fn is_paused(&self, now: Instant, config: &AutoRefreshConfig) -> bool {
        config.pause_on_interaction
            && self
                .last_interaction
                .is_some_and(|at| now.saturating_duration_since(at) < config.interval())
    }

    /// 是否该刷新了
    pub fn is_due(&self, now: Instant, config: &AutoRefreshConfig) -> bool {
        config.enabled
            && now.saturating_duration_since(self.last_refresh) >= config.interval()
            && !self.is_paused(now, config)
    }

    pub fn refreshed(&mut self, now: Instant) {
        self.last_refresh = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn refresh_is_due_after_the_interval() {
        let config = AutoRefreshConfig::default();
        let start = Instant::now();
        let state = AutoRefreshState::new(start);

        assert!(!state.is_due(start + Duration::from_secs(5), &config));
        assert!(state.is_due(start + Duration::from_secs(10), &config));
    }

    #[test]
    fn recent_interaction_pauses_refresh() {
        let config = AutoRefreshConfig::default();
        let start = Instant::now();
        let mut state = AutoRefreshState::new(start);
        state.mark_interaction(start + Duration::from_secs(8));

        let later = start + Duration::from_secs(12);
        assert!(state.is_paused(later, &config));
        assert!(!state.is_due(later, &config));
        assert!(state.is_due(start + Duration::from_secs(19), &config));
    }

    #[test]
    fn disabled_refresh_never_fires() {
        let config = AutoRefreshConfig {
            enabled: false,
            ..AutoRefreshConfig::default()
        };
        let start = Instant::now();
        let state = AutoRefreshState::new(start);
        assert!(!state.is_due(start + Duration::from_secs(60), &config));
    }
}
