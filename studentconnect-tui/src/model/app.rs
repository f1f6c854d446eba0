//! 应用主状态结构

use std::time::Instant;

use studentconnect_core::services::{EventCatalog, ViewController, take_pending_navigation};
use studentconnect_core::types::DashboardRole;
use studentconnect_core::{CoreError, CoreResult};

use super::state::{AutoRefreshState, BoardState, FormState, ModalState};
use super::{FocusPanel, NavigationState, Page, Screen};
use crate::backend::{AppConfig, Backend, PreviewTarget};
use crate::i18n::t;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 欢迎页 / 面板
    pub screen: Screen,

    /// 当前面板角色
    pub role: DashboardRole,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航栏光标
    pub navigation: NavigationState,

    /// 视图切换（每次页面重载重新创建）
    pub controller: ViewController,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 活动列表（概览表格 / 发现页卡片）
    pub board: BoardState,
    /// 活动详情数据
    pub catalog: EventCatalog,
    /// 详情页正在查看的活动
    pub selected_event: Option<String>,
    /// 创建活动表单
    pub create_event: FormState,
    /// 个人资料表单
    pub profile: FormState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前配置
    pub config: AppConfig,

    /// 自动刷新计时
    pub refresh: AutoRefreshState,

    /// 后端服务
    pub backend: Backend,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 配置中记住了角色时直接进入面板，否则停在欢迎页。
    pub fn new(backend: Backend, config: AppConfig) -> CoreResult<Self> {
        let role = config.role.unwrap_or_default();
        let controller = ViewController::initialize(role.layout(), None)?;

        let mut app = Self {
            should_quit: false,
            screen: Screen::Welcome,
            role,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::default(),
            controller,
            status_message: None,
            board: BoardState::default(),
            catalog: EventCatalog::builtin(),
            selected_event: None,
            create_event: FormState::create_event()?,
            profile: FormState::profile()?,
            modal: ModalState::new(),
            config,
            refresh: AutoRefreshState::new(Instant::now()),
            backend,
        };

        let loaded = if app.config.role.is_some() {
            app.screen = Screen::Dashboard;
            app.reload()
        } else {
            app.reload_rows()
        };

        // 数据读取失败时保留默认视图和空列表，界面照常可用
        if let Err(e) = loaded {
            log::error!("Failed to load dashboard data: {e}");
            app.report_error(&e);
        }

        Ok(app)
    }

    /// 当前显示的页面
    pub fn current_page(&self) -> Option<Page> {
        match self.screen {
            Screen::Welcome => None,
            Screen::Dashboard => Page::from_view(self.controller.visible_view()),
        }
    }

    /// 页面重载
    ///
    /// 取出待处理的导航意图，重新创建视图控制器、表单和活动列表。
    /// 个人资料的已保存值会保留。
    pub fn reload(&mut self) -> CoreResult<()> {
        let pending = take_pending_navigation(self.backend.intents.as_mut())?;
        self.controller = ViewController::initialize(self.role.layout(), pending)?;
        self.navigation.selected = self.controller.active_link_index().unwrap_or(0);

        self.create_event = FormState::create_event()?;
        let mut profile = FormState::profile()?;
        profile.copy_values_from(&self.profile);
        self.profile = profile;

        self.selected_event = None;
        self.board = BoardState::new(self.backend.events.load_all()?);
        self.refresh.refreshed(Instant::now());

        log::info!(
            "Loaded {:?} dashboard on {}",
            self.role,
            self.controller.visible_view()
        );
        Ok(())
    }

    /// 重新读取活动数据（保留搜索 / 筛选）
    pub fn reload_rows(&mut self) -> CoreResult<()> {
        let rows = self.backend.events.load_all()?;
        self.board.replace_rows(rows);
        self.refresh.refreshed(Instant::now());
        Ok(())
    }

    /// 登录成功后进入面板
    pub fn enter_dashboard(&mut self, role: DashboardRole) -> CoreResult<()> {
        self.role = role;
        self.screen = Screen::Dashboard;
        self.focus = FocusPanel::Navigation;
        self.config.role = Some(role);
        self.save_config();
        self.reload()
    }

    /// 应用已完成的图片读取
    pub fn apply_preview_results(&mut self) {
        for finished in self.backend.preview.drain() {
            let texts = t();
            let (form, ready) = match finished.target {
                PreviewTarget::Avatar => (&mut self.profile, texts.profile.preview_ready),
                PreviewTarget::Flyer => (&mut self.create_event, texts.create_event.preview_ready),
            };
            match finished.result {
                Ok(data_url) => {
                    form.preview.complete(data_url);
                    self.set_status(ready);
                }
                Err(e) => self.report_error(&e),
            }
        }
    }

    /// 自动刷新
    pub fn tick(&mut self, now: Instant) {
        if self.screen != Screen::Dashboard || self.modal.is_open() {
            return;
        }
        if !self.refresh.is_due(now, &self.config.auto_refresh) {
            return;
        }
        log::debug!("Auto-refreshing events");
        if let Err(e) = self.reload_rows() {
            self.refresh.refreshed(now);
            log::error!("Auto-refresh failed: {e}");
        }
    }

    /// 是否处于文字输入状态（字符键直接输入到内容面板）
    pub fn is_text_entry(&self) -> bool {
        self.focus.is_content()
            && self
                .current_page()
                .is_some_and(|page| page.is_form() || (page.is_board() && self.board.searching))
    }

    /// 显示错误
    ///
    /// 预期内的错误（校验失败、活动无详情）以提示弹窗显示。
    pub fn report_error(&mut self, err: &CoreError) {
        if err.is_expected() {
            log::warn!("{err}");
            self.modal.show_notice(err.to_string());
        } else {
            log::error!("{err}");
            self.modal.show_error(t().common.error, err.to_string());
        }
    }

    /// 保存配置（失败只记录日志）
    pub fn save_config(&self) {
        if let Err(e) = self.backend.config_service.save(&self.config) {
            log::error!("Failed to save config: {e:#}");
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use studentconnect_core::traits::InMemoryIntentStore;
    use tempfile::TempDir;
    use tokio::runtime::Runtime;

    use super::*;
    use crate::backend::{JsonEventRepository, LocalConfigService, PreviewWorker};
    use crate::model::state::Modal;

    /// 活动数据文件损坏的应用实例
    fn app_over_corrupt_events(config: AppConfig) -> (CoreResult<App>, Runtime, TempDir) {
        let runtime = Runtime::new().unwrap();
        let dir = TempDir::new().unwrap();
        let events = dir.path().join("events.json");
        fs::write(&events, "{ not json").unwrap();

        let backend = Backend::new(
            Box::new(LocalConfigService::with_path(dir.path().join("config.json"))),
            Box::new(InMemoryIntentStore::new()),
            Box::new(JsonEventRepository::new(events)),
            PreviewWorker::new(runtime.handle().clone()),
        );
        (App::new(backend, config), runtime, dir)
    }

    #[test]
    fn corrupt_events_file_keeps_dashboard_usable() {
        let config = AppConfig {
            role: Some(DashboardRole::Organizer),
            ..AppConfig::default()
        };
        let (app, _rt, _dir) = app_over_corrupt_events(config);
        let app = app.unwrap();

        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.current_page(), Some(Page::Overview));
        assert!(app.board.visible_rows().is_empty());
        assert!(matches!(app.modal.active, Some(Modal::Error { .. })));
    }

    #[test]
    fn corrupt_events_file_on_welcome_screen_shows_error() {
        let (app, _rt, _dir) = app_over_corrupt_events(AppConfig::default());
        let app = app.unwrap();

        assert_eq!(app.screen, Screen::Welcome);
        assert!(app.board.visible_rows().is_empty());
        assert!(matches!(app.modal.active, Some(Modal::Error { .. })));
    }
}
