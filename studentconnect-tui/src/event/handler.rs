//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::Modal;
use crate::model::{App, Page, Screen};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::TOGGLE_LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if app.screen == Screen::Welcome {
        return handle_welcome_keys(key);
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // 输入状态下字符键交给内容面板
    if app.is_text_entry() {
        return handle_content_keys(key, app);
    }

    if key.modifiers.is_empty() {
        match key.code {
            KeyCode::Esc => return AppMessage::GoBack,
            KeyCode::Char('?') => return AppMessage::ShowHelp,
            _ => {}
        }
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 欢迎页按键
fn handle_welcome_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter => AppMessage::OpenAuth,
        KeyCode::Char('?') => AppMessage::ShowHelp,
        _ => AppMessage::Noop,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.current_page() {
        Some(Page::Overview | Page::Discover) if app.board.searching => handle_search_keys(key),
        Some(page @ (Page::Overview | Page::Discover)) => handle_board_keys(key, page),
        Some(Page::CreateEvent | Page::Profile) => handle_form_keys(key),
        Some(Page::EventDetails) => match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => AppMessage::GoBack,
            _ => AppMessage::Noop,
        },
        None => AppMessage::Noop,
    }
}

/// 活动列表按键
fn handle_board_keys(key: KeyEvent, page: Page) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Char('/') => AppMessage::Content(ContentMessage::StartSearch),
        // 类别筛选只在发现页
        KeyCode::Left if page == Page::Discover => AppMessage::Content(ContentMessage::PrevOption),
        KeyCode::Right if page == Page::Discover => {
            AppMessage::Content(ContentMessage::NextOption)
        }
        _ => AppMessage::Noop,
    }
}

/// 搜索输入按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => AppMessage::Content(ContentMessage::StopSearch),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Char(ch) if is_plain(&key) => AppMessage::Content(ContentMessage::Input(ch)),
        _ => AppMessage::Noop,
    }
}

/// 表单页按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NEXT_STEP.matches(&key) {
        return AppMessage::Content(ContentMessage::NextStep);
    }
    if DefaultKeymap::PREV_STEP.matches(&key) {
        return AppMessage::Content(ContentMessage::PrevStep);
    }
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Submit);
    }

    match key.code {
        KeyCode::Up | KeyCode::BackTab => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Left => AppMessage::Content(ContentMessage::PrevOption),
        KeyCode::Right => AppMessage::Content(ContentMessage::NextOption),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Esc => AppMessage::GoBack,
        KeyCode::Char(ch) if is_plain(&key) => AppMessage::Content(ContentMessage::Input(ch)),
        _ => AppMessage::Noop,
    }
}

/// 普通字符（无修饰或仅 Shift）
fn is_plain(key: &KeyEvent) -> bool {
    key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::Auth { .. } => handle_auth_keys(key),
        Modal::ConfirmLogout { .. } => match key.code {
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                AppMessage::Modal(ModalMessage::ToggleChoice)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        // 静态弹窗只响应关闭按键
        Modal::About | Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// 登录弹窗按键
fn handle_auth_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::TOGGLE_MODE.matches(&key) {
        return AppMessage::Modal(ModalMessage::ToggleMode);
    }
    if DefaultKeymap::TOGGLE_PASSWORD.matches(&key) {
        return AppMessage::Modal(ModalMessage::TogglePassword);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        // ← →: 切换学生 / 组织者
        KeyCode::Left | KeyCode::Right => AppMessage::Modal(ModalMessage::ToggleTab),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(ch) if is_plain(&key) => AppMessage::Modal(ModalMessage::Input(ch)),
        _ => AppMessage::Noop,
    }
}
