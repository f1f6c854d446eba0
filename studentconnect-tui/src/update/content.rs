//! 内容面板更新逻辑

use chrono::{Local, NaiveDate};
use studentconnect_core::services::{
    DATE_FORMAT, SearchScope, SelectedFile, SubmitOutcome, accept_image,
    persist_pending_navigation, validate_event_date, validate_event_time,
};
use studentconnect_core::types::{EventRow, FormData, PendingNavigation, ViewId, views};
use studentconnect_core::{CoreError, ValidationError};
use uuid::Uuid;

use crate::backend::PreviewTarget;
use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::state::FormState;
use crate::model::{App, Page};

/// 新提交的活动等待审核
const PENDING_STATUS: &str = "Pending";

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    let Some(page) = app.current_page() else {
        return;
    };

    match page {
        Page::Overview | Page::Discover => update_board(app, page, msg),
        Page::CreateEvent | Page::Profile => update_form(app, page, msg),
        Page::EventDetails => {}
    }
}

// ============================================================================
// 活动列表
// ============================================================================

fn update_board(app: &mut App, page: Page, msg: ContentMessage) {
    if matches!(msg, ContentMessage::Confirm) {
        if page == Page::Discover {
            open_details(app);
        }
        return;
    }

    let board = &mut app.board;
    match msg {
        ContentMessage::SelectPrevious => board.select_previous(),
        ContentMessage::SelectNext => board.select_next(),
        ContentMessage::SelectFirst => board.select_first(),
        ContentMessage::SelectLast => board.select_last(),
        ContentMessage::StartSearch => board.start_search(search_scope(page)),
        ContentMessage::StopSearch => board.stop_search(),
        ContentMessage::Input(ch) if board.searching => board.push_search_char(ch),
        ContentMessage::Backspace if board.searching => board.pop_search_char(),
        ContentMessage::PrevOption if page == Page::Discover => board.cycle_filter(false),
        ContentMessage::NextOption if page == Page::Discover => board.cycle_filter(true),
        _ => {}
    }
}

/// 组织者表格只按标题搜索，学生卡片还匹配组织者和地点
fn search_scope(page: Page) -> SearchScope {
    if page == Page::Discover {
        SearchScope::TitleOrganizerLocation
    } else {
        SearchScope::TitleOnly
    }
}

/// 打开选中活动的详情页
fn open_details(app: &mut App) {
    let Some(id) = app.board.selected_row().map(|row| row.id.clone()) else {
        return;
    };

    if let Err(e) = app.catalog.details(&id) {
        app.report_error(&e);
        return;
    }

    if app
        .controller
        .activate_view(&ViewId::new(views::EVENT_DETAILS))
    {
        app.selected_event = Some(id);
        app.clear_status();
    }
}

// ============================================================================
// 表单
// ============================================================================

fn form_mut(app: &mut App, page: Page) -> &mut FormState {
    if page == Page::Profile {
        &mut app.profile
    } else {
        &mut app.create_event
    }
}

fn update_form(app: &mut App, page: Page, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => {
            leave_field(app, page);
            form_mut(app, page).prev_field();
        }
        ContentMessage::SelectNext => {
            leave_field(app, page);
            form_mut(app, page).next_field();
        }
        ContentMessage::SelectFirst => form_mut(app, page).focus = 0,
        ContentMessage::SelectLast => {
            let state = form_mut(app, page);
            state.focus = state.current_field_names().len().saturating_sub(1);
        }
        ContentMessage::Confirm => {
            let state = form_mut(app, page);
            if state.focused_field() == Some(state.image_field) {
                select_image(app, page);
            } else {
                leave_field(app, page);
                form_mut(app, page).next_field();
            }
        }
        ContentMessage::PrevOption | ContentMessage::NextOption => {
            let state = form_mut(app, page);
            if state.focused_field() == Some("category") {
                state.cycle_category(matches!(msg, ContentMessage::NextOption));
            }
        }
        ContentMessage::Input(ch) => {
            let state = form_mut(app, page);
            // 类别只能用 ← → 选择
            if state.focused_field() != Some("category") {
                state.push_char(ch);
            }
        }
        ContentMessage::Backspace => form_mut(app, page).pop_char(),
        ContentMessage::NextStep => {
            leave_field(app, page);
            form_mut(app, page).advance_step();
        }
        ContentMessage::PrevStep => {
            form_mut(app, page).retreat_step();
        }
        ContentMessage::Submit => {
            if page == Page::Profile {
                submit_profile(app);
            } else {
                submit_event(app);
            }
        }
        ContentMessage::StartSearch | ContentMessage::StopSearch => {}
    }
}

/// 离开日期字段时立即检查
fn leave_field(app: &mut App, page: Page) {
    if page != Page::CreateEvent || app.create_event.focused_field() != Some("date") {
        return;
    }
    let value = app
        .create_event
        .form
        .value("date")
        .unwrap_or_default()
        .trim()
        .to_string();
    if value.is_empty() {
        return;
    }
    check_event_date(app, &value, today());
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// 日期早于今天时提示并改成今天
fn check_event_date(app: &mut App, value: &str, today: NaiveDate) -> bool {
    match validate_event_date(value, today) {
        Ok(_) => true,
        Err(ValidationError::DateInPast) => {
            app.create_event
                .form
                .set_value("date", today.format(DATE_FORMAT).to_string());
            app.report_error(&ValidationError::DateInPast.into());
            false
        }
        Err(e) => {
            app.report_error(&e.into());
            false
        }
    }
}

/// 在表单框中输入的路径作为图片选择
fn select_image(app: &mut App, page: Page) {
    let target = if page == Page::Profile {
        PreviewTarget::Avatar
    } else {
        PreviewTarget::Flyer
    };
    let state = form_mut(app, page);
    let field = state.image_field;
    let path = state.form.value(field).unwrap_or_default().trim().to_string();
    if path.is_empty() {
        return;
    }

    let file = SelectedFile::from_path(path);
    match (accept_image(&file), target) {
        (Ok(()), _) => {
            log::info!("Loading preview of {}", file.path.display());
            app.backend.preview.spawn(target, file);
        }
        (Err(e), PreviewTarget::Avatar) => {
            let state = form_mut(app, page);
            state.form.set_value(field, "");
            state.preview.clear();
            app.report_error(&e.into());
        }
        (Err(e), PreviewTarget::Flyer) => {
            log::debug!("Ignoring flyer {}: {e}", file.path.display());
        }
    }
}

/// 提交活动表单
fn submit_event(app: &mut App) {
    let today = today();
    let date = app.create_event.form.value("date").unwrap_or_default().trim().to_string();
    let time = app.create_event.form.value("time").unwrap_or_default().trim().to_string();

    // 必填项为空时交给表单报告
    if !date.is_empty() && !check_event_date(app, &date, today) {
        return;
    }
    if !time.is_empty() {
        if let Err(e) = validate_event_time(&time) {
            app.report_error(&e.into());
            return;
        }
    }

    match app.create_event.form.submit() {
        Ok(SubmitOutcome::Accepted(data)) => {
            let organizer = app
                .profile
                .form
                .value("name")
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from);
            let row = event_row(&data, organizer);
            log::info!("Submitting event {} ({})", row.title, row.id);
            if let Err(e) = app.backend.events.append(row) {
                app.report_error(&e);
                return;
            }
            if let Err(e) = app.reload() {
                app.report_error(&e);
                return;
            }
            app.set_status(t().status_bar.event_submitted);
        }
        Ok(SubmitOutcome::Ignored) => {
            log::debug!("Event submission already in progress");
        }
        Err(e) => app.report_error(&CoreError::from(e)),
    }
}

/// 表单数据转换为列表行
fn event_row(data: &FormData, organizer: Option<String>) -> EventRow {
    let text = |name: &str| data.get(name).unwrap_or_default().trim().to_string();
    let location = text("location");
    EventRow {
        id: Uuid::new_v4().to_string(),
        title: text("title"),
        category: text("category"),
        date: text("date"),
        status: PENDING_STATUS.to_string(),
        organizer,
        location: (!location.is_empty()).then_some(location),
    }
}

/// 保存个人资料
///
/// 保存后页面重载，并通过意图回到资料页。
fn submit_profile(app: &mut App) {
    match app.profile.form.submit() {
        Ok(SubmitOutcome::Accepted(data)) => {
            log::info!("Saving profile with {} fields", data.entries().len());
            let saved = persist_pending_navigation(
                app.backend.intents.as_mut(),
                PendingNavigation::Profile,
            )
            .and_then(|()| app.reload());
            match saved {
                Ok(()) => app.set_status(t().status_bar.profile_saved),
                Err(e) => app.report_error(&e),
            }
        }
        Ok(SubmitOutcome::Ignored) => {
            log::debug!("Profile save already in progress");
        }
        Err(e) => app.report_error(&CoreError::from(e)),
    }
}
