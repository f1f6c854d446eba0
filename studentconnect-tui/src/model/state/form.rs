//! 表单页面状态（创建活动 / 个人资料）

use studentconnect_core::services::{FormStepSequence, MultiStepForm, PreviewSlot, SubmitControl};
use studentconnect_core::types::{EventCategory, FormField};
use studentconnect_core::CoreResult;

use crate::i18n::t;

/// 创建活动表单的步骤
pub const EVENT_STEPS: [&str; 4] = ["basics", "schedule", "details", "media"];

/// 带字段光标和图片预览的表单
#[derive(Debug, Clone)]
pub struct FormState {
    pub form: MultiStepForm,
    /// 当前步骤内的字段光标
    pub focus: usize,
    /// 图片字段名（flyer / avatar）
    pub image_field: &'static str,
    pub preview: PreviewSlot,
}

impl FormState {
    /// 创建活动表单
    pub fn create_event() -> CoreResult<Self> {
        let texts = t();
        let form = MultiStepForm::new(
            FormStepSequence::new(EVENT_STEPS)?,
            vec![
                FormField::required("title", 0),
                FormField::required("category", 0),
                FormField::required("description", 0),
                FormField::required("date", 1),
                FormField::required("time", 1),
                FormField::required("location", 1),
                FormField::required("event_link", 2),
                FormField::optional("contact_email", 2),
                FormField::optional("requirements", 2),
                FormField::optional("prizes", 2),
                FormField::optional("flyer", 3),
            ],
            SubmitControl::new(texts.create_event.submit, texts.create_event.submitting),
        )?;
        Ok(Self::wrap(form, "flyer"))
    }

    /// 个人资料表单（单步骤）
    pub fn profile() -> CoreResult<Self> {
        let texts = t();
        let form = MultiStepForm::new(
            FormStepSequence::new(["profile"])?,
            vec![
                FormField::required("name", 0),
                FormField::optional("mobile", 0),
                FormField::optional("avatar", 0),
            ],
            SubmitControl::new(texts.profile.save, texts.profile.saving),
        )?;
        Ok(Self::wrap(form, "avatar"))
    }

    fn wrap(form: MultiStepForm, image_field: &'static str) -> Self {
        Self {
            form,
            focus: 0,
            image_field,
            preview: PreviewSlot::new(),
        }
    }

    /// 当前步骤的字段名
    pub fn current_field_names(&self) -> Vec<&'static str> {
        self.form.current_fields().map(|field| field.name).collect()
    }

    /// 光标所在字段
    pub fn focused_field(&self) -> Option<&'static str> {
        self.current_field_names().get(self.focus).copied()
    }

    pub fn next_field(&mut self) {
        let len = self.current_field_names().len();
        if len > 0 {
            self.focus = (self.focus + 1) % len;
        }
    }

    pub fn prev_field(&mut self) {
        let len = self.current_field_names().len();
        if len > 0 {
            self.focus = (self.focus + len - 1) % len;
        }
    }

    /// 切换步骤，光标回到第一个字段
    pub fn advance_step(&mut self) -> bool {
        let moved = self.form.advance_step();
        if moved {
            self.focus = 0;
        }
        moved
    }

    pub fn retreat_step(&mut self) -> bool {
        let moved = self.form.retreat_step();
        if moved {
            self.focus = 0;
        }
        moved
    }

    /// 向光标所在字段输入字符
    pub fn push_char(&mut self, ch: char) {
        if let Some(name) = self.focused_field() {
            let mut value = self.form.value(name).unwrap_or_default().to_string();
            value.push(ch);
            self.form.set_value(name, value);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(name) = self.focused_field() {
            let mut value = self.form.value(name).unwrap_or_default().to_string();
            value.pop();
            self.form.set_value(name, value);
        }
    }

    /// 循环切换类别字段的取值
    pub fn cycle_category(&mut self, forward: bool) {
        let categories = EventCategory::all();
        let current = self
            .form
            .value("category")
            .and_then(EventCategory::from_value)
            .and_then(|c| categories.iter().position(|x| *x == c));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => categories.len() - 1,
            (Some(i), true) => (i + 1) % categories.len(),
            (Some(i), false) => (i + categories.len() - 1) % categories.len(),
        };
        self.form.set_value("category", categories[next].value());
    }

    /// 复制另一个表单的字段值（页面重载后保留已保存的资料）
    pub fn copy_values_from(&mut self, other: &FormState) {
        for field in other.form.fields() {
            self.form.set_value(field.name, field.value.clone());
        }
        self.preview = other.preview.clone();
    }
}

/// 字段显示名
pub fn field_label(name: &str) -> &'static str {
    let texts = t();
    match name {
        "title" => texts.create_event.title,
        "category" => texts.create_event.category,
        "description" => texts.create_event.description,
        "date" => texts.create_event.date,
        "time" => texts.create_event.time,
        "location" => texts.create_event.location,
        "event_link" => texts.create_event.event_link,
        "contact_email" => texts.create_event.contact_email,
        "requirements" => texts.create_event.requirements,
        "prizes" => texts.create_event.prizes,
        "flyer" => texts.create_event.flyer,
        "name" => texts.profile.name,
        "mobile" => texts.profile.mobile,
        "avatar" => texts.profile.avatar,
        _ => "",
    }
}

/// 步骤显示名
pub fn step_label(step: &str) -> &'static str {
    let texts = t();
    match step {
        "basics" => texts.create_event.step_basics,
        "schedule" => texts.create_event.step_schedule,
        "details" => texts.create_event.step_details,
        "media" => texts.create_event.step_media,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_cursor_resets_when_the_step_changes() {
        let mut state = FormState::create_event().unwrap();
        state.next_field();
        state.next_field();
        assert_eq!(state.focused_field(), Some("description"));

        assert!(state.advance_step());
        assert_eq!(state.focused_field(), Some("date"));
        state.prev_field();
        assert_eq!(state.focused_field(), Some("location"));
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut state = FormState::create_event().unwrap();
        for ch in "Hackfest".chars() {
            state.push_char(ch);
        }
        state.pop_char();
        assert_eq!(state.form.value("title"), Some("Hackfes"));
    }

    #[test]
    fn category_cycles_through_known_values() {
        let mut state = FormState::create_event().unwrap();
        state.cycle_category(true);
        assert_eq!(state.form.value("category"), Some("hackathon"));
        state.cycle_category(false);
        assert_eq!(state.form.value("category"), Some("techevent"));
    }

    #[test]
    fn profile_values_carry_over() {
        let mut saved = FormState::profile().unwrap();
        saved.form.set_value("name", "Asha");
        saved.preview.complete("data:image/png;base64,AA==".into());

        let mut fresh = FormState::profile().unwrap();
        fresh.copy_values_from(&saved);
        assert_eq!(fresh.form.value("name"), Some("Asha"));
        assert!(fresh.preview.is_visible());
        assert!(!fresh.form.submit_control().is_disabled());
    }
}
