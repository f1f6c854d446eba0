//! 表单字段类型定义

use serde::Serialize;

/// Visual validation mark of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMark {
    /// Not validated yet
    #[default]
    Unmarked,
    Valid,
    Invalid,
}

/// A control inside a multi-step form.
#[derive(Debug, Clone)]
pub struct FormField {
    /// Submitted name
    pub name: &'static str,
    pub value: String,
    pub required: bool,
    /// Index of the step the field is rendered on
    pub step: usize,
    pub mark: FieldMark,
}

impl FormField {
    #[must_use]
    pub fn required(name: &'static str, step: usize) -> Self {
        Self {
            name,
            value: String::new(),
            required: true,
            step,
            mark: FieldMark::Unmarked,
        }
    }

    #[must_use]
    pub fn optional(name: &'static str, step: usize) -> Self {
        Self {
            required: false,
            ..Self::required(name, step)
        }
    }

    /// Whether the field passes the required check (non-empty after trim)
    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

/// Name/value pairs of a submitted form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    #[must_use]
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Value of a field
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}
