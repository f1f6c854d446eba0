//! Form validation and submission gating

use chrono::{NaiveDate, NaiveTime};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::services::FormStepSequence;
use crate::types::{FieldMark, FormData, FormField};

/// Minimum signup password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Date input format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time input format
pub const TIME_FORMAT: &str = "%H:%M";

/// Submit button of a form.
///
/// Once a submission is accepted the control is disabled for good and shows
/// its in-progress caption; only a page reload brings back a fresh control.
#[derive(Debug, Clone)]
pub struct SubmitControl {
    label: String,
    busy_label: String,
    disabled: bool,
}

impl SubmitControl {
    #[must_use]
    pub fn new(label: impl Into<String>, busy_label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            busy_label: busy_label.into(),
            disabled: false,
        }
    }

    /// Disable the control for an accepted submission.
    ///
    /// Returns `false` when it was already disabled.
    pub fn begin(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.disabled = true;
        true
    }

    /// Caption currently displayed
    #[must_use]
    pub fn label(&self) -> &str {
        if self.disabled {
            &self.busy_label
        } else {
            &self.label
        }
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the data goes out with the page navigation
    Accepted(FormData),
    /// The control is disabled, nothing happened
    Ignored,
}

/// A progressive form: steps, fields spread over the steps, one submit control.
#[derive(Debug, Clone)]
pub struct MultiStepForm {
    steps: FormStepSequence,
    fields: Vec<FormField>,
    submit: SubmitControl,
}

impl MultiStepForm {
    pub fn new(steps: FormStepSequence, fields: Vec<FormField>, submit: SubmitControl) -> CoreResult<Self> {
        if let Some(field) = fields.iter().find(|field| field.step >= steps.len()) {
            return Err(CoreError::FieldStepOutOfRange {
                field: field.name.to_string(),
                step: field.step,
            });
        }
        Ok(Self {
            steps,
            fields,
            submit,
        })
    }

    #[must_use]
    pub fn steps(&self) -> &FormStepSequence {
        &self.steps
    }

    pub fn advance_step(&mut self) -> bool {
        self.steps.advance()
    }

    pub fn retreat_step(&mut self) -> bool {
        self.steps.retreat()
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Fields rendered on the displayed step
    pub fn current_fields(&self) -> impl Iterator<Item = &FormField> {
        let step = self.steps.current_index();
        self.fields.iter().filter(move |field| field.step == step)
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|field| field.value.as_str())
    }

    /// Replace a field's value; `false` when no such field exists
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    /// Validate every required field across all steps and submit.
    ///
    /// Required fields are marked valid or invalid. On any empty field the
    /// submission is blocked and the names of the empty fields are returned.
    pub fn submit(&mut self) -> Result<SubmitOutcome, ValidationError> {
        if self.submit.is_disabled() {
            return Ok(SubmitOutcome::Ignored);
        }

        let mut missing = Vec::new();
        for field in self.fields.iter_mut().filter(|field| field.required) {
            if field.is_filled() {
                field.mark = FieldMark::Valid;
            } else {
                field.mark = FieldMark::Invalid;
                missing.push(field.name.to_string());
            }
        }

        if !missing.is_empty() {
            log::debug!("Submission blocked, empty required fields: {missing:?}");
            return Err(ValidationError::RequiredFieldsMissing(missing));
        }

        self.submit.begin();
        let data = self
            .fields
            .iter()
            .map(|field| (field.name.to_string(), field.value.clone()))
            .collect();
        Ok(SubmitOutcome::Accepted(FormData::new(data)))
    }
}

/// Check a signup password and its confirmation
pub fn validate_passwords(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Parse an event date, rejecting dates before `today`
pub fn validate_event_date(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))?;
    if date < today {
        return Err(ValidationError::DateInPast);
    }
    Ok(date)
}

/// Parse an event start time
pub fn validate_event_time(input: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT)
        .map_err(|_| ValidationError::InvalidTime(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_form() -> MultiStepForm {
        MultiStepForm::new(
            FormStepSequence::new(["basics", "schedule"]).unwrap(),
            vec![
                FormField::required("title", 0),
                FormField::optional("prizes", 0),
                FormField::required("location", 1),
            ],
            SubmitControl::new("Submit Event", "Submitting..."),
        )
        .unwrap()
    }

    #[test]
    fn empty_required_field_blocks_submission() {
        let mut form = event_form();
        form.set_value("title", "AI Workshop");
        form.set_value("location", "   ");

        let err = form.submit().unwrap_err();
        assert_eq!(
            err,
            ValidationError::RequiredFieldsMissing(vec!["location".to_string()])
        );
        assert_eq!(form.field("title").unwrap().mark, FieldMark::Valid);
        assert_eq!(form.field("location").unwrap().mark, FieldMark::Invalid);
        assert_eq!(form.field("prizes").unwrap().mark, FieldMark::Unmarked);
        assert!(!form.submit_control().is_disabled());
        assert_eq!(form.submit_control().label(), "Submit Event");
    }

    #[test]
    fn required_fields_on_hidden_steps_are_checked() {
        let mut form = event_form();
        form.set_value("title", "AI Workshop");
        // still on step 0, location lives on step 1
        assert!(form.submit().is_err());
    }

    #[test]
    fn filled_form_submits_once() {
        let mut form = event_form();
        form.set_value("title", "AI Workshop");
        form.set_value("location", "Online");

        let SubmitOutcome::Accepted(data) = form.submit().unwrap() else {
            panic!("expected accepted submission");
        };
        assert_eq!(data.get("location"), Some("Online"));
        assert_eq!(data.get("prizes"), Some(""));
        assert!(form.submit_control().is_disabled());
        assert_eq!(form.submit_control().label(), "Submitting...");

        assert_eq!(form.submit().unwrap(), SubmitOutcome::Ignored);
    }

    #[test]
    fn field_on_missing_step_is_rejected() {
        let result = MultiStepForm::new(
            FormStepSequence::new(["only"]).unwrap(),
            vec![FormField::required("title", 1)],
            SubmitControl::new("Save", "Saving..."),
        );
        assert!(matches!(
            result,
            Err(CoreError::FieldStepOutOfRange { step: 1, .. })
        ));
    }

    #[test]
    fn current_fields_follow_the_stepper() {
        let mut form = event_form();
        assert_eq!(form.current_fields().count(), 2);
        form.advance_step();
        let names: Vec<_> = form.current_fields().map(|f| f.name).collect();
        assert_eq!(names, vec!["location"]);
    }

    #[test]
    fn password_rules() {
        assert_eq!(
            validate_passwords("secret123", "secret124"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_passwords("short", "short"),
            Err(ValidationError::PasswordTooShort { min: 8 })
        );
        assert_eq!(validate_passwords("longenough", "longenough"), Ok(()));
    }

    #[test]
    fn event_date_rules() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        assert_eq!(
            validate_event_date("2025-09-30", today),
            Err(ValidationError::DateInPast)
        );
        assert_eq!(validate_event_date(" 2025-10-01 ", today), Ok(today));
        assert!(matches!(
            validate_event_date("01/10/2025", today),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn event_time_rules() {
        assert!(validate_event_time("09:30").is_ok());
        assert!(matches!(
            validate_event_time("9.30am"),
            Err(ValidationError::InvalidTime(_))
        ));
    }
}
