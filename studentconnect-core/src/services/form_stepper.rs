//! Progressive form stepper
//!
//! The cursor stays inside `0..len`; moving past either end is a silent
//! clamp. Control visibility is derived from the cursor on every read.

use crate::error::{CoreError, CoreResult};

/// Which stepper controls are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepControls {
    pub previous_visible: bool,
    pub next_visible: bool,
    pub submit_visible: bool,
}

/// Ordered sequence of form steps with a single cursor.
#[derive(Debug, Clone)]
pub struct FormStepSequence {
    steps: Vec<String>,
    current: usize,
}

impl FormStepSequence {
    /// Create a sequence positioned on the first step
    pub fn new<I, S>(steps: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps: Vec<String> = steps.into_iter().map(Into::into).collect();
        if steps.is_empty() {
            return Err(CoreError::EmptyStepSequence);
        }
        Ok(Self { steps, current: 0 })
    }

    /// Move to the next step; no-op on the last one
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move to the previous step; no-op on the first one
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_step(&self) -> &str {
        &self.steps[self.current]
    }

    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; sequences are never empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current == self.steps.len() - 1
    }

    /// Whether step `index` is the displayed one
    #[must_use]
    pub fn is_step_visible(&self, index: usize) -> bool {
        index == self.current
    }

    #[must_use]
    pub fn controls(&self) -> StepControls {
        StepControls {
            previous_visible: !self.is_first(),
            next_visible: !self.is_last(),
            submit_visible: self.is_last(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_steps() -> FormStepSequence {
        FormStepSequence::new(["basics", "schedule", "details", "media"]).unwrap()
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(matches!(
            FormStepSequence::new(Vec::<String>::new()),
            Err(CoreError::EmptyStepSequence)
        ));
    }

    #[test]
    fn starts_on_first_step_with_next_only() {
        let steps = four_steps();
        assert_eq!(steps.current_index(), 0);
        assert_eq!(
            steps.controls(),
            StepControls {
                previous_visible: false,
                next_visible: true,
                submit_visible: false,
            }
        );
    }

    #[test]
    fn advance_then_retreat_returns_to_interior_index() {
        let mut steps = four_steps();
        steps.advance();
        for _ in 0..2 {
            let before = steps.current_index();
            assert!(steps.advance());
            assert!(steps.retreat());
            assert_eq!(steps.current_index(), before);
            steps.advance();
        }
    }

    #[test]
    fn clamps_are_idempotent() {
        let mut steps = four_steps();
        assert!(!steps.retreat());
        assert!(!steps.retreat());
        assert_eq!(steps.current_index(), 0);

        while steps.advance() {}
        assert_eq!(steps.current_index(), 3);
        assert!(!steps.advance());
        assert_eq!(steps.current_index(), 3);
        assert_eq!(steps.current_step(), "media");
    }

    #[test]
    fn last_step_swaps_next_for_submit() {
        let mut steps = four_steps();
        while steps.advance() {}
        assert_eq!(
            steps.controls(),
            StepControls {
                previous_visible: true,
                next_visible: false,
                submit_visible: true,
            }
        );
        assert!(steps.is_step_visible(3));
        assert!(!steps.is_step_visible(0));
    }

    #[test]
    fn single_step_form_shows_submit_immediately() {
        let steps = FormStepSequence::new(["only"]).unwrap();
        let controls = steps.controls();
        assert!(!controls.previous_visible);
        assert!(!controls.next_visible);
        assert!(controls.submit_visible);
    }
}
