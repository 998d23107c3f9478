use std::collections::BTreeMap;

use super::error::{Terminal, ValidationErrors, WizardError};
use super::{FormField, WizardStep};

/// Position of a wizard flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStatus<S> {
    Step(S),
    Completed,
    Cancelled,
}

impl<S: Copy> WizardStatus<S> {
    pub fn step(&self) -> Option<S> {
        match self {
            WizardStatus::Step(s) => Some(*s),
            _ => None,
        }
    }

    pub fn terminal(&self) -> Option<Terminal> {
        match self {
            WizardStatus::Step(_) => None,
            WizardStatus::Completed => Some(Terminal::Completed),
            WizardStatus::Cancelled => Some(Terminal::Cancelled),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.terminal().is_some()
    }
}

/// State machine for one run of a multi-step form.
///
/// Created at step 1 with every declared field empty. The host renders from
/// it, feeds edits and transitions into it, and drops it once
/// [`is_finished`](Self::is_finished) turns true; a new flow needs a new
/// controller.
#[derive(Debug, Clone)]
pub struct WizardController<S: WizardStep> {
    status: WizardStatus<S>,
    fields: BTreeMap<S::Field, String>,
    validation_enabled: bool,
    errors: BTreeMap<S::Field, String>,
}

impl<S: WizardStep> WizardController<S> {
    pub fn new(validation_enabled: bool) -> Self {
        Self {
            status: WizardStatus::Step(S::first()),
            fields: S::Field::ALL
                .iter()
                .map(|f| (*f, String::new()))
                .collect(),
            validation_enabled,
            errors: BTreeMap::new(),
        }
    }

    pub fn status(&self) -> WizardStatus<S> {
        self.status
    }

    pub fn current_step(&self) -> Option<S> {
        self.status.step()
    }

    pub fn step_count(&self) -> usize {
        S::ALL.len()
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn validation_enabled(&self) -> bool {
        self.validation_enabled
    }

    /// Toggle the validation gate. Takes effect at the next `next()` call.
    pub fn set_validation_enabled(&mut self, enabled: bool) {
        self.validation_enabled = enabled;
        if !enabled {
            self.errors.clear();
        }
    }

    pub fn value(&self, field: S::Field) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    /// All values in field declaration order
    pub fn values(&self) -> impl Iterator<Item = (S::Field, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Messages from the last refused advance, kept in sync with edits
    pub fn errors(&self) -> ValidationErrors {
        let mut out = ValidationErrors::new();
        for (field, message) in &self.errors {
            out.push(field.name(), message.clone());
        }
        out
    }

    pub fn error_for(&self, field: S::Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Evaluate every field rule without touching state.
    ///
    /// The gate covers the whole form, not only the current step's fields.
    pub fn validate(&self) -> ValidationErrors {
        let mut out = ValidationErrors::new();
        for (field, value) in &self.fields {
            if let Err(message) = field.check(value) {
                out.push(field.name(), message);
            }
        }
        out
    }

    pub fn edit(&mut self, field: S::Field, value: impl Into<String>) -> Result<(), WizardError> {
        self.active_step()?;
        let value = value.into();

        // Re-check the edited field while messages are on screen
        if self.validation_enabled && !self.errors.is_empty() {
            match field.check(&value) {
                Ok(()) => {
                    self.errors.remove(&field);
                }
                Err(message) => {
                    self.errors.insert(field, message);
                }
            }
        }

        self.fields.insert(field, value);
        Ok(())
    }

    /// Edit a field addressed by its wire name
    pub fn edit_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), WizardError> {
        let field = S::Field::from_name(name)
            .ok_or_else(|| WizardError::UnknownField(name.to_string()))?;
        self.edit(field, value)
    }

    /// Advance one step, or complete from the last step.
    ///
    /// With validation enabled a failing gate keeps the current step and
    /// returns every message.
    pub fn next(&mut self) -> Result<WizardStatus<S>, WizardError> {
        let step = self.active_step()?;

        if self.validation_enabled {
            let failed: BTreeMap<S::Field, String> = self
                .fields
                .iter()
                .filter_map(|(f, v)| f.check(v).err().map(|m| (*f, m)))
                .collect();
            if !failed.is_empty() {
                self.errors = failed;
                return Err(WizardError::Validation(self.errors()));
            }
        }

        self.errors.clear();
        self.status = match step.next() {
            Some(next) => WizardStatus::Step(next),
            None => WizardStatus::Completed,
        };
        Ok(self.status)
    }

    /// Go one step back; from the first step this cancels the flow.
    pub fn back(&mut self) -> Result<WizardStatus<S>, WizardError> {
        let step = self.active_step()?;
        self.status = match step.previous() {
            Some(prev) => WizardStatus::Step(prev),
            None => WizardStatus::Cancelled,
        };
        Ok(self.status)
    }

    /// Abandon the flow.
    ///
    /// Cancelling an already cancelled flow is a no-op; a completed flow
    /// cannot be cancelled.
    pub fn cancel(&mut self) -> Result<WizardStatus<S>, WizardError> {
        match self.status {
            WizardStatus::Completed => Err(WizardError::Finished(Terminal::Completed)),
            _ => {
                self.status = WizardStatus::Cancelled;
                Ok(self.status)
            }
        }
    }

    fn active_step(&self) -> Result<S, WizardError> {
        match self.status {
            WizardStatus::Step(step) => Ok(step),
            WizardStatus::Completed => Err(WizardError::Finished(Terminal::Completed)),
            WizardStatus::Cancelled => Err(WizardError::Finished(Terminal::Cancelled)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::{FieldMetadata, FieldUiMetadata, ValidationRules};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        Title,
        Body,
    }

    impl FormField for Field {
        const ALL: &'static [Self] = &[Field::Title, Field::Body];

        fn metadata(&self) -> FieldMetadata {
            match self {
                Field::Title => FieldMetadata {
                    name: "title",
                    ui: FieldUiMetadata {
                        label: "Title",
                        ..FieldUiMetadata::default()
                    },
                    validation: ValidationRules::required().with_min_length(3),
                },
                Field::Body => FieldMetadata {
                    name: "body",
                    ui: FieldUiMetadata {
                        label: "Body",
                        multiline: true,
                        ..FieldUiMetadata::default()
                    },
                    validation: ValidationRules::none(),
                },
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Step {
        Head,
        Content,
    }

    impl WizardStep for Step {
        type Field = Field;

        const ALL: &'static [Self] = &[Step::Head, Step::Content];

        fn title(&self) -> &'static str {
            match self {
                Step::Head => "Head",
                Step::Content => "Content",
            }
        }

        fn fields(&self) -> &'static [Field] {
            match self {
                Step::Head => &[Field::Title],
                Step::Content => &[Field::Body],
            }
        }
    }

    type Wizard = WizardController<Step>;

    #[test]
    fn test_starts_at_first_step_with_empty_fields() {
        let w = Wizard::new(true);
        assert_eq!(w.status(), WizardStatus::Step(Step::Head));
        assert_eq!(w.step_count(), 2);
        assert_eq!(w.values().count(), 2);
        assert!(w.values().all(|(_, v)| v.is_empty()));
        assert!(w.errors().is_empty());
    }

    #[test]
    fn test_step_navigation_helpers() {
        assert_eq!(Step::Head.number(), 1);
        assert_eq!(Step::Content.number(), 2);
        assert_eq!(Step::Head.next(), Some(Step::Content));
        assert_eq!(Step::Content.next(), None);
        assert_eq!(Step::Head.previous(), None);
        assert!(Step::Content.is_last());
    }

    #[test]
    fn test_failed_gate_keeps_step_and_reports() {
        let mut w = Wizard::new(true);
        let err = w.next().unwrap_err();
        match err {
            WizardError::Validation(errors) => {
                assert_eq!(errors.fields(), vec!["title"]);
                assert_eq!(errors.get("title"), Some("Title is required"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(w.status(), WizardStatus::Step(Step::Head));
        assert_eq!(w.error_for(Field::Title), Some("Title is required"));
    }

    #[test]
    fn test_edit_revalidates_shown_messages() {
        let mut w = Wizard::new(true);
        assert!(w.next().is_err());

        w.edit(Field::Title, "ab").unwrap();
        assert_eq!(
            w.error_for(Field::Title),
            Some("Title must contain at least 3 characters")
        );

        w.edit(Field::Title, "abc").unwrap();
        assert!(w.errors().is_empty());
        assert_eq!(w.next(), Ok(WizardStatus::Step(Step::Content)));
    }

    #[test]
    fn test_edit_before_any_advance_reports_nothing() {
        let mut w = Wizard::new(true);
        w.edit(Field::Title, "x").unwrap();
        assert!(w.errors().is_empty());
    }

    #[test]
    fn test_toggle_read_at_transition_time() {
        let mut w = Wizard::new(true);
        assert!(w.next().is_err());
        w.set_validation_enabled(false);
        assert!(w.errors().is_empty());
        assert_eq!(w.next(), Ok(WizardStatus::Step(Step::Content)));

        w.set_validation_enabled(true);
        assert!(w.next().is_err());
        assert_eq!(w.status(), WizardStatus::Step(Step::Content));
    }

    #[test]
    fn test_back_and_cancel() {
        let mut w = Wizard::new(false);
        w.edit(Field::Title, "Hello").unwrap();
        w.next().unwrap();
        assert_eq!(w.back(), Ok(WizardStatus::Step(Step::Head)));
        assert_eq!(w.value(Field::Title), "Hello");
        assert_eq!(w.back(), Ok(WizardStatus::Cancelled));
        assert!(w.is_finished());
        assert_eq!(w.cancel(), Ok(WizardStatus::Cancelled));
    }

    #[test]
    fn test_completed_rejects_everything() {
        let mut w = Wizard::new(false);
        w.next().unwrap();
        assert_eq!(w.next(), Ok(WizardStatus::Completed));

        let finished = Err(WizardError::Finished(Terminal::Completed));
        assert_eq!(w.next(), finished.clone());
        assert_eq!(w.back(), finished.clone());
        assert_eq!(w.cancel(), finished);
        assert_eq!(
            w.edit(Field::Body, "late"),
            Err(WizardError::Finished(Terminal::Completed))
        );
        assert_eq!(w.value(Field::Body), "");
        assert_eq!(w.status(), WizardStatus::Completed);
    }

    #[test]
    fn test_edit_named() {
        let mut w = Wizard::new(false);
        w.edit_named("body", "text").unwrap();
        assert_eq!(w.value(Field::Body), "text");
        assert_eq!(
            w.edit_named("footer", "x"),
            Err(WizardError::UnknownField("footer".to_string()))
        );
    }

    #[test]
    fn test_error_display() {
        let mut w = Wizard::new(true);
        let err = w.next().unwrap_err();
        assert_eq!(err.to_string(), "validation failed: title: Title is required");
        assert_eq!(
            WizardError::Finished(Terminal::Cancelled).to_string(),
            "wizard is already cancelled"
        );
    }
}
