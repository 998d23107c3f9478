//! Linear multi-step form engine.
//!
//! A form is described by two closed enums: the steps ([`WizardStep`]) and
//! the fields ([`FormField`]). [`WizardController`] drives a flow over them:
//! it holds the current step and every field value, and refuses to advance
//! while the optional validation gate fails.
//!
//! ```text
//! Step(1) --next--> Step(2) --next--> ... Step(N) --next--> Completed
//!    |                 |                     |
//!   back             back                  back
//!    v                 v                     v
//! Cancelled        Step(1)               Step(N-1)
//! ```
//!
//! `cancel()` goes to `Cancelled` from any step. Both terminal states reject
//! every further transition.

mod controller;
mod error;

pub use controller::{WizardController, WizardStatus};
pub use error::{FieldError, Terminal, ValidationErrors, WizardError};

use crate::shared::metadata::FieldMetadata;
use std::fmt::Debug;

/// A declared form field
pub trait FormField: Copy + Ord + Debug + 'static {
    /// Every field of the form, in declaration order
    const ALL: &'static [Self];

    fn metadata(&self) -> FieldMetadata;

    /// Wire name
    fn name(&self) -> &'static str {
        self.metadata().name
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// Run this field's rules against a value
    fn check(&self, value: &str) -> Result<(), String> {
        let meta = self.metadata();
        meta.validation.validate_string(value, meta.ui.label)
    }
}

/// A step of a linear wizard.
///
/// `ALL` must list at least one step; the order of `ALL` is the order of the
/// flow.
pub trait WizardStep: Copy + Eq + Debug + 'static {
    type Field: FormField;

    const ALL: &'static [Self];

    fn title(&self) -> &'static str;

    /// Fields rendered on this step
    fn fields(&self) -> &'static [Self::Field];

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// 1-based position
    fn number(&self) -> usize {
        self.index() + 1
    }

    fn first() -> Self {
        Self::ALL[0]
    }

    fn next(&self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    fn previous(&self) -> Option<Self> {
        self.index()
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    fn is_last(&self) -> bool {
        self.next().is_none()
    }
}
