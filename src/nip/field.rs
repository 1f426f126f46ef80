//! Input-field state for a NIP text box.
//!
//! The validators are stateless; this is where the "validate while typing"
//! versus "validate on blur" policy lives. The field owns the current
//! digits and the last outcome, and hands each change back to the caller
//! as a [`FieldChange`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::checksum::validate_nip;
use super::format::{format_nip, normalize_nip};
use super::types::{NipError, ValidationResult};

/// When the field runs validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// After every keystroke.
    RealTime,
    /// Only when the field loses focus.
    #[default]
    OnBlur,
}

/// Per-field configuration.
///
/// Deserializes with defaults for missing keys, so `{}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub mode: ValidationMode,
    /// An empty optional field is not an error.
    pub required: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::OnBlur,
            required: true,
        }
    }
}

impl FieldConfig {
    /// Required field, validated on blur.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validation mode.
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set whether an empty value is rejected.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// What the caller gets back after each keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    /// Normalized digits, the field's value.
    pub digits: String,
    /// Digits grouped for display.
    pub formatted: String,
    /// Present only in [`ValidationMode::RealTime`].
    pub validation: Option<ValidationResult>,
}

/// State of one NIP input field.
#[derive(Debug, Clone, Default)]
pub struct NipField {
    config: FieldConfig,
    digits: String,
    outcome: Option<ValidationResult>,
}

impl NipField {
    /// An empty field with no outcome yet.
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            digits: String::new(),
            outcome: None,
        }
    }

    /// The configuration the field was created with.
    pub fn config(&self) -> FieldConfig {
        self.config
    }

    /// Accept the raw text of the input after a keystroke or paste.
    ///
    /// In on-blur mode any previous outcome is cleared so an error shown
    /// for an earlier value does not linger over new input.
    pub fn input(&mut self, raw: &str) -> FieldChange {
        self.digits = normalize_nip(raw);
        trace!(len = self.digits.len(), mode = ?self.config.mode, "nip field input");

        self.outcome = match self.config.mode {
            ValidationMode::RealTime => self.run_validation(),
            ValidationMode::OnBlur => None,
        };

        FieldChange {
            digits: self.digits.clone(),
            formatted: format_nip(&self.digits),
            validation: self.outcome,
        }
    }

    /// The field lost focus; validate in every mode.
    pub fn blur(&mut self) -> Option<ValidationResult> {
        self.outcome = self.run_validation();
        self.outcome
    }

    /// Back to an empty, unvalidated field with the same config.
    pub fn reset(&mut self) {
        self.digits.clear();
        self.outcome = None;
    }

    /// Normalized digits.
    pub fn value(&self) -> &str {
        &self.digits
    }

    /// Digits grouped for display.
    pub fn display(&self) -> String {
        format_nip(&self.digits)
    }

    /// Last validation outcome, if validation has run since the last reset
    /// (or, in on-blur mode, since the last input).
    pub fn outcome(&self) -> Option<ValidationResult> {
        self.outcome
    }

    /// The error to show, if any.
    pub fn error(&self) -> Option<NipError> {
        self.outcome.and_then(|o| o.error_reason.as_error())
    }

    /// Whether the last outcome was a valid NIP. `false` before validation.
    pub fn is_valid(&self) -> bool {
        self.outcome.is_some_and(|o| o.is_valid)
    }

    fn run_validation(&self) -> Option<ValidationResult> {
        if self.digits.is_empty() && !self.config.required {
            return None;
        }
        match validate_nip(&self.digits) {
            Ok(_) => Some(ValidationResult::VALID),
            Err(err) => {
                debug!(mode = ?self.config.mode, reason = %err, "nip field validation failed");
                Some(ValidationResult::invalid(err))
            }
        }
    }
}
