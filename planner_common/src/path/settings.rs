//! Settings validation and commit.
//!
//! Raw form text is validated field by field into a [`SettingsReport`]. Every
//! field is checked even after an earlier one fails, so the caller can show
//! all errors at once. Only a fully valid report yields [`ValidatedSettings`],
//! which is the sole way to write a [`PathConfig`].
//!
//! The maximum turn radius lower bound is `1.1 ×` the *entered* minimum turn
//! radius, not the committed one.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::{PathConfig, SettingsField};
use crate::consts::{
    FIELD_LENGTH_FT_MAX, FIELD_LENGTH_FT_MIN, FIELD_WIDTH_FT_MAX, FIELD_WIDTH_FT_MIN,
    MAX_TURN_RADIUS_IN_MAX, MAX_VELOCITY_FT_S_MAX, MAX_VELOCITY_FT_S_MIN, MIN_TURN_RADIUS_IN_MAX,
    MIN_TURN_RADIUS_IN_MIN, SETTINGS_FIELD_COUNT, STEP_SIZE_IN_MAX, STEP_SIZE_IN_MIN,
    TURN_RADIUS_RATIO_DEN, TURN_RADIUS_RATIO_NUM,
};

// ─── Error Types ────────────────────────────────────────────────────

/// Why a single settings field was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// Input is not a finite number.
    #[error("could not parse {input:?} as a number")]
    ParseFailure { input: String },

    /// Parsed value is below the inclusive lower bound.
    #[error("{value} is below the minimum of {min}")]
    BelowMinimum { value: f64, min: f64 },

    /// Parsed value is above the inclusive upper bound.
    #[error("{value} is above the maximum of {max}")]
    AboveMaximum { value: f64, max: f64 },

    /// The lower bound depends on another field that did not parse.
    #[error("bound unavailable because {depends_on} is not a number")]
    BoundUnavailable { depends_on: SettingsField },
}

/// A rejected field together with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFailure {
    pub field: SettingsField,
    pub error: FieldError,
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// Settings update rejected. Lists every invalid field in form order.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} invalid setting(s): {}", .failures.len(), join_failures(.failures))]
pub struct ValidationError {
    pub failures: Vec<FieldFailure>,
}

impl ValidationError {
    /// Error reported for `field`, if it was rejected.
    pub fn for_field(&self, field: SettingsField) -> Option<&FieldError> {
        self.failures
            .iter()
            .find(|f| f.field == field)
            .map(|f| &f.error)
    }
}

fn join_failures(failures: &[FieldFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ─── Report ─────────────────────────────────────────────────────────

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    /// Accepted; holds the value in entered units.
    Valid(f64),
    /// Rejected.
    Invalid(FieldError),
}

impl FieldOutcome {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Per-field outcomes of one validation pass, in form order.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsReport {
    outcomes: [FieldOutcome; SETTINGS_FIELD_COUNT],
}

impl SettingsReport {
    /// Outcome for a single field.
    pub fn outcome(&self, field: SettingsField) -> &FieldOutcome {
        &self.outcomes[field.index()]
    }

    /// All outcomes in form order.
    pub fn outcomes(&self) -> &[FieldOutcome; SETTINGS_FIELD_COUNT] {
        &self.outcomes
    }

    /// True when every field was accepted.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(FieldOutcome::is_valid)
    }

    /// Rejected fields in form order.
    pub fn failures(&self) -> impl Iterator<Item = FieldFailure> + '_ {
        SettingsField::ALL
            .iter()
            .zip(self.outcomes.iter())
            .filter_map(|(&field, outcome)| match outcome {
                FieldOutcome::Invalid(error) => Some(FieldFailure {
                    field,
                    error: error.clone(),
                }),
                FieldOutcome::Valid(_) => None,
            })
    }

    /// Collapse into validated settings, or an error listing every failure.
    pub fn into_result(self) -> Result<ValidatedSettings, ValidationError> {
        let mut entered = [0.0; SETTINGS_FIELD_COUNT];
        let mut failures = Vec::new();
        for (field, outcome) in SettingsField::ALL.into_iter().zip(self.outcomes) {
            match outcome {
                FieldOutcome::Valid(value) => entered[field.index()] = value,
                FieldOutcome::Invalid(error) => failures.push(FieldFailure { field, error }),
            }
        }

        if !failures.is_empty() {
            return Err(ValidationError { failures });
        }
        Ok(ValidatedSettings { entered })
    }
}

// ─── Validated Settings ─────────────────────────────────────────────

/// Six mutually consistent values in entered units.
///
/// Only constructed by [`SettingsReport::into_result`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedSettings {
    entered: [f64; SETTINGS_FIELD_COUNT],
}

impl ValidatedSettings {
    /// Values as entered (ft, ft/s or in), in form order.
    pub fn entered(&self) -> &[f64; SETTINGS_FIELD_COUNT] {
        &self.entered
    }

    /// Convert to stored units.
    pub fn to_path_config(&self) -> PathConfig {
        let mut stored = self.entered;
        for field in SettingsField::ALL {
            stored[field.index()] *= field.unit_factor();
        }
        PathConfig::from_stored(stored)
    }
}

// ─── Validation ─────────────────────────────────────────────────────

/// Validate six raw inputs in form order.
///
/// Never short-circuits: every field gets an outcome.
pub fn validate_settings<S: AsRef<str>>(raw: &[S; SETTINGS_FIELD_COUNT]) -> SettingsReport {
    let parsed: [Result<f64, FieldError>; SETTINGS_FIELD_COUNT] =
        std::array::from_fn(|i| parse_entry(raw[i].as_ref()));

    let min_turn_radius = parsed[SettingsField::MinTurnRadius.index()]
        .as_ref()
        .ok()
        .copied();

    let outcomes = std::array::from_fn(|i| {
        let field = SettingsField::ALL[i];
        let checked = parsed[i]
            .clone()
            .and_then(|value| check_field(field, value, min_turn_radius));
        match checked {
            Ok(value) => FieldOutcome::Valid(value),
            Err(error) => {
                debug!(field = field.key(), %error, "settings field rejected");
                FieldOutcome::Invalid(error)
            }
        }
    });

    SettingsReport { outcomes }
}

/// Parse one text entry. Surrounding whitespace is ignored; non-finite
/// values are rejected.
fn parse_entry(input: &str) -> Result<f64, FieldError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldError::ParseFailure {
            input: input.to_string(),
        }),
    }
}

/// Range check for one parsed field.
///
/// `min_turn_radius` is the parsed (entered) minimum turn radius, or `None`
/// if it did not parse.
fn check_field(
    field: SettingsField,
    value: f64,
    min_turn_radius: Option<f64>,
) -> Result<f64, FieldError> {
    let (min, max) = match field {
        SettingsField::FieldLength => (FIELD_LENGTH_FT_MIN, FIELD_LENGTH_FT_MAX),
        SettingsField::FieldWidth => (FIELD_WIDTH_FT_MIN, FIELD_WIDTH_FT_MAX),
        SettingsField::MaxVelocity => (MAX_VELOCITY_FT_S_MIN, MAX_VELOCITY_FT_S_MAX),
        SettingsField::StepSize => (STEP_SIZE_IN_MIN, STEP_SIZE_IN_MAX),
        SettingsField::MinTurnRadius => (MIN_TURN_RADIUS_IN_MIN, MIN_TURN_RADIUS_IN_MAX),
        SettingsField::MaxTurnRadius => {
            let radius = min_turn_radius.ok_or(FieldError::BoundUnavailable {
                depends_on: SettingsField::MinTurnRadius,
            })?;
            (
                max_turn_radius_floor(radius),
                MAX_TURN_RADIUS_IN_MAX,
            )
        }
    };
    check_range(value, min, max)
}

/// Lowest accepted maximum turn radius for a given minimum turn radius.
#[inline]
pub fn max_turn_radius_floor(min_turn_radius: f64) -> f64 {
    min_turn_radius * TURN_RADIUS_RATIO_NUM / TURN_RADIUS_RATIO_DEN
}

#[inline]
fn check_range(value: f64, min: f64, max: f64) -> Result<f64, FieldError> {
    if value < min {
        Err(FieldError::BelowMinimum { value, min })
    } else if value > max {
        Err(FieldError::AboveMaximum { value, max })
    } else {
        Ok(value)
    }
}

// ─── Commit ─────────────────────────────────────────────────────────

impl PathConfig {
    /// Validate six raw inputs and, if all are valid, commit them.
    ///
    /// Inputs are in form order: field length (ft), field width (ft),
    /// maximum velocity (ft/s), step size (in), minimum turn radius (in),
    /// maximum turn radius (in).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every rejected field. The record
    /// is left untouched in that case.
    pub fn apply_settings<S: AsRef<str>>(
        &mut self,
        raw: &[S; SETTINGS_FIELD_COUNT],
    ) -> Result<(), ValidationError> {
        let validated = validate_settings(raw).into_result().inspect_err(|e| {
            warn!(rejected = e.failures.len(), "settings update rejected");
        })?;
        self.commit(validated);
        Ok(())
    }

    /// Replace all six fields with validated settings.
    pub fn commit(&mut self, settings: ValidatedSettings) {
        *self = settings.to_path_config();
        info!(
            field_length = self.field_length(),
            field_width = self.field_width(),
            max_velocity = self.max_velocity(),
            step_size = self.step_size(),
            min_turn_radius = self.min_turn_radius(),
            max_turn_radius = self.max_turn_radius(),
            "path configuration committed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: [&str; 6] = ["50", "25", "10", "2", "20", "40"];

    #[test]
    fn valid_inputs_commit_converted_values() {
        let mut cfg = PathConfig::default();
        cfg.apply_settings(&VALID).unwrap();
        assert_eq!(cfg.field_length(), 600.0);
        assert_eq!(cfg.field_width(), 300.0);
        assert_eq!(cfg.max_velocity(), 120.0);
        assert_eq!(cfg.step_size(), 2.0);
        assert_eq!(cfg.min_turn_radius(), 20.0);
        assert_eq!(cfg.max_turn_radius(), 40.0);
    }

    #[test]
    fn field_length_converted_to_inches() {
        let mut cfg = PathConfig::default();
        cfg.apply_settings(&["10.0", "5", "5", "5", "5", "6"]).unwrap();
        assert_eq!(cfg.field_length(), 120.0);
    }

    #[test]
    fn parse_failure_is_isolated_and_blocks_commit() {
        let mut cfg = PathConfig::default();
        let err = cfg
            .apply_settings(&["abc", "5", "5", "5", "5", "6"])
            .unwrap_err();

        assert_eq!(err.failures.len(), 1);
        assert_eq!(err.failures[0].field, SettingsField::FieldLength);
        assert_eq!(
            err.failures[0].error,
            FieldError::ParseFailure {
                input: "abc".to_string()
            }
        );
        assert_eq!(cfg, PathConfig::default());
    }

    #[test]
    fn every_failure_is_reported() {
        let report = validate_settings(&["-1", "x", "31", "0.5", "1001", "2000"]);
        assert!(!report.is_valid());
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 6);
        assert!(matches!(
            failures[0].error,
            FieldError::BelowMinimum { value, min } if value == -1.0 && min == 0.0
        ));
        assert!(matches!(failures[1].error, FieldError::ParseFailure { .. }));
        assert!(matches!(
            failures[2].error,
            FieldError::AboveMaximum { value, max } if value == 31.0 && max == 30.0
        ));
        assert!(matches!(failures[3].error, FieldError::BelowMinimum { .. }));
        assert!(matches!(failures[4].error, FieldError::AboveMaximum { .. }));
        // Floor computed from the out-of-range entered minimum: 1001 * 1.1.
        assert!(matches!(
            failures[5].error,
            FieldError::AboveMaximum { max, .. } if max == 1000.0
        ));
    }

    #[test]
    fn max_turn_radius_floor_uses_entered_minimum() {
        let below = validate_settings(&["50", "25", "10", "2", "10.0", "10.9"]);
        assert_eq!(
            below.outcome(SettingsField::MaxTurnRadius),
            &FieldOutcome::Invalid(FieldError::BelowMinimum {
                value: 10.9,
                min: 11.0
            })
        );

        let at_floor = validate_settings(&["50", "25", "10", "2", "10.0", "11.0"]);
        assert!(at_floor.is_valid());
    }

    #[test]
    fn max_turn_radius_ignores_committed_minimum() {
        // Committed minimum is 12.0 (floor 13.2); entered minimum 5.0 (floor 5.5).
        let mut cfg = PathConfig::default();
        cfg.apply_settings(&["50", "25", "10", "2", "5", "6"]).unwrap();
        assert_eq!(cfg.max_turn_radius(), 6.0);
    }

    #[test]
    fn unparsable_minimum_rejects_maximum() {
        let report = validate_settings(&["50", "25", "10", "2", "wide", "40"]);
        assert_eq!(
            report.outcome(SettingsField::MaxTurnRadius),
            &FieldOutcome::Invalid(FieldError::BoundUnavailable {
                depends_on: SettingsField::MinTurnRadius
            })
        );
    }

    #[test]
    fn velocity_bounds_are_inclusive() {
        for ok in ["1.0", "30.0"] {
            let report = validate_settings(&["50", "25", ok, "2", "20", "40"]);
            assert!(report.is_valid(), "{ok} should be accepted");
        }
        for bad in ["0.999", "30.001"] {
            let report = validate_settings(&["50", "25", bad, "2", "20", "40"]);
            assert!(
                !report.outcome(SettingsField::MaxVelocity).is_valid(),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn zero_field_dimensions_accepted() {
        let report = validate_settings(&["0", "0.0", "10", "2", "20", "40"]);
        assert!(report.is_valid());
    }

    #[test]
    fn non_finite_inputs_are_parse_failures() {
        for input in ["nan", "inf", "-inf", "NaN", ""] {
            let report = validate_settings(&[input, "25", "10", "2", "20", "40"]);
            assert!(
                matches!(
                    report.outcome(SettingsField::FieldLength),
                    FieldOutcome::Invalid(FieldError::ParseFailure { .. })
                ),
                "{input:?} should fail to parse"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        let report = validate_settings(&[" 50 ", "25\n", "\t10", "2", "20", "40"]);
        assert!(report.is_valid());
    }

    #[test]
    fn accepts_owned_strings() {
        let raw = VALID.map(String::from);
        assert!(validate_settings(&raw).is_valid());
    }

    #[test]
    fn validation_error_display_lists_fields() {
        let err = validate_settings(&["abc", "25", "40", "2", "20", "40"])
            .into_result()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("2 invalid setting(s)"), "got: {msg}");
        assert!(msg.contains("Field Length (ft)"), "got: {msg}");
        assert!(msg.contains("Maximum Robot Velocity (ft/s)"), "got: {msg}");
        assert!(
            matches!(
                err.for_field(SettingsField::MaxVelocity),
                Some(FieldError::AboveMaximum { .. })
            )
        );
        assert!(err.for_field(SettingsField::StepSize).is_none());
    }

    #[test]
    fn entered_defaults_round_trip_through_workflow() {
        let entry = PathConfig::default().entry_values().map(|v| v.to_string());
        let mut cfg = PathConfig::default();
        cfg.apply_settings(&entry).unwrap();
        assert_eq!(cfg, PathConfig::default());
    }
}
