//! Path configuration model.
//!
//! - [`PathConfig`] - The six planning parameters (stored units).
//! - [`SettingsField`] - Field order, labels and entry units of the settings form.
//! - [`settings`] - Validation/commit workflow.
//! - [`shared`] - Snapshot handle for planners running on another thread.

pub mod settings;
pub mod shared;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::consts::{
    DEFAULT_FIELD_LENGTH_IN, DEFAULT_FIELD_WIDTH_IN, DEFAULT_MAX_TURN_RADIUS_IN,
    DEFAULT_MAX_VELOCITY_IN_S, DEFAULT_MIN_TURN_RADIUS_IN, DEFAULT_STEP_SIZE_IN,
    INCHES_PER_FOOT, SETTINGS_FIELD_COUNT,
};

pub use settings::{
    FieldError, FieldFailure, FieldOutcome, SettingsReport, ValidatedSettings, ValidationError,
    validate_settings,
};
pub use shared::SharedPathConfig;

// ─── Settings Fields ────────────────────────────────────────────────

/// One entry of the settings form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsField {
    FieldLength,
    FieldWidth,
    MaxVelocity,
    StepSize,
    MinTurnRadius,
    MaxTurnRadius,
}

impl SettingsField {
    /// All fields in the order raw inputs are supplied.
    pub const ALL: [SettingsField; SETTINGS_FIELD_COUNT] = [
        Self::FieldLength,
        Self::FieldWidth,
        Self::MaxVelocity,
        Self::StepSize,
        Self::MinTurnRadius,
        Self::MaxTurnRadius,
    ];

    /// Zero-based position in the raw input array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Form label shown next to the text entry.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FieldLength => "Field Length (ft)",
            Self::FieldWidth => "Field Width (ft)",
            Self::MaxVelocity => "Maximum Robot Velocity (ft/s)",
            Self::StepSize => "Step Size (in)",
            Self::MinTurnRadius => "Minimum Turn Radius (in)",
            Self::MaxTurnRadius => "Maximum Turn Radius (in)",
        }
    }

    /// Factor from entered units to stored units.
    pub const fn unit_factor(self) -> f64 {
        match self {
            Self::FieldLength | Self::FieldWidth | Self::MaxVelocity => INCHES_PER_FOOT,
            Self::StepSize | Self::MinTurnRadius | Self::MaxTurnRadius => 1.0,
        }
    }

    /// Snake-case key, matching the serde name.
    pub const fn key(self) -> &'static str {
        match self {
            Self::FieldLength => "field_length",
            Self::FieldWidth => "field_width",
            Self::MaxVelocity => "max_velocity",
            Self::StepSize => "step_size",
            Self::MinTurnRadius => "min_turn_radius",
            Self::MaxTurnRadius => "max_turn_radius",
        }
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─── Path Configuration ─────────────────────────────────────────────

/// Field and robot kinematic parameters consumed by the path planner.
///
/// All lengths are inches and the velocity is inches/second. Fields are only
/// written by [`PathConfig::apply_settings`], which commits all six at once,
/// so a value read from here always satisfies
/// `max_turn_radius >= 1.1 * min_turn_radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathConfig {
    field_length: f64,
    field_width: f64,
    max_velocity: f64,
    step_size: f64,
    min_turn_radius: f64,
    max_turn_radius: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            field_length: DEFAULT_FIELD_LENGTH_IN,
            field_width: DEFAULT_FIELD_WIDTH_IN,
            max_velocity: DEFAULT_MAX_VELOCITY_IN_S,
            step_size: DEFAULT_STEP_SIZE_IN,
            min_turn_radius: DEFAULT_MIN_TURN_RADIUS_IN,
            max_turn_radius: DEFAULT_MAX_TURN_RADIUS_IN,
        }
    }
}

impl PathConfig {
    /// Length of the field [in].
    #[inline]
    pub fn field_length(&self) -> f64 {
        self.field_length
    }

    /// Width of the field [in].
    #[inline]
    pub fn field_width(&self) -> f64 {
        self.field_width
    }

    /// Maximum robot velocity [in/s].
    #[inline]
    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    /// Path step size [in].
    #[inline]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Minimum robot turn radius [in].
    #[inline]
    pub fn min_turn_radius(&self) -> f64 {
        self.min_turn_radius
    }

    /// Maximum robot turn radius [in].
    #[inline]
    pub fn max_turn_radius(&self) -> f64 {
        self.max_turn_radius
    }

    /// Stored value of one field.
    pub fn get(&self, field: SettingsField) -> f64 {
        match field {
            SettingsField::FieldLength => self.field_length,
            SettingsField::FieldWidth => self.field_width,
            SettingsField::MaxVelocity => self.max_velocity,
            SettingsField::StepSize => self.step_size,
            SettingsField::MinTurnRadius => self.min_turn_radius,
            SettingsField::MaxTurnRadius => self.max_turn_radius,
        }
    }

    /// Values converted back to entered units, in form order.
    /// Used to prefill the settings form.
    pub fn entry_values(&self) -> [f64; SETTINGS_FIELD_COUNT] {
        SettingsField::ALL.map(|f| self.get(f) / f.unit_factor())
    }

    /// Build a record from already-validated stored values.
    pub(crate) fn from_stored(values: [f64; SETTINGS_FIELD_COUNT]) -> Self {
        let [
            field_length,
            field_width,
            max_velocity,
            step_size,
            min_turn_radius,
            max_turn_radius,
        ] = values;
        Self {
            field_length,
            field_width,
            max_velocity,
            step_size,
            min_turn_radius,
            max_turn_radius,
        }
    }
}
