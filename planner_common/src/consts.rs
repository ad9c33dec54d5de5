//! Planner-wide constants.
//!
//! Single source of truth for path configuration defaults, entry bounds and
//! unit factors. Stored values are inches and inches/second; bounds apply to
//! the values as entered (feet, feet/second or inches, per field).

use static_assertions::const_assert;

/// Number of settings fields accepted by the settings workflow.
pub const SETTINGS_FIELD_COUNT: usize = 6;

/// Inches per foot. Applied on commit to length and velocity fields.
pub const INCHES_PER_FOOT: f64 = 12.0;

// ─── Defaults (stored units) ────────────────────────────────────────

/// Default field length [in] (52.4375 ft).
pub const DEFAULT_FIELD_LENGTH_IN: f64 = 12.0 * 52.4375;

/// Default field width [in] (26.9375 ft).
pub const DEFAULT_FIELD_WIDTH_IN: f64 = 12.0 * 26.9375;

/// Default maximum robot velocity [in/s] (15 ft/s).
pub const DEFAULT_MAX_VELOCITY_IN_S: f64 = 12.0 * 15.0;

/// Default path step size [in].
pub const DEFAULT_STEP_SIZE_IN: f64 = 1.0;

/// Default minimum turn radius [in].
pub const DEFAULT_MIN_TURN_RADIUS_IN: f64 = 12.0;

/// Default maximum turn radius [in].
pub const DEFAULT_MAX_TURN_RADIUS_IN: f64 = 100.0;

// ─── Entry bounds (entered units, inclusive) ────────────────────────

/// Field length bounds [ft].
pub const FIELD_LENGTH_FT_MIN: f64 = 0.0;
pub const FIELD_LENGTH_FT_MAX: f64 = 100.0;

/// Field width bounds [ft].
pub const FIELD_WIDTH_FT_MIN: f64 = 0.0;
pub const FIELD_WIDTH_FT_MAX: f64 = 100.0;

/// Maximum velocity bounds [ft/s].
pub const MAX_VELOCITY_FT_S_MIN: f64 = 1.0;
pub const MAX_VELOCITY_FT_S_MAX: f64 = 30.0;

/// Step size bounds [in].
pub const STEP_SIZE_IN_MIN: f64 = 1.0;
pub const STEP_SIZE_IN_MAX: f64 = 100.0;

/// Minimum turn radius bounds [in].
pub const MIN_TURN_RADIUS_IN_MIN: f64 = 1.0;
pub const MIN_TURN_RADIUS_IN_MAX: f64 = 1000.0;

/// Maximum turn radius upper bound [in]. The lower bound is relative to the
/// entered minimum turn radius.
pub const MAX_TURN_RADIUS_IN_MAX: f64 = 1000.0;

/// Maximum turn radius must be at least `min * NUM / DEN` (i.e. 1.1 × min).
/// Kept as a ratio so that decimal boundaries such as 10.0 → 11.0 are exact.
pub const TURN_RADIUS_RATIO_NUM: f64 = 11.0;
pub const TURN_RADIUS_RATIO_DEN: f64 = 10.0;

// ─── Persistent defaults store ──────────────────────────────────────

/// Default location of the persistent defaults store.
pub const DEFAULT_STORE_PATH: &str = "vars/settings.toml";

/// Default application configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/planner.toml";

/// Timestamp format written to the defaults store.
pub const STORE_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

const_assert!(DEFAULT_MAX_TURN_RADIUS_IN >= DEFAULT_MIN_TURN_RADIUS_IN * 1.1);
const_assert!(DEFAULT_MAX_VELOCITY_IN_S / INCHES_PER_FOOT >= MAX_VELOCITY_FT_S_MIN);
const_assert!(DEFAULT_FIELD_LENGTH_IN / INCHES_PER_FOOT <= FIELD_LENGTH_FT_MAX);
