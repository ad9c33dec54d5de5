//! Prelude module for common re-exports.
//!
//! ```rust
//! use planner_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, PlannerConfig, SharedConfig};

// ─── Path Configuration ─────────────────────────────────────────────
pub use crate::path::{
    FieldError, FieldFailure, FieldOutcome, PathConfig, SettingsField, SettingsReport,
    SharedPathConfig, ValidatedSettings, ValidationError, validate_settings,
};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::{INCHES_PER_FOOT, SETTINGS_FIELD_COUNT};

// ─── Defaults Store ─────────────────────────────────────────────────
pub use crate::store::{EmbeddedSettings, HexColor, StoreError, load_store, write_store};
