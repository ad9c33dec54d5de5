//! Path Planner Common Library
//!
//! Field and robot kinematic configuration for the path planner, the
//! validated settings workflow that updates it, application configuration
//! loading, and the persistent defaults store read by front ends at startup.
//!
//! # Module Structure
//!
//! - [`consts`] - Defaults, entry bounds and unit factors
//! - [`path`] - Path configuration and the settings validation/commit workflow
//! - [`config`] - Application configuration loading
//! - [`store`] - Persistent defaults store (colors, fonts, labels, filters)
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use planner_common::prelude::*;
//!
//! let mut path = PathConfig::default();
//! path.apply_settings(&["10", "20", "12", "1", "12", "24"]).unwrap();
//! assert_eq!(path.field_length(), 120.0);
//!
//! let err = path.apply_settings(&["abc", "5", "5", "5", "5", "6"]).unwrap_err();
//! assert_eq!(err.failures.len(), 1);
//! assert_eq!(path.field_length(), 120.0);
//! ```

pub mod config;
pub mod consts;
pub mod path;
pub mod prelude;
pub mod store;
