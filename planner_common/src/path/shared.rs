//! Shared path configuration handle.
//!
//! Wraps [`PathConfig`] for a planner running on another thread. Validation
//! runs outside the lock; the commit replaces the whole record under the
//! write lock, and readers copy the record under the read lock, so a reader
//! never sees a mix of old and new fields.

use std::sync::Arc;

use parking_lot::RwLock;

use super::settings::{ValidationError, validate_settings};
use super::PathConfig;
use crate::consts::SETTINGS_FIELD_COUNT;

/// Cloneable handle to the process-wide path configuration.
#[derive(Debug, Clone, Default)]
pub struct SharedPathConfig {
    inner: Arc<RwLock<PathConfig>>,
}

impl SharedPathConfig {
    pub fn new(config: PathConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Copy of the current record.
    #[inline]
    pub fn snapshot(&self) -> PathConfig {
        *self.inner.read()
    }

    /// Validate and commit, see [`PathConfig::apply_settings`].
    pub fn apply_settings<S: AsRef<str>>(
        &self,
        raw: &[S; SETTINGS_FIELD_COUNT],
    ) -> Result<(), ValidationError> {
        let validated = validate_settings(raw).into_result()?;
        self.inner.write().commit(validated);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_one_record() {
        let shared = SharedPathConfig::default();
        let reader = shared.clone();

        shared
            .apply_settings(&["10", "10", "10", "10", "10", "11"])
            .unwrap();
        assert_eq!(reader.snapshot().field_length(), 120.0);
    }

    #[test]
    fn rejected_update_leaves_record() {
        let shared = SharedPathConfig::default();
        let before = shared.snapshot();
        assert!(shared
            .apply_settings(&["10", "10", "10", "10", "10", "10.9"])
            .is_err());
        assert_eq!(shared.snapshot(), before);
    }

    #[test]
    fn readers_never_observe_mixed_records() {
        let shared = SharedPathConfig::default();
        let a = ["10", "10", "10", "10", "10", "11"];
        let b = ["20", "20", "20", "20", "20", "22"];

        let writer = {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..2_000 {
                    let raw = if i % 2 == 0 { &a } else { &b };
                    shared.apply_settings(raw).unwrap();
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..2_000 {
                        let cfg = shared.snapshot();
                        assert!(cfg.max_turn_radius() >= cfg.min_turn_radius() * 1.1 - 1e-9);
                        // Each committed record has step size equal to min turn radius.
                        if cfg != PathConfig::default() {
                            assert_eq!(cfg.step_size(), cfg.min_turn_radius());
                            assert_eq!(cfg.field_length(), cfg.step_size() * 12.0);
                        }
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for r in readers {
            r.join().unwrap();
        }
    }
}
