//! Tunable scheduler constants.
//!
//! The defaults are the Anki-style percentages the scheduler was designed around;
//! a TOML file may override any subset of them.

use crate::error::{Error, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest accepted `max_interval`, in days (100 years).
pub const MAX_INTERVAL_LIMIT: u32 = 36_500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Upper bound on any computed interval, in days (100 years).
    pub max_interval: u32,
    /// Ease assumed for a card that has never been reviewed.
    pub starting_ease: f64,
    /// Floor for the ease factor.
    pub minimum_ease: f64,

    /// Learning-phase delays, in minutes.
    pub again_delay_minutes: i64,
    pub hard_delay_minutes: i64,
    /// Learning-phase "good" and "perfect" intervals, in days.
    pub good_interval: u32,
    pub perfect_interval: u32,
    /// Repetition number reached by a learning-phase "perfect".
    pub perfect_repetition: u32,

    /// Ease adjustments in percentage points (2.5 == 250).
    pub again_ease_delta: f64,
    pub hard_ease_delta: f64,
    pub perfect_ease_delta: f64,

    /// Share of the old interval kept after a lapse.
    pub lapse_interval_factor: f64,
    pub hard_interval_factor: f64,
    pub easy_bonus: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_interval: 36_500,
            starting_ease: 2.5,
            minimum_ease: 1.3,
            again_delay_minutes: 10,
            hard_delay_minutes: 60,
            good_interval: 1,
            perfect_interval: 4,
            perfect_repetition: 2,
            again_ease_delta: -20.0,
            hard_ease_delta: -15.0,
            perfect_ease_delta: 15.0,
            lapse_interval_factor: 0.2,
            hard_interval_factor: 1.2,
            easy_bonus: 1.3,
        }
    }
}

impl SchedulerConfig {
    /// Reads and validates a config file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: SchedulerConfig = toml::from_str(&contents)?;
        config.validate()?;
        log::info!("Loaded scheduler config from '{}'", path.as_ref().display());
        Ok(config)
    }

    /// Checks that every value keeps the scheduler inside its invariants.
    pub fn validate(&self) -> Result<()> {
        if self.max_interval == 0 || self.max_interval > MAX_INTERVAL_LIMIT {
            return Err(invalid(format!(
                "max_interval must be between 1 and {}, got {}",
                MAX_INTERVAL_LIMIT, self.max_interval
            )));
        }
        if !self.minimum_ease.is_finite() || self.minimum_ease <= 0.0 {
            return Err(invalid(format!(
                "minimum_ease must be a positive number, got {}",
                self.minimum_ease
            )));
        }
        if !self.starting_ease.is_finite() || self.starting_ease < self.minimum_ease {
            return Err(invalid(format!(
                "starting_ease must be at least minimum_ease ({}), got {}",
                self.minimum_ease, self.starting_ease
            )));
        }

        let max_delay_minutes = i64::from(MAX_INTERVAL_LIMIT) * 24 * 60;
        for (name, minutes) in [
            ("again_delay_minutes", self.again_delay_minutes),
            ("hard_delay_minutes", self.hard_delay_minutes),
        ] {
            if !(0..=max_delay_minutes).contains(&minutes) {
                return Err(invalid(format!(
                    "{} must be between 0 and {}, got {}",
                    name, max_delay_minutes, minutes
                )));
            }
        }

        for (name, value) in [
            ("again_ease_delta", self.again_ease_delta),
            ("hard_ease_delta", self.hard_ease_delta),
            ("perfect_ease_delta", self.perfect_ease_delta),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("{} must be finite, got {}", name, value)));
            }
        }

        for (name, value) in [
            ("lapse_interval_factor", self.lapse_interval_factor),
            ("hard_interval_factor", self.hard_interval_factor),
            ("easy_bonus", self.easy_bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// `None` only for a delay too large to represent.
    pub(crate) fn again_delay(&self) -> Option<Duration> {
        Duration::try_minutes(self.again_delay_minutes)
    }

    pub(crate) fn hard_delay(&self) -> Option<Duration> {
        Duration::try_minutes(self.hard_delay_minutes)
    }

    pub(crate) fn minimum_ease_percentage(&self) -> f64 {
        self.minimum_ease * 100.0
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfig(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::default();
        assert_eq!(config.max_interval, 36_500);
        assert_eq!(config.starting_ease, 2.5);
        assert_eq!(config.minimum_ease, 1.3);
        assert_eq!(config.again_delay(), Some(Duration::minutes(10)));
        assert_eq!(config.hard_delay(), Some(Duration::hours(1)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SchedulerConfig =
            toml::from_str("max_interval = 365\neasy_bonus = 1.5\n").unwrap();
        assert_eq!(config.max_interval, 365);
        assert_eq!(config.easy_bonus, 1.5);
        assert_eq!(config.hard_interval_factor, 1.2);
        assert_eq!(config.starting_ease, 2.5);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "again_delay_minutes = 5").unwrap();

        let config = SchedulerConfig::load(file.path()).unwrap();
        assert_eq!(config.again_delay(), Some(Duration::minutes(5)));
        assert_eq!(config.max_interval, 36_500);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_interval = \"forever\"").unwrap();

        assert!(SchedulerConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(SchedulerConfig::load("nonexistent_config_xyz123.toml").is_err());
    }

    fn assert_rejected(toml_text: &str) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", toml_text).unwrap();

        let result = SchedulerConfig::load(file.path());
        assert!(
            matches!(result, Err(Error::InvalidConfig(_))),
            "{:?} should be rejected, got {:?}",
            toml_text,
            result
        );
    }

    #[test]
    fn test_rejects_max_interval_out_of_range() {
        assert_rejected("max_interval = 4000000000");
        assert_rejected("max_interval = 36501");
        assert_rejected("max_interval = 0");
    }

    #[test]
    fn test_rejects_minimum_ease_above_starting_ease() {
        assert_rejected("minimum_ease = 3.0");
        assert_rejected("starting_ease = 1.2");
        assert_rejected("minimum_ease = 0.0");
        assert_rejected("minimum_ease = nan");
    }

    #[test]
    fn test_rejects_bad_delays() {
        assert_rejected("again_delay_minutes = -10");
        assert_rejected("hard_delay_minutes = -1");
        assert_rejected("hard_delay_minutes = 9223372036854775807");
    }

    #[test]
    fn test_rejects_non_finite_or_negative_factors() {
        assert_rejected("easy_bonus = nan");
        assert_rejected("hard_interval_factor = inf");
        assert_rejected("lapse_interval_factor = -0.2");
        assert_rejected("perfect_ease_delta = nan");
        assert_rejected("again_ease_delta = -inf");
    }

    #[test]
    fn test_accepts_edge_values() {
        let config = SchedulerConfig {
            max_interval: MAX_INTERVAL_LIMIT,
            starting_ease: 1.3,
            again_delay_minutes: 0,
            lapse_interval_factor: 0.0,
            ..SchedulerConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
