//! Runtime configuration loaded from RON.
use std::path::Path;

use adventure_core::PathfinderConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::events::EventBus;
use crate::timers::TurnTimerInfo;

/// Timer budgets and how often their state is broadcast.
///
/// A counter still above `propagate_threshold` is broadcast every
/// `propagate_frequency` milliseconds; closer to zero the tighter
/// `propagate_frequency_critical` applies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Budget handed to every player. All zeros disables timers.
    pub budget: TurnTimerInfo,
    pub propagate_frequency: i32,
    pub propagate_frequency_critical: i32,
    pub propagate_threshold: i32,
}

impl TimerConfig {
    pub const DEFAULT_PROPAGATE_FREQUENCY: i32 = 5000;
    pub const DEFAULT_PROPAGATE_FREQUENCY_CRITICAL: i32 = 1000;
    pub const DEFAULT_PROPAGATE_THRESHOLD: i32 = 3000;

    pub fn new(budget: TurnTimerInfo) -> Self {
        Self {
            budget,
            propagate_frequency: Self::DEFAULT_PROPAGATE_FREQUENCY,
            propagate_frequency_critical: Self::DEFAULT_PROPAGATE_FREQUENCY_CRITICAL,
            propagate_threshold: Self::DEFAULT_PROPAGATE_THRESHOLD,
        }
    }

    /// Frequency to use for a counter at `remaining` milliseconds.
    pub fn frequency_for(&self, remaining: i32) -> i32 {
        if remaining > self.propagate_threshold {
            self.propagate_frequency
        } else {
            self.propagate_frequency_critical
        }
    }

    /// Rejects negative budgets and non-positive broadcast frequencies.
    pub fn validate(&self) -> Result<()> {
        let budget = &self.budget;
        let budgets = [
            ("base_timer", budget.base_timer),
            ("turn_timer", budget.turn_timer),
            ("battle_timer", budget.battle_timer),
            ("creature_timer", budget.creature_timer),
        ];
        if let Some((name, value)) = budgets.iter().find(|(_, value)| *value < 0) {
            return Err(ConfigError::InvalidTimer(format!(
                "{name} must not be negative, got {value}"
            )));
        }

        if self.propagate_frequency <= 0 || self.propagate_frequency_critical <= 0 {
            return Err(ConfigError::InvalidTimer(format!(
                "propagate frequencies must be positive, got {} and {}",
                self.propagate_frequency, self.propagate_frequency_critical
            )));
        }

        if self.propagate_threshold < 0 {
            return Err(ConfigError::InvalidTimer(format!(
                "propagate_threshold must not be negative, got {}",
                self.propagate_threshold
            )));
        }

        Ok(())
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new(TurnTimerInfo::default())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub pathfinder: PathfinderConfig,
    pub timers: TimerConfig,
    /// Capacity of each event bus topic.
    pub event_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

    /// Event bus sized per `event_buffer_size`.
    pub fn event_bus(&self) -> EventBus {
        EventBus::with_capacity(self.event_buffer_size)
    }

    /// Parses and validates a RON document.
    pub fn from_ron_str(content: &str) -> Result<Self> {
        let config: RuntimeConfig = ron::from_str(content)?;
        config.timers.validate()?;
        Ok(config)
    }

    /// Load runtime configuration from a RON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_ron_str(&content)?;
        tracing::debug!(
            target: "runtime::config",
            path = %path.display(),
            timers_enabled = config.timers.budget.is_enabled(),
            "loaded runtime config"
        );
        Ok(config)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            pathfinder: PathfinderConfig::default(),
            timers: TimerConfig::default(),
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_tightens_at_threshold() {
        let config = TimerConfig::default();
        assert_eq!(config.frequency_for(3001), 5000);
        assert_eq!(config.frequency_for(3000), 1000);
        assert_eq!(config.frequency_for(-5), 1000);
    }

    #[test]
    fn negative_budget_is_rejected() {
        let config = TimerConfig::new(TurnTimerInfo::new(0, -1, 0, 0));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimer(ref msg) if msg.contains("turn_timer")));
    }

    #[test]
    fn zero_frequency_is_rejected() {
        let config = TimerConfig {
            propagate_frequency_critical: 0,
            ..TimerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = RuntimeConfig::from_ron_str("(timers: (budget: (turn_timer: 60000)))").unwrap();

        assert_eq!(config.timers.budget.turn_timer, 60000);
        assert_eq!(config.timers.propagate_frequency, 5000);
        assert_eq!(config.pathfinder, PathfinderConfig::default());
        assert_eq!(config.event_buffer_size, 100);
    }
}
