//! Demo configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Which decision engine drives the guard.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Strategy {
    /// Finite state machine only.
    Fsm,
    /// Behavior tree only.
    Tree,
    /// Run both, one after the other, on identical hosts.
    #[default]
    Both,
}

impl Strategy {
    pub fn runs_fsm(self) -> bool {
        matches!(self, Strategy::Fsm | Strategy::Both)
    }

    pub fn runs_tree(self) -> bool {
        matches!(self, Strategy::Tree | Strategy::Both)
    }
}

/// Configuration for a demo run.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    /// Number of ticks to simulate.
    pub ticks: u32,
    /// Simulated ticks per second; each tick advances by `1 / tick_rate`.
    pub tick_rate: u32,
    pub strategy: Strategy,
    /// Optional directory for a `brain.log` file next to stderr output.
    pub log_dir: Option<PathBuf>,
}

impl DemoConfig {
    pub const DEFAULT_TICKS: u32 = 100;
    pub const DEFAULT_TICK_RATE: u32 = 10;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BRAIN_TICKS` - Number of simulated ticks (default: 100)
    /// - `BRAIN_TICK_RATE` - Ticks per simulated second (default: 10, min: 1)
    /// - `BRAIN_STRATEGY` - `fsm`, `tree` or `both` (default: both)
    /// - `BRAIN_LOG_DIR` - Directory for an additional log file (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`DemoConfig::from_env`] but reads values through `lookup`.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(ticks) = read::<u32>(&lookup, "BRAIN_TICKS") {
            config.ticks = ticks;
        }

        if let Some(rate) = read::<u32>(&lookup, "BRAIN_TICK_RATE") {
            config.tick_rate = rate.max(1);
        }

        if let Some(strategy) = read::<Strategy>(&lookup, "BRAIN_STRATEGY") {
            config.strategy = strategy;
        } else if let Some(raw) = lookup("BRAIN_STRATEGY") {
            tracing::warn!("Unknown BRAIN_STRATEGY {:?}, using {}", raw, config.strategy);
        }

        config.log_dir = lookup("BRAIN_LOG_DIR").map(PathBuf::from);

        config
    }

    /// Seconds per tick.
    pub fn delta_time(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            ticks: Self::DEFAULT_TICKS,
            tick_rate: Self::DEFAULT_TICK_RATE,
            strategy: Strategy::default(),
            log_dir: None,
        }
    }
}

fn read<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = DemoConfig::from_lookup(lookup(&[]));
        assert_eq!(config, DemoConfig::default());
        assert!((config.delta_time() - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn reads_all_values() {
        let config = DemoConfig::from_lookup(lookup(&[
            ("BRAIN_TICKS", "250"),
            ("BRAIN_TICK_RATE", "60"),
            ("BRAIN_STRATEGY", "Tree"),
            ("BRAIN_LOG_DIR", "/tmp/brain"),
        ]));

        assert_eq!(config.ticks, 250);
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.strategy, Strategy::Tree);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/brain")));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = DemoConfig::from_lookup(lookup(&[
            ("BRAIN_TICKS", "lots"),
            ("BRAIN_TICK_RATE", "0"),
            ("BRAIN_STRATEGY", "coin_flip"),
        ]));

        assert_eq!(config.ticks, DemoConfig::DEFAULT_TICKS);
        assert_eq!(config.tick_rate, 1);
        assert_eq!(config.strategy, Strategy::Both);
    }

    #[test]
    fn strategy_selection() {
        assert!(Strategy::Both.runs_fsm() && Strategy::Both.runs_tree());
        assert!(!Strategy::Fsm.runs_tree());
        assert_eq!(Strategy::Fsm.to_string(), "fsm");
    }
}
