//! Registry configuration.
//!
//! The defaults are read from the environment when a [`RegistryConfig`] is
//! created and may be overridden programmatically through
//! [`RegistryBuilder`](crate::RegistryBuilder). The supported variables are:
//!
//! * `LOGLINK_LEVEL`: threshold given to new loggers, e.g. `debug`.
//! * `LOGLINK_LEVELS`: comma separated `prefix=level` pairs, e.g.
//!   `o.e=warn,o.e.db=trace`. A new logger whose name starts with one of the
//!   prefixes gets that level instead of the default; the longest matching
//!   prefix wins.
//!
//! Values that do not parse are ignored.
use loglink::{loglink_warn, Level};
use std::env;

/// Default threshold for new loggers.
pub const LOGLINK_LEVEL: &str = "LOGLINK_LEVEL";
/// Per-prefix thresholds for new loggers.
pub const LOGLINK_LEVELS: &str = "LOGLINK_LEVELS";
/// Threshold used when `LOGLINK_LEVEL` is unset.
pub const LOGLINK_LEVEL_DEFAULT: Level = Level::Info;

/// Defaults applied to loggers at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Threshold of loggers no override applies to.
    pub default_level: Level,
    /// `(prefix, level)` pairs, in the order they were configured.
    pub level_overrides: Vec<(String, Level)>,
}

impl Default for RegistryConfig {
    /// Reads `LOGLINK_LEVEL` and `LOGLINK_LEVELS`.
    fn default() -> Self {
        RegistryConfig {
            default_level: LOGLINK_LEVEL_DEFAULT,
            level_overrides: Vec::new(),
        }
        .init_from_env_vars()
    }
}

impl RegistryConfig {
    /// Initial threshold of a logger called `name`.
    pub fn initial_level(&self, name: &str) -> Level {
        self.level_overrides
            .iter()
            .filter(|(prefix, _)| name.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map_or(self.default_level, |(_, level)| *level)
    }

    /// Add an override, replacing an earlier one for the same prefix.
    pub(crate) fn push_override(&mut self, prefix: String, level: Level) {
        self.level_overrides.retain(|(existing, _)| *existing != prefix);
        self.level_overrides.push((prefix, level));
    }

    fn init_from_env_vars(mut self) -> Self {
        if let Ok(value) = env::var(LOGLINK_LEVEL) {
            match value.parse() {
                Ok(level) => self.default_level = level,
                Err(err) => {
                    loglink_warn!(
                        name: "RegistryConfig.InvalidLevel",
                        variable = LOGLINK_LEVEL,
                        error = format!("{err}")
                    );
                }
            }
        }

        if let Ok(value) = env::var(LOGLINK_LEVELS) {
            for entry in value.split(',').map(str::trim).filter(|e| !e.is_empty()) {
                match parse_override(entry) {
                    Some((prefix, level)) => self.push_override(prefix.to_owned(), level),
                    None => {
                        loglink_warn!(
                            name: "RegistryConfig.InvalidLevelOverride",
                            variable = LOGLINK_LEVELS,
                            entry = entry.to_owned()
                        );
                    }
                }
            }
        }

        self
    }
}

fn parse_override(entry: &str) -> Option<(&str, Level)> {
    let (prefix, level) = entry.split_once('=')?;
    Some((prefix.trim(), level.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_const_values() {
        assert_eq!(LOGLINK_LEVEL, "LOGLINK_LEVEL");
        assert_eq!(LOGLINK_LEVELS, "LOGLINK_LEVELS");
        assert_eq!(LOGLINK_LEVEL_DEFAULT, Level::Info);
    }

    #[test]
    fn test_default_without_env_vars() {
        let config =
            temp_env::with_vars_unset([LOGLINK_LEVEL, LOGLINK_LEVELS], RegistryConfig::default);
        assert_eq!(config.default_level, LOGLINK_LEVEL_DEFAULT);
        assert!(config.level_overrides.is_empty());
    }

    #[test]
    fn test_config_from_env_vars() {
        let env_vars = [
            (LOGLINK_LEVEL, Some("debug")),
            (LOGLINK_LEVELS, Some("o.e=warn, o.e.db = TRACE ,,")),
        ];
        let config = temp_env::with_vars(env_vars, RegistryConfig::default);
        assert_eq!(config.default_level, Level::Debug);
        assert_eq!(
            config.level_overrides,
            vec![("o.e".to_owned(), Level::Warn), ("o.e.db".to_owned(), Level::Trace)]
        );
    }

    #[test]
    fn test_invalid_env_vars_are_ignored() {
        let env_vars = [
            (LOGLINK_LEVEL, Some("loud")),
            (LOGLINK_LEVELS, Some("svc,a=nope,b=error")),
        ];
        let config = temp_env::with_vars(env_vars, RegistryConfig::default);
        assert_eq!(config.default_level, LOGLINK_LEVEL_DEFAULT);
        assert_eq!(config.level_overrides, vec![("b".to_owned(), Level::Error)]);
    }

    #[rstest]
    #[case("o.e.db.Pool", Level::Trace)]
    #[case("o.e.Widget", Level::Warn)]
    #[case("o.x", Level::Info)]
    #[case("svc", Level::Info)]
    fn test_longest_prefix_wins(#[case] name: &str, #[case] expected: Level) {
        let config = RegistryConfig {
            default_level: Level::Info,
            level_overrides: vec![
                ("o.e".to_owned(), Level::Warn),
                ("o.e.db".to_owned(), Level::Trace),
            ],
        };
        assert_eq!(config.initial_level(name), expected);
    }

    #[test]
    fn test_push_override_replaces_same_prefix() {
        let mut config =
            temp_env::with_vars_unset([LOGLINK_LEVEL, LOGLINK_LEVELS], RegistryConfig::default);
        config.push_override("a".to_owned(), Level::Warn);
        config.push_override("a".to_owned(), Level::Error);
        assert_eq!(config.initial_level("a.b"), Level::Error);
        assert_eq!(config.level_overrides.len(), 1);
    }
}
