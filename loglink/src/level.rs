use std::fmt;
use std::str::FromStr;

/// Severity of a log message.
///
/// Levels are totally ordered, [`Level::Fatal`] being the most severe. A
/// logger with threshold `T` emits a message at level `L` iff `L >= T`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum Level {
    /// TRACE
    Trace = 0,
    /// DEBUG
    Debug = 1,
    /// INFO
    #[default]
    Info = 2,
    /// WARN
    Warn = 3,
    /// ERROR
    Error = 4,
    /// FATAL
    Fatal = 5,
}

impl Level {
    /// All levels, from the least to the most severe.
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Returns `true` if `self` is at least as severe as `threshold`.
    #[inline]
    pub fn is_equal_or_higher_than(self, threshold: Level) -> bool {
        self >= threshold
    }

    /// Upper-case name of the level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Inverse of `level as u8`.
    pub const fn from_u8(value: u8) -> Option<Level> {
        match value {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            5 => Some(Level::Fatal),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string does not name a [`Level`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level `{0}`, expected one of TRACE, DEBUG, INFO, WARN, ERROR, FATAL")]
pub struct ParseLevelError(pub(crate) String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseLevelError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn levels_are_ordered_by_severity() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[1].is_equal_or_higher_than(pair[0]));
            assert!(!pair[0].is_equal_or_higher_than(pair[1]));
        }
        assert!(Level::Warn.is_equal_or_higher_than(Level::Warn));
    }

    #[test]
    fn default_level_is_info() {
        assert_eq!(Level::default(), Level::Info);
    }

    #[test]
    fn u8_conversion_covers_every_level() {
        for level in Level::ALL {
            assert_eq!(Level::from_u8(level as u8), Some(level));
        }
        assert_eq!(Level::from_u8(6), None);
    }

    #[rstest]
    #[case("trace", Level::Trace)]
    #[case("DEBUG", Level::Debug)]
    #[case(" Info ", Level::Info)]
    #[case("warn", Level::Warn)]
    #[case("Error", Level::Error)]
    #[case("FATAL", Level::Fatal)]
    fn parse_level(#[case] input: &str, #[case] expected: Level) {
        assert_eq!(input.parse::<Level>(), Ok(expected));
    }

    #[test]
    fn parse_unknown_level_fails() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert!(err.to_string().contains("`verbose`"));
    }

    #[test]
    fn display_pads() {
        assert_eq!(format!("{:<5}|", Level::Info), "INFO |");
        assert_eq!(Level::Fatal.to_string(), "FATAL");
    }
}
