use crate::Level;
use std::fmt;
use std::sync::Arc;

/// A record delivered to [`LoggerEventListener`]s after a message passed the
/// threshold check of its logger.
///
/// Events are built only at emission time and never stored by the loggers
/// themselves. The message is the final text: placeholders are already
/// substituted and, for errors, the error kind is prefixed.
///
/// [`LoggerEventListener`]: crate::LoggerEventListener
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEvent {
    level: Level,
    #[cfg_attr(feature = "with-serde", serde(rename = "name"))]
    logger_name: Arc<str>,
    message: String,
}

impl LogEvent {
    /// Create a new event.
    pub fn new(level: Level, logger_name: impl Into<Arc<str>>, message: impl Into<String>) -> Self {
        LogEvent {
            level,
            logger_name: logger_name.into(),
            message: message.into(),
        }
    }

    /// Level the message was logged at.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Canonical name of the emitting logger.
    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    /// Fully rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{level={}, name='{}', message='{}'}}",
            self.level, self.logger_name, self.message
        )
    }
}
