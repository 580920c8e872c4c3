//! No-op implementations of [`Logger`] and [`LoggerFactory`].
//!
//! Useful for libraries and tests that need a logger but no output. The
//! no-op logger never enables any level, keeps no listeners and the no-op
//! factory registers nothing.
use crate::{
    error::LoggerResult, DefaultFormatter, Level, Logger, LoggerError, LoggerEventListener,
    LoggerFactory, LoggerFormatter, Throwable,
};
use std::fmt::Display;
use std::sync::Arc;

/// A logger that discards everything.
#[derive(Debug, Clone)]
pub struct NoopLogger {
    name: Arc<str>,
}

impl NoopLogger {
    /// Create a new no-op logger.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        NoopLogger { name: name.into() }
    }
}

impl Logger for NoopLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> Level {
        Level::Fatal
    }

    fn set_level(&self, _level: Level) {}

    fn formatter(&self) -> Arc<dyn LoggerFormatter> {
        Arc::new(DefaultFormatter)
    }

    fn set_formatter(&self, _formatter: Arc<dyn LoggerFormatter>) {}

    fn add_listener(&self, _listener: Arc<dyn LoggerEventListener>) {}

    fn remove_listener(&self, _listener: &Arc<dyn LoggerEventListener>) {}

    #[inline]
    fn is_enabled(&self, _level: Level) -> bool {
        false
    }

    fn log(&self, _level: Level, _message: &str) {}

    fn log_args(&self, _level: Level, _template: &str, _args: &[&dyn Display]) {}

    fn log_throwable(
        &self,
        _level: Level,
        _throwable: &Throwable<'_>,
        _template: Option<&str>,
        _args: &[&dyn Display],
    ) {
    }
}

/// A factory handing out [`NoopLogger`]s.
#[derive(Debug, Clone, Default)]
pub struct NoopLoggerFactory(());

impl NoopLoggerFactory {
    /// Create a new no-op factory.
    pub fn new() -> Self {
        NoopLoggerFactory(())
    }
}

impl LoggerFactory for NoopLoggerFactory {
    type Logger = NoopLogger;

    fn create(&self, name: &str) -> LoggerResult<Arc<Self::Logger>> {
        if name.is_empty() {
            return Err(LoggerError::InvalidArgument(
                "logger name must not be empty".into(),
            ));
        }
        Ok(Arc::new(NoopLogger::new(name)))
    }

    fn logger(&self, _name: &str) -> Option<Arc<Self::Logger>> {
        None
    }

    fn formatter(&self) -> Arc<dyn LoggerFormatter> {
        Arc::new(DefaultFormatter)
    }

    fn set_formatter(&self, _formatter: Arc<dyn LoggerFormatter>) {}

    fn default_level(&self) -> Level {
        Level::Fatal
    }

    fn set_default_level(&self, _level: Level) {}

    fn add_listener(&self, _listener: Arc<dyn LoggerEventListener>) {}

    fn remove_listener(&self, _listener: &Arc<dyn LoggerEventListener>) {}

    fn loggers(&self) -> impl Iterator<Item = (String, Arc<Self::Logger>)> {
        std::iter::empty()
    }

    fn listeners(&self) -> impl Iterator<Item = Arc<dyn LoggerEventListener>> {
        std::iter::empty()
    }

    fn set_level(&self, _prefix: &str, _level: Level) {}
}
