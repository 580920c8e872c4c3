use crate::{
    error::LoggerResult, name, Level, LoggerEventListener, LoggerFormatter, Throwable,
};
use std::fmt::Display;
use std::sync::Arc;

macro_rules! level_methods {
    ($level:expr, $label:literal, $plain:ident, $args:ident, $throwable:ident, $throwable_args:ident) => {
        #[doc = concat!("Log a plain message at ", $label, ".")]
        #[inline]
        fn $plain(&self, message: &str) {
            self.log($level, message)
        }

        #[doc = concat!("Log a `{}` template with its arguments at ", $label, ".")]
        #[inline]
        fn $args(&self, template: &str, args: &[&dyn Display]) {
            self.log_args($level, template, args)
        }

        #[doc = concat!("Log an error at ", $label, ".")]
        #[inline]
        fn $throwable(&self, throwable: &Throwable<'_>) {
            self.log_throwable($level, throwable, None, &[])
        }

        #[doc = concat!("Log an error with a `{}` template and its arguments at ", $label, ".")]
        #[inline]
        fn $throwable_args(&self, throwable: &Throwable<'_>, template: &str, args: &[&dyn Display]) {
            self.log_throwable($level, throwable, Some(template), args)
        }
    };
}

/// A named logging channel gated by a severity threshold.
///
/// Implementations must check the threshold before doing anything else: a
/// call below the threshold has no observable effect and must not render its
/// message. Accepted calls are forwarded to the implementation's backend and
/// mirrored to the registered [`LoggerEventListener`]s as [`LogEvent`]s.
///
/// Only the three `log*` entry points are required; the per-level methods
/// (`trace` .. `fatal_throwable_args`) delegate to them.
///
/// [`LogEvent`]: crate::LogEvent
pub trait Logger: Send + Sync {
    /// Canonical name of this logger.
    fn name(&self) -> &str;

    /// Current threshold.
    fn level(&self) -> Level;

    /// Replace the threshold.
    fn set_level(&self, level: Level);

    /// Current formatter.
    fn formatter(&self) -> Arc<dyn LoggerFormatter>;

    /// Replace the formatter.
    fn set_formatter(&self, formatter: Arc<dyn LoggerFormatter>);

    /// Register a listener. Registering the same `Arc` twice is a no-op.
    fn add_listener(&self, listener: Arc<dyn LoggerEventListener>);

    /// Unregister a listener by identity. Unknown listeners are ignored.
    fn remove_listener(&self, listener: &Arc<dyn LoggerEventListener>);

    /// Returns `true` if a message at `level` would be emitted.
    #[inline]
    fn is_enabled(&self, level: Level) -> bool {
        level.is_equal_or_higher_than(self.level())
    }

    /// Log a plain message.
    fn log(&self, level: Level, message: &str);

    /// Log a `{}` template with positional arguments.
    fn log_args(&self, level: Level, template: &str, args: &[&dyn Display]);

    /// Log an error, optionally described by a `{}` template and its
    /// arguments.
    fn log_throwable(
        &self,
        level: Level,
        throwable: &Throwable<'_>,
        template: Option<&str>,
        args: &[&dyn Display],
    );

    level_methods!(Level::Trace, "TRACE", trace, trace_args, trace_throwable, trace_throwable_args);
    level_methods!(Level::Debug, "DEBUG", debug, debug_args, debug_throwable, debug_throwable_args);
    level_methods!(Level::Info, "INFO", info, info_args, info_throwable, info_throwable_args);
    level_methods!(Level::Warn, "WARN", warn, warn_args, warn_throwable, warn_throwable_args);
    level_methods!(Level::Error, "ERROR", error, error_args, error_throwable, error_throwable_args);
    level_methods!(Level::Fatal, "FATAL", fatal, fatal_args, fatal_throwable, fatal_throwable_args);
}

/// Creates [`Logger`]s and keeps track of them.
///
/// A factory owns the defaults (threshold and formatter) handed to new
/// loggers and a set of listeners that is kept registered on every logger it
/// holds.
pub trait LoggerFactory {
    /// The [`Logger`] type that this factory creates.
    type Logger: Logger;

    /// Create a logger registered under the literal `name`.
    ///
    /// A logger previously registered under the same name is replaced; clones
    /// of its `Arc` keep working but are no longer reachable from the
    /// factory.
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidArgument`](crate::LoggerError::InvalidArgument)
    /// if `name` is empty.
    fn create(&self, name: &str) -> LoggerResult<Arc<Self::Logger>>;

    /// Create a logger for the type `T`, registered under the canonical name
    /// derived by [`name::canonical_name_of`].
    fn create_for<T: ?Sized>(&self) -> LoggerResult<Arc<Self::Logger>> {
        self.create(&name::canonical_name_of::<T>())
    }

    /// The logger currently registered under `name`.
    fn logger(&self, name: &str) -> Option<Arc<Self::Logger>>;

    /// Formatter given to loggers created from now on.
    fn formatter(&self) -> Arc<dyn LoggerFormatter>;

    /// Replace the formatter given to loggers created from now on. Existing
    /// loggers keep theirs.
    fn set_formatter(&self, formatter: Arc<dyn LoggerFormatter>);

    /// Threshold given to loggers created from now on.
    fn default_level(&self) -> Level;

    /// Replace the threshold given to loggers created from now on. Existing
    /// loggers keep theirs.
    fn set_default_level(&self, level: Level);

    /// Register a listener on the factory and on every logger it holds.
    fn add_listener(&self, listener: Arc<dyn LoggerEventListener>);

    /// Unregister a listener from the factory and from every logger it
    /// holds.
    fn remove_listener(&self, listener: &Arc<dyn LoggerEventListener>);

    /// Snapshot of the registered loggers, keyed by canonical name.
    fn loggers(&self) -> impl Iterator<Item = (String, Arc<Self::Logger>)>;

    /// Snapshot of the registered listeners.
    fn listeners(&self) -> impl Iterator<Item = Arc<dyn LoggerEventListener>>;

    /// Set the threshold of every registered logger whose name starts with
    /// `prefix`. The match is a plain string prefix, not path aware.
    fn set_level(&self, prefix: &str, level: Level);

    /// Set the threshold of every registered logger whose name starts with
    /// the canonical name of `T`.
    fn set_level_for<T: ?Sized>(&self, level: Level) {
        self.set_level(&name::canonical_name_of::<T>(), level)
    }
}
