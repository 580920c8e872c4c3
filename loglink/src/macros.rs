//! Call-site sugar over the [`Logger`](crate::Logger) entry points.
//!
//! The macros check the threshold before evaluating any argument, then call
//! [`Logger::log_args`](crate::Logger::log_args) or
//! [`Logger::log_throwable`](crate::Logger::log_throwable). The logger may be
//! anything that dereferences to a `Logger`, typically an `Arc`.

/// Log at an explicit [`Level`](crate::Level).
///
/// ```
/// use loglink::{Level, LoggerFactory};
/// use loglink::noop::NoopLoggerFactory;
///
/// let logger = NoopLoggerFactory::new().create("svc").unwrap();
/// let err = "x".parse::<u8>().unwrap_err();
///
/// loglink::log!(logger, Level::Info, "plain");
/// loglink::log!(logger, Level::Info, "{} of {}", 1, 3);
/// loglink::log!(logger, Level::Error, err: &err);
/// loglink::log!(logger, Level::Error, err: &err, "parsing {}", "x");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, err: $err:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::Logger as _;
        let __level: $crate::Level = $level;
        let __logger = &$logger;
        if __logger.is_enabled(__level) {
            __logger.log_throwable(__level, &$crate::Throwable::new($err), None, &[]);
        }
    }};
    ($logger:expr, $level:expr, err: $err:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::Logger as _;
        let __level: $crate::Level = $level;
        let __logger = &$logger;
        if __logger.is_enabled(__level) {
            __logger.log_throwable(
                __level,
                &$crate::Throwable::new($err),
                Some($template),
                &[$(&$arg),*],
            );
        }
    }};
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::Logger as _;
        let __level: $crate::Level = $level;
        let __logger = &$logger;
        if __logger.is_enabled(__level) {
            __logger.log_args(__level, $template, &[$(&$arg),*]);
        }
    }};
}

/// Log at TRACE. See [`log!`](crate::log!) for the accepted forms.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($rest)+)
    };
}

/// Log at DEBUG. See [`log!`](crate::log!) for the accepted forms.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($rest)+)
    };
}

/// Log at INFO. See [`log!`](crate::log!) for the accepted forms.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($rest)+)
    };
}

/// Log at WARN. See [`log!`](crate::log!) for the accepted forms.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($rest)+)
    };
}

/// Log at ERROR. See [`log!`](crate::log!) for the accepted forms.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($rest)+)
    };
}

/// Log at FATAL. See [`log!`](crate::log!) for the accepted forms.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($rest)+)
    };
}
