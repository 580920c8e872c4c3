//! Internal diagnostics.
//!
//! **Note**: These macros (`loglink_info!`, `loglink_warn!`, `loglink_debug!` and `loglink_error!`) report
//! what the loglink crates themselves are doing: registries being built, loggers being created or
//! replaced, listeners being fanned out. Custom backends may use them too. They are not meant for
//! application logging, which goes through a [`Logger`](crate::Logger).
//!
//! With the `internal-logs` feature of the *calling* crate they emit `tracing` events whose target is
//! that crate's name. When running tests with `--nocapture` they print to stdout. Otherwise they
//! compile to nothing.

#[doc(hidden)]
#[macro_export]
macro_rules! __loglink_internal {
    ($lvl:ident, $tag:literal, name: $name:expr $(, $key:ident = $value:expr)* $(,)?) => {{
        #[cfg(feature = "internal-logs")]
        {
            $crate::_private::$lvl!(name: $name, target: env!("CARGO_PKG_NAME"), name = $name $(, $key = $value)*);
        }

        #[cfg(test)]
        {
            print!(concat!($tag, ": name={}"), $name);
            $(
                print!(", {}={}", stringify!($key), $value);
            )*
            println!();
        }

        #[cfg(all(not(feature = "internal-logs"), not(test)))]
        {
            let _ = ($name, $($value),*); // Compiler will optimize this out as it's unused.
        }
    }};
}

/// Macro for logging informational messages about loglink itself.
///
/// # Fields:
/// - `name`: The operation or action being logged.
/// - Additional optional key-value pairs can be passed as attributes.
///
/// # Example:
/// ```rust
/// use loglink::loglink_info;
/// loglink_info!(name: "Registry.Built", default_level = "INFO");
/// ```
#[macro_export]
macro_rules! loglink_info {
    ($($arg:tt)+) => {
        $crate::__loglink_internal!(info, "loglink_info", $($arg)+)
    };
}

/// Macro for logging warnings about loglink itself.
///
/// # Example:
/// ```rust
/// use loglink::loglink_warn;
/// loglink_warn!(name: "Config.InvalidLevel", value = "loud");
/// ```
#[macro_export]
macro_rules! loglink_warn {
    ($($arg:tt)+) => {
        $crate::__loglink_internal!(warn, "loglink_warn", $($arg)+)
    };
}

/// Macro for logging debug messages about loglink itself.
///
/// # Example:
/// ```rust
/// use loglink::loglink_debug;
/// loglink_debug!(name: "Registry.LoggerCreated", logger_name = "svc");
/// ```
#[macro_export]
macro_rules! loglink_debug {
    ($($arg:tt)+) => {
        $crate::__loglink_internal!(debug, "loglink_debug", $($arg)+)
    };
}

/// Macro for logging errors about loglink itself.
///
/// # Example:
/// ```rust
/// use loglink::loglink_error;
/// loglink_error!(name: "Backend.Unavailable", backend = "log");
/// ```
#[macro_export]
macro_rules! loglink_error {
    ($($arg:tt)+) => {
        $crate::__loglink_internal!(error, "loglink_error", $($arg)+)
    };
}
