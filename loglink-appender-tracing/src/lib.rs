//! Bridge `loglink` loggers onto [`tracing`](https://docs.rs/tracing).
//!
//! [`TracingBackend`] is a [`Backend`] for
//! [`SdkLoggerRegistry`](loglink_sdk::SdkLoggerRegistry) that turns every
//! accepted call into a `tracing` event. Event targets are static in
//! `tracing`, so all events use the target [`TARGET`]; the logger's name is
//! carried in the `logger` field.
//!
//! | Field               | Content                                   |
//! |---------------------|-------------------------------------------|
//! | `message`           | the substituted message                   |
//! | `logger`            | canonical name of the logger              |
//! | `severity`          | loglink level name, `FATAL` included      |
//! | `exception.kind`    | simple type name of the error, if any     |
//! | `exception.message` | `Display` of the error, if any            |
//!
//! FATAL is emitted at `tracing`'s `ERROR` level.
//!
//! ```
//! use loglink::{Level, Logger, LoggerFactory};
//! use loglink_appender_tracing::TracingBackend;
//! use loglink_sdk::SdkLoggerRegistry;
//!
//! let registry = SdkLoggerRegistry::builder(TracingBackend)
//!     .with_default_level(Level::Info)
//!     .build();
//! let logger = registry.create("svc").unwrap();
//! logger.warn_args("retrying in {}s", &[&5]);
//! ```
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(test, deny(warnings))]

use loglink::message::Substitution;
use loglink::{Level, Throwable};
use loglink_sdk::{Backend, Channel};
use tracing_core::LevelFilter;

/// Target of every event emitted by this crate.
pub const TARGET: &str = "loglink";

/// Emits one event at the `tracing` level matching a loglink level. Levels
/// must be constants in `tracing` macros, hence the match.
macro_rules! emit_at {
    ($level:expr, $($rest:tt)+) => {
        match $level {
            Level::Trace => tracing::event!(target: TARGET, tracing::Level::TRACE, $($rest)+),
            Level::Debug => tracing::event!(target: TARGET, tracing::Level::DEBUG, $($rest)+),
            Level::Info => tracing::event!(target: TARGET, tracing::Level::INFO, $($rest)+),
            Level::Warn => tracing::event!(target: TARGET, tracing::Level::WARN, $($rest)+),
            Level::Error | Level::Fatal => {
                tracing::event!(target: TARGET, tracing::Level::ERROR, $($rest)+)
            }
        }
    };
}

/// `tracing` level a loglink level is emitted at.
pub fn map_level(level: Level) -> tracing_core::Level {
    match level {
        Level::Trace => tracing_core::Level::TRACE,
        Level::Debug => tracing_core::Level::DEBUG,
        Level::Info => tracing_core::Level::INFO,
        Level::Warn => tracing_core::Level::WARN,
        Level::Error | Level::Fatal => tracing_core::Level::ERROR,
    }
}

/// A [`Backend`] emitting `tracing` events to the current subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl Backend for TracingBackend {
    type Channel = TracingChannel;

    fn channel(&self, name: &str) -> TracingChannel {
        TracingChannel {
            name: name.to_owned(),
        }
    }
}

/// Channel of a [`TracingBackend`].
#[derive(Debug, Clone)]
pub struct TracingChannel {
    name: String,
}

impl TracingChannel {
    // cheap global check before anything is rendered
    fn enabled(level: Level) -> bool {
        map_level(level) <= LevelFilter::current()
    }
}

impl Channel for TracingChannel {
    fn emit(&self, level: Level, message: Substitution<'_>) {
        if !Self::enabled(level) {
            return;
        }
        emit_at!(
            level,
            logger = self.name.as_str(),
            severity = level.as_str(),
            "{}",
            message
        );
    }

    fn emit_throwable(&self, level: Level, message: &str, throwable: &Throwable<'_>) {
        if !Self::enabled(level) {
            return;
        }
        emit_at!(
            level,
            logger = self.name.as_str(),
            severity = level.as_str(),
            exception.kind = throwable.kind(),
            exception.message = %throwable.error(),
            "{}",
            message
        );
    }
}
