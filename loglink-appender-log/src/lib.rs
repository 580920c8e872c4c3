//! Bridge `loglink` loggers onto the [`log`](https://docs.rs/log) crate.
//!
//! [`LogBackend`] is a [`Backend`] for
//! [`SdkLoggerRegistry`](loglink_sdk::SdkLoggerRegistry): every logger writes
//! `log` records whose target is the logger's canonical name. By default the
//! records go to the logger installed with `log::set_logger` (e.g.
//! `env_logger`), subject to `log::max_level()`.
//!
//! # Level mapping
//!
//! | loglink | log     |
//! |---------|---------|
//! | TRACE   | Trace   |
//! | DEBUG   | Debug   |
//! | INFO    | Info    |
//! | WARN    | Warn    |
//! | ERROR   | Error   |
//! | FATAL   | Error   |
//!
//! # Errors
//!
//! Errors passed with a message are attached to the record as the key-values
//! `exception.type` (simple type name) and `exception.message`. The record's
//! message is the already substituted text, or empty if the error was logged
//! alone.
//!
//! # Example
//!
//! ```
//! use loglink::{Level, Logger, LoggerFactory};
//! use loglink_appender_log::LogBackend;
//! use loglink_sdk::SdkLoggerRegistry;
//!
//! let registry = SdkLoggerRegistry::builder(LogBackend::global())
//!     .with_default_level(Level::Info)
//!     .build();
//! let logger = registry.create("svc").unwrap();
//! loglink::info!(logger, "listening on {}", 8080);
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

use log::kv::{self, Key, Source, Value, VisitSource};
use log::{Log, Metadata, Record};
use loglink::message::Substitution;
use loglink::{Level, Throwable};
use loglink_sdk::{Backend, Channel};
use std::fmt;
use std::sync::Arc;

/// Key of the error type attached to records carrying an error.
pub const EXCEPTION_TYPE: &str = "exception.type";
/// Key of the error message attached to records carrying an error.
pub const EXCEPTION_MESSAGE: &str = "exception.message";

#[derive(Clone)]
enum Sink {
    Global,
    Custom(Arc<dyn Log>),
}

impl Sink {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        match self {
            Sink::Global => {
                metadata.level() <= log::max_level() && log::logger().enabled(metadata)
            }
            Sink::Custom(logger) => logger.enabled(metadata),
        }
    }

    fn log(&self, record: &Record<'_>) {
        match self {
            Sink::Global => log::logger().log(record),
            Sink::Custom(logger) => logger.log(record),
        }
    }
}

/// A [`Backend`] writing through the `log` crate.
#[derive(Clone)]
pub struct LogBackend {
    sink: Sink,
}

impl LogBackend {
    /// Write to the globally installed `log` logger.
    pub fn global() -> Self {
        LogBackend { sink: Sink::Global }
    }

    /// Write to `logger` instead of the global one. `log::max_level()` is not
    /// consulted.
    pub fn new(logger: Arc<dyn Log>) -> Self {
        LogBackend {
            sink: Sink::Custom(logger),
        }
    }
}

impl Default for LogBackend {
    fn default() -> Self {
        Self::global()
    }
}

impl fmt::Debug for LogBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sink = match self.sink {
            Sink::Global => "global",
            Sink::Custom(_) => "custom",
        };
        f.debug_struct("LogBackend").field("sink", &sink).finish()
    }
}

impl Backend for LogBackend {
    type Channel = LogChannel;

    fn channel(&self, name: &str) -> LogChannel {
        LogChannel {
            target: name.to_owned(),
            sink: self.sink.clone(),
        }
    }
}

/// Channel of a [`LogBackend`]; writes records targeted at its logger's name.
#[derive(Clone)]
pub struct LogChannel {
    target: String,
    sink: Sink,
}

impl fmt::Debug for LogChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogChannel")
            .field("target", &self.target)
            .finish()
    }
}

impl LogChannel {
    fn metadata(&self, level: Level) -> Metadata<'_> {
        Metadata::builder()
            .level(map_level(level))
            .target(&self.target)
            .build()
    }
}

impl Channel for LogChannel {
    fn emit(&self, level: Level, message: Substitution<'_>) {
        let metadata = self.metadata(level);
        if !self.sink.enabled(&metadata) {
            return;
        }
        self.sink.log(
            &Record::builder()
                .metadata(metadata)
                .args(format_args!("{message}"))
                .build(),
        );
    }

    fn emit_throwable(&self, level: Level, message: &str, throwable: &Throwable<'_>) {
        let metadata = self.metadata(level);
        if !self.sink.enabled(&metadata) {
            return;
        }
        let exception = Exception {
            kind: throwable.kind(),
            message: throwable.error().to_string(),
        };
        self.sink.log(
            &Record::builder()
                .metadata(metadata)
                .args(format_args!("{message}"))
                .key_values(&exception)
                .build(),
        );
    }
}

struct Exception<'a> {
    kind: &'a str,
    message: String,
}

impl Source for Exception<'_> {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn VisitSource<'kvs>) -> Result<(), kv::Error> {
        visitor.visit_pair(Key::from_str(EXCEPTION_TYPE), Value::from(self.kind))?;
        visitor.visit_pair(
            Key::from_str(EXCEPTION_MESSAGE),
            Value::from(self.message.as_str()),
        )
    }
}

fn map_level(level: Level) -> log::Level {
    match level {
        Level::Trace => log::Level::Trace,
        Level::Debug => log::Level::Debug,
        Level::Info => log::Level::Info,
        Level::Warn => log::Level::Warn,
        Level::Error | Level::Fatal => log::Level::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loglink::{Logger, LoggerFactory};
    use loglink_sdk::SdkLoggerRegistry;
    use rstest::rstest;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct Captured {
        level: log::Level,
        target: String,
        message: String,
        exception: Option<(String, String)>,
    }

    #[derive(Debug)]
    struct CaptureLog {
        max_level: log::LevelFilter,
        records: Mutex<Vec<Captured>>,
    }

    impl CaptureLog {
        fn new(max_level: log::LevelFilter) -> Arc<Self> {
            Arc::new(CaptureLog {
                max_level,
                records: Mutex::new(Vec::new()),
            })
        }

        fn records(&self) -> Vec<Captured> {
            self.records.lock().unwrap().clone()
        }
    }

    impl Log for CaptureLog {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.level() <= self.max_level
        }

        fn log(&self, record: &Record<'_>) {
            let kvs = record.key_values();
            let exception = kvs.get(Key::from_str(EXCEPTION_TYPE)).map(|kind| {
                let message = kvs
                    .get(Key::from_str(EXCEPTION_MESSAGE))
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                (kind.to_string(), message)
            });
            self.records.lock().unwrap().push(Captured {
                level: record.level(),
                target: record.target().to_owned(),
                message: record.args().to_string(),
                exception,
            });
        }

        fn flush(&self) {}
    }

    fn setup(
        max_level: log::LevelFilter,
    ) -> (Arc<CaptureLog>, SdkLoggerRegistry<LogBackend>) {
        let capture = CaptureLog::new(max_level);
        let registry = SdkLoggerRegistry::builder(LogBackend::new(capture.clone()))
            .with_default_level(Level::Trace)
            .build();
        (capture, registry)
    }

    #[rstest]
    #[case(Level::Trace, log::Level::Trace)]
    #[case(Level::Debug, log::Level::Debug)]
    #[case(Level::Info, log::Level::Info)]
    #[case(Level::Warn, log::Level::Warn)]
    #[case(Level::Error, log::Level::Error)]
    #[case(Level::Fatal, log::Level::Error)]
    fn levels_are_mapped(#[case] level: Level, #[case] expected: log::Level) {
        let (capture, registry) = setup(log::LevelFilter::Trace);
        registry.create("svc").unwrap().log(level, "m");
        assert_eq!(capture.records()[0].level, expected);
    }

    #[test]
    fn records_target_the_logger_name() {
        let (capture, registry) = setup(log::LevelFilter::Trace);
        let logger = registry.create("o.e.Widget").unwrap();
        logger.info_args("{} items in {}", &[&3, &"cart"]);
        assert_eq!(
            capture.records(),
            vec![Captured {
                level: log::Level::Info,
                target: "o.e.Widget".into(),
                message: "3 items in cart".into(),
                exception: None,
            }]
        );
    }

    #[test]
    fn errors_are_attached_as_key_values() {
        let (capture, registry) = setup(log::LevelFilter::Trace);
        let logger = registry.create("svc").unwrap();
        let err = "x".parse::<u16>().unwrap_err();

        logger.error_throwable(&Throwable::new(&err));
        logger.fatal_throwable_args(&Throwable::new(&err), "bad port {}", &[&"x"]);

        let records = capture.records();
        let exception = Some((
            "ParseIntError".to_owned(),
            "invalid digit found in string".to_owned(),
        ));
        assert_eq!(records[0].message, "");
        assert_eq!(records[0].exception, exception);
        assert_eq!(records[1].message, "bad port x");
        assert_eq!(records[1].level, log::Level::Error);
        assert_eq!(records[1].exception, exception);
    }

    #[test]
    fn backend_filter_is_respected() {
        let (capture, registry) = setup(log::LevelFilter::Warn);
        let logger = registry.create("svc").unwrap();
        logger.info("filtered by log");
        logger.warn("kept");
        assert_eq!(capture.records().len(), 1);
    }

    #[test]
    fn debug_does_not_expose_sink() {
        let backend = LogBackend::default();
        assert_eq!(format!("{backend:?}"), "LogBackend { sink: \"global\" }");
        let channel = backend.channel("svc");
        assert_eq!(format!("{channel:?}"), "LogChannel { target: \"svc\" }");
    }
}
