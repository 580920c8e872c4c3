//! A vendor-neutral logging facade.
//!
//! # Overview
//!
//! `loglink` defines the vocabulary that application and library code logs
//! against: a totally ordered [`Level`], the [`Logger`] and [`LoggerFactory`]
//! traits, the [`LogEvent`] notification that is mirrored to in-process
//! [`LoggerEventListener`]s, and the [`LoggerFormatter`] capability.
//!
//! This crate is a facade. It does not write log lines anywhere; apart from
//! the no-op implementation in [`noop`] it only defines traits. The actual
//! work of gating by threshold, forwarding to a logging backend and fanning
//! records out to listeners is done by
//! [loglink-sdk](https://crates.io/crates/loglink-sdk), with backends such as
//! [loglink-appender-log](https://crates.io/crates/loglink-appender-log)
//! (the [`log`](https://crates.io/crates/log) crate) or
//! [loglink-appender-tracing](https://crates.io/crates/loglink-appender-tracing)
//! (the [`tracing`](https://crates.io/crates/tracing) crate).
//!
//! Library authors are recommended to depend on this crate *only* and to
//! accept an `Arc<impl Logger>` (or a factory) from their caller, instead of
//! reaching for a process-wide global.
//!
//! # Getting Started
//!
//! ```
//! use loglink::{Level, Logger, LoggerFactory};
//! use loglink::noop::NoopLoggerFactory;
//!
//! let factory = NoopLoggerFactory::new();
//! let logger = factory.create("svc").unwrap();
//!
//! logger.info_args("hello {}", &[&"world"]);
//! loglink::warn!(logger, "retrying in {} ms", 250);
//!
//! // The no-op logger never enables anything.
//! assert!(!logger.is_enabled(Level::Fatal));
//! ```
//!
//! # Messages
//!
//! Templates use `{}` placeholders that are substituted left to right by the
//! [`Display`](std::fmt::Display) of the supplied arguments, see [`message`].
//! Errors are passed as a [`Throwable`], which keeps the simple type name of
//! the error so that listeners see messages such as
//! `ParseIntError: invalid digit found in string`.
//!
//! # Logger names
//!
//! Loggers created for a type get a narrow canonical name: every path segment
//! but the last is abbreviated to its first character, so
//! `org.example.demo.Widget` becomes `o.e.d.Widget`. See [`name`].
//!
//! # Feature flags
//!
//! * `internal-logs` (enabled by default): emit this crate family's own
//!   diagnostics through [`tracing`](https://crates.io/crates/tracing).
//! * `with-serde`: derive `serde` traits for [`Level`] and [`LogEvent`].
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(
    docsrs,
    feature(doc_cfg, doc_auto_cfg),
    deny(rustdoc::broken_intra_doc_links)
)]
#![cfg_attr(test, deny(warnings))]

pub mod error;
mod event;
mod formatter;
mod internal_logging;
mod level;
mod listener;
mod logger;
mod macros;
pub mod message;
pub mod name;
pub mod noop;
mod throwable;

pub use error::{LoggerError, LoggerResult};
pub use event::LogEvent;
pub use formatter::{DefaultFormatter, LoggerFormatter};
pub use level::{Level, ParseLevelError};
pub use listener::LoggerEventListener;
pub use logger::{Logger, LoggerFactory};
pub use throwable::Throwable;

#[doc(hidden)]
#[cfg(feature = "internal-logs")]
pub mod _private {
    pub use tracing::{debug, error, info, warn}; // re-export
}
