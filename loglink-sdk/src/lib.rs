//! # loglink SDK
//!
//! This SDK implements the [`loglink`] facade on top of a pluggable logging
//! [`Backend`]. It contributes the parts that do not depend on the backend:
//!
//! - [`SdkLogger`] gates every call by its threshold, forwards accepted calls
//!   to its backend [`Channel`] and mirrors them as
//!   [`LogEvent`](loglink::LogEvent)s to its listeners;
//! - [`SdkLoggerRegistry`] creates loggers, keyed by canonical name, seeds
//!   them with its default threshold and formatter and keeps its listeners
//!   registered on every logger it holds.
//!
//! Backends live in their own crates, e.g. `loglink-appender-log` for the
//! [`log`](https://crates.io/crates/log) crate.
//!
//! ```
//! use loglink::message::Substitution;
//! use loglink::{Level, LogEvent, Logger, LoggerEventListener, LoggerFactory, Throwable};
//! use loglink_sdk::{Backend, Channel, SdkLoggerRegistry};
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct Stderr;
//!
//! #[derive(Debug)]
//! struct StderrChannel(String);
//!
//! impl Backend for Stderr {
//!     type Channel = StderrChannel;
//!
//!     fn channel(&self, name: &str) -> StderrChannel {
//!         StderrChannel(name.to_owned())
//!     }
//! }
//!
//! impl Channel for StderrChannel {
//!     fn emit(&self, level: Level, message: Substitution<'_>) {
//!         eprintln!("{level} {} {message}", self.0);
//!     }
//!
//!     fn emit_throwable(&self, level: Level, message: &str, throwable: &Throwable<'_>) {
//!         eprintln!("{level} {} {message}: {throwable}", self.0);
//!     }
//! }
//!
//! let registry = SdkLoggerRegistry::builder(Stderr)
//!     .with_default_level(Level::Info)
//!     .build();
//!
//! let listener: Arc<dyn LoggerEventListener> = Arc::new(|event: &LogEvent| {
//!     assert_eq!(event.message(), "hello world");
//! });
//! registry.add_listener(listener);
//!
//! let logger = registry.create("svc").unwrap();
//! logger.debug("dropped");
//! logger.info_args("hello {}", &[&"world"]);
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
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]
#![cfg_attr(test, deny(warnings))]

mod backend;
pub mod config;
mod level;
mod listeners;
mod logger;
mod registry;

/// In-memory backend and listener for testing purpose.
#[cfg(any(feature = "testing", test))]
#[cfg_attr(docsrs, doc(cfg(any(feature = "testing", test))))]
pub mod testing;

pub use backend::{Backend, Channel};
pub use config::RegistryConfig;
pub use logger::SdkLogger;
pub use loglink::error::{LoggerError, LoggerResult};
pub use registry::{RegistryBuilder, SdkLoggerRegistry};
