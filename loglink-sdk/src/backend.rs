//! # Backend interface
//!
//! A [`Backend`] is the external logging system the SDK writes through. It
//! hands out one [`Channel`] per logger name; channels receive every call that
//! passed the logger's threshold.
//!
//! ```ascii
//!   +---------------------+   +-----------------------+   +--------------------+
//!   |                     |   |                       |   |                    |
//!   | SdkLogger.log*()    +---> Channel.emit*()       +--->  log / tracing /   |
//!   |  (threshold, fan-   |   |  (level mapping,      |   |  ...               |
//!   |   out to listeners) |   |   native rendering)   |   |                    |
//!   +---------------------+   +-----------------------+   +--------------------+
//! ```
use loglink::message::Substitution;
use loglink::{Level, Throwable};
use std::fmt::Debug;

/// A logging system able to hand out named channels.
pub trait Backend: Send + Sync + Debug {
    /// Channel type of this backend.
    type Channel: Channel;

    /// Look up the channel called `name`. Called once per logger creation.
    fn channel(&self, name: &str) -> Self::Channel;
}

/// One named output stream of a [`Backend`].
///
/// Channels map the facade [`Level`] onto their own levels. Backends without
/// a dedicated FATAL level use their most severe one.
pub trait Channel: Send + Sync + Debug {
    /// Emit a message.
    ///
    /// Plain messages arrive as a [`Substitution`] without arguments. The
    /// substitution is lazy; rendering it is left to the backend, which
    /// should only do so if the line is actually written.
    fn emit(&self, level: Level, message: Substitution<'_>);

    /// Emit a final, already substituted message together with an error.
    ///
    /// `message` is empty when the caller logged the error alone.
    fn emit_throwable(&self, level: Level, message: &str, throwable: &Throwable<'_>);
}
