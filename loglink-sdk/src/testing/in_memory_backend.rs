use crate::{Backend, Channel};
use loglink::message::Substitution;
use loglink::{Level, Throwable};
use std::sync::{Arc, Mutex, PoisonError};

/// What an [`InMemoryChannel`] received in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRecord {
    /// Name of the channel.
    pub channel: String,
    /// Facade level of the call.
    pub level: Level,
    /// Template as handed to the channel; for calls carrying an error this is
    /// the final message.
    pub template: String,
    /// Rendered arguments.
    pub args: Vec<String>,
    /// Final message.
    pub message: String,
    /// The error, if any.
    pub throwable: Option<ThrowableRecord>,
}

/// The error part of a [`ChannelRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrowableRecord {
    /// Simple type name of the error.
    pub kind: String,
    /// `Display` of the error.
    pub message: String,
}

/// A backend that stores what its channels receive.
///
/// # Example
///
/// ```
/// use loglink::{Level, Logger, LoggerFactory};
/// use loglink_sdk::testing::InMemoryBackend;
/// use loglink_sdk::SdkLoggerRegistry;
///
/// let backend = InMemoryBackend::default();
/// let registry = SdkLoggerRegistry::builder(backend.clone())
///     .with_default_level(Level::Debug)
///     .build();
/// registry.create("svc").unwrap().debug_args("took {}ms", &[&12]);
///
/// let records = backend.get_emitted_records();
/// assert_eq!(records[0].message, "took 12ms");
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryBackend {
    records: Arc<Mutex<Vec<ChannelRecord>>>,
}

impl InMemoryBackend {
    /// Returns everything received so far, in call order.
    pub fn get_emitted_records(&self) -> Vec<ChannelRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clears the internal (in-memory) storage.
    pub fn reset(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Backend for InMemoryBackend {
    type Channel = InMemoryChannel;

    fn channel(&self, name: &str) -> InMemoryChannel {
        InMemoryChannel {
            name: name.to_owned(),
            records: self.records.clone(),
        }
    }
}

/// Channel of an [`InMemoryBackend`].
#[derive(Clone, Debug)]
pub struct InMemoryChannel {
    name: String,
    records: Arc<Mutex<Vec<ChannelRecord>>>,
}

impl InMemoryChannel {
    /// Name the channel was requested under.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn push(&self, record: ChannelRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

impl Channel for InMemoryChannel {
    fn emit(&self, level: Level, message: Substitution<'_>) {
        self.push(ChannelRecord {
            channel: self.name.clone(),
            level,
            template: message.template().to_owned(),
            args: message.args().iter().map(|arg| arg.to_string()).collect(),
            message: message.to_string(),
            throwable: None,
        });
    }

    fn emit_throwable(&self, level: Level, message: &str, throwable: &Throwable<'_>) {
        self.push(ChannelRecord {
            channel: self.name.clone(),
            level,
            template: message.to_owned(),
            args: Vec::new(),
            message: message.to_owned(),
            throwable: Some(ThrowableRecord {
                kind: throwable.kind().to_owned(),
                message: throwable.error().to_string(),
            }),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_share_storage_with_backend() {
        let backend = InMemoryBackend::default();
        let a = backend.channel("a");
        let b = backend.clone().channel("b");
        a.emit(Level::Info, Substitution::new("{} {}", &[&1, &"x"]));
        b.emit(Level::Warn, Substitution::new("plain", &[]));

        let records = backend.get_emitted_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].args, ["1", "x"]);
        assert_eq!(records[0].message, "1 x");
        assert_eq!(records[1].channel, "b");
        assert_eq!(b.name(), "b");

        backend.reset();
        assert!(backend.get_emitted_records().is_empty());
    }
}
