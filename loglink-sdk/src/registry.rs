use crate::config::RegistryConfig;
use crate::listeners::ListenerSet;
use crate::logger::SdkLogger;
use crate::Backend;
use loglink::error::LoggerResult;
use loglink::{
    loglink_debug, DefaultFormatter, Level, Logger, LoggerError, LoggerEventListener,
    LoggerFactory, LoggerFormatter,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

type LoggerMap<C> = HashMap<String, Arc<SdkLogger<C>>>;

/// Creates [`SdkLogger`]s on top of a [`Backend`] and keeps track of them.
///
/// The registry is a cheap, clonable handle; clones share the same loggers,
/// listeners and defaults.
///
/// Every logger the registry holds carries every listener registered on the
/// registry: a listener added to the registry is also added to its current
/// loggers, and a new logger starts out with the registry's current
/// listeners. Creating a logger under an existing name replaces the previous
/// one.
pub struct SdkLoggerRegistry<B: Backend> {
    inner: Arc<RegistryInner<B>>,
}

struct RegistryInner<B: Backend> {
    backend: B,
    loggers: RwLock<LoggerMap<B::Channel>>,
    listeners: ListenerSet,
    config: RwLock<RegistryConfig>,
    formatter: RwLock<Arc<dyn LoggerFormatter>>,
}

impl<B: Backend> Clone for SdkLoggerRegistry<B> {
    fn clone(&self) -> Self {
        SdkLoggerRegistry {
            inner: self.inner.clone(),
        }
    }
}

impl<B: Backend> fmt::Debug for SdkLoggerRegistry<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkLoggerRegistry")
            .field("backend", &self.inner.backend)
            .field("loggers", &self.read_loggers().len())
            .field("listeners", &self.inner.listeners)
            .field("config", &*self.read_config())
            .finish()
    }
}

impl<B: Backend> SdkLoggerRegistry<B> {
    /// Create a registry configured from the environment only.
    pub fn new(backend: B) -> Self {
        Self::builder(backend).build()
    }

    /// Start configuring a registry on top of `backend`.
    pub fn builder(backend: B) -> RegistryBuilder<B> {
        RegistryBuilder {
            backend,
            config: RegistryConfig::default(),
            formatter: None,
            listeners: Vec::new(),
        }
    }

    /// The backend loggers are created on.
    pub fn backend(&self) -> &B {
        &self.inner.backend
    }

    fn read_loggers(&self) -> std::sync::RwLockReadGuard<'_, LoggerMap<B::Channel>> {
        self.inner
            .loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_loggers(&self) -> std::sync::RwLockWriteGuard<'_, LoggerMap<B::Channel>> {
        self.inner
            .loggers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn read_config(&self) -> std::sync::RwLockReadGuard<'_, RegistryConfig> {
        self.inner
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<B: Backend> LoggerFactory for SdkLoggerRegistry<B> {
    type Logger = SdkLogger<B::Channel>;

    fn create(&self, name: &str) -> LoggerResult<Arc<Self::Logger>> {
        if name.is_empty() {
            return Err(LoggerError::InvalidArgument(
                "logger name must not be empty".into(),
            ));
        }

        let channel = self.inner.backend.channel(name);
        let level = self.read_config().initial_level(name);
        let logger = SdkLogger::new(name, channel, level, LoggerFactory::formatter(self));

        // Listener changes take the map lock too, so the new logger cannot
        // miss one that is being fanned out concurrently.
        let mut loggers = self.write_loggers();
        let logger = Arc::new(logger.with_listeners(self.inner.listeners.snapshot()));
        let replaced = loggers.insert(name.to_owned(), logger.clone()).is_some();
        drop(loggers);

        loglink_debug!(
            name: "Registry.LoggerCreated",
            logger_name = name.to_owned(),
            level = level.as_str(),
            replaced = replaced
        );
        Ok(logger)
    }

    fn logger(&self, name: &str) -> Option<Arc<Self::Logger>> {
        self.read_loggers().get(name).cloned()
    }

    fn formatter(&self) -> Arc<dyn LoggerFormatter> {
        self.inner
            .formatter
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_formatter(&self, formatter: Arc<dyn LoggerFormatter>) {
        *self
            .inner
            .formatter
            .write()
            .unwrap_or_else(PoisonError::into_inner) = formatter;
    }

    fn default_level(&self) -> Level {
        self.read_config().default_level
    }

    fn set_default_level(&self, level: Level) {
        self.inner
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .default_level = level;
    }

    fn add_listener(&self, listener: Arc<dyn LoggerEventListener>) {
        let loggers = self.write_loggers();
        if !self.inner.listeners.insert(listener.clone()) {
            return;
        }
        for logger in loggers.values() {
            logger.add_listener(listener.clone());
        }
        loglink_debug!(
            name: "Registry.ListenerAdded",
            loggers = loggers.len()
        );
    }

    fn remove_listener(&self, listener: &Arc<dyn LoggerEventListener>) {
        let loggers = self.write_loggers();
        if !self.inner.listeners.remove(listener) {
            return;
        }
        for logger in loggers.values() {
            logger.remove_listener(listener);
        }
        loglink_debug!(
            name: "Registry.ListenerRemoved",
            loggers = loggers.len()
        );
    }

    fn loggers(&self) -> impl Iterator<Item = (String, Arc<Self::Logger>)> {
        self.read_loggers()
            .iter()
            .map(|(name, logger)| (name.clone(), logger.clone()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn listeners(&self) -> impl Iterator<Item = Arc<dyn LoggerEventListener>> {
        self.inner.listeners.snapshot().to_vec().into_iter()
    }

    fn set_level(&self, prefix: &str, level: Level) {
        let mut updated = 0usize;
        for (name, logger) in self.read_loggers().iter() {
            if name.starts_with(prefix) {
                logger.set_level(level);
                updated += 1;
            }
        }
        loglink_debug!(
            name: "Registry.LevelSet",
            prefix = prefix.to_owned(),
            level = level.as_str(),
            loggers = updated
        );
    }
}

/// Builder for [`SdkLoggerRegistry`].
///
/// Starts from [`RegistryConfig::default`], i.e. from the environment;
/// anything set here takes precedence.
pub struct RegistryBuilder<B: Backend> {
    backend: B,
    config: RegistryConfig,
    formatter: Option<Arc<dyn LoggerFormatter>>,
    listeners: Vec<Arc<dyn LoggerEventListener>>,
}

impl<B: Backend> fmt::Debug for RegistryBuilder<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("backend", &self.backend)
            .field("config", &self.config)
            .field("formatter", &self.formatter)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<B: Backend> RegistryBuilder<B> {
    /// Threshold of new loggers no override applies to.
    ///
    /// Corresponding environment variable: `LOGLINK_LEVEL`.
    pub fn with_default_level(mut self, level: Level) -> Self {
        self.config.default_level = level;
        self
    }

    /// Threshold of new loggers whose name starts with `prefix`; the longest
    /// matching prefix wins.
    ///
    /// Corresponding environment variable: `LOGLINK_LEVELS`.
    pub fn with_level_override(mut self, prefix: impl Into<String>, level: Level) -> Self {
        self.config.push_override(prefix.into(), level);
        self
    }

    /// Formatter handed to new loggers. Defaults to [`DefaultFormatter`].
    pub fn with_formatter(mut self, formatter: Arc<dyn LoggerFormatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Register a listener right from the start.
    pub fn with_listener(mut self, listener: Arc<dyn LoggerEventListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Create the registry.
    pub fn build(self) -> SdkLoggerRegistry<B> {
        let listeners = ListenerSet::new();
        for listener in self.listeners {
            listeners.insert(listener);
        }

        loglink_debug!(
            name: "Registry.Built",
            default_level = self.config.default_level.as_str(),
            level_overrides = self.config.level_overrides.len(),
            listeners = listeners.len()
        );

        SdkLoggerRegistry {
            inner: Arc::new(RegistryInner {
                backend: self.backend,
                loggers: RwLock::new(HashMap::new()),
                listeners,
                formatter: RwLock::new(
                    self.formatter
                        .unwrap_or_else(|| Arc::new(DefaultFormatter)),
                ),
                config: RwLock::new(self.config),
            }),
        }
    }
}
