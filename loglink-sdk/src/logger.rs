use crate::level::AtomicLevel;
use crate::listeners::ListenerSet;
use crate::Channel;
use loglink::message::{substitute, Substitution};
use loglink::{Level, LogEvent, Logger, LoggerEventListener, LoggerFormatter, Throwable};
use std::fmt::Display;
use std::sync::{Arc, PoisonError, RwLock};
use std::vec;

/// A [`Logger`] bound to one backend [`Channel`].
///
/// Every call is first compared against the logger's threshold; calls below
/// it return without touching the channel, the listeners or the arguments.
/// Accepted calls are forwarded to the channel and then mirrored, as a
/// [`LogEvent`], to every registered listener on the calling thread.
///
/// Loggers are usually obtained from a
/// [`SdkLoggerRegistry`](crate::SdkLoggerRegistry), which keeps the
/// registry's listeners registered on them.
#[derive(Debug)]
pub struct SdkLogger<C> {
    name: Arc<str>,
    channel: C,
    level: AtomicLevel,
    // handed out to callers; channels render output natively
    formatter: RwLock<Arc<dyn LoggerFormatter>>,
    listeners: ListenerSet,
}

impl<C: Channel> SdkLogger<C> {
    /// Create a standalone logger writing to `channel`.
    pub fn new(
        name: impl Into<Arc<str>>,
        channel: C,
        level: Level,
        formatter: Arc<dyn LoggerFormatter>,
    ) -> Self {
        SdkLogger {
            name: name.into(),
            channel,
            level: AtomicLevel::new(level),
            formatter: RwLock::new(formatter),
            listeners: ListenerSet::new(),
        }
    }

    pub(crate) fn with_listeners(
        self,
        listeners: Arc<[Arc<dyn LoggerEventListener>]>,
    ) -> Self {
        SdkLogger {
            listeners: ListenerSet::from_snapshot(listeners),
            ..self
        }
    }

    /// The backend channel of this logger.
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Snapshot of the listeners currently registered on this logger.
    pub fn listeners(&self) -> vec::IntoIter<Arc<dyn LoggerEventListener>> {
        self.listeners.snapshot().to_vec().into_iter()
    }

    /// Builds the event lazily: nothing is rendered when no listener is
    /// registered.
    fn notify(&self, level: Level, message: impl FnOnce() -> String) {
        let listeners = self.listeners.snapshot();
        if listeners.is_empty() {
            return;
        }
        let event = LogEvent::new(level, self.name.clone(), message());
        for listener in listeners.iter() {
            listener.accept(&event);
        }
    }
}

impl<C: Channel> Logger for SdkLogger<C> {
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn level(&self) -> Level {
        self.level.load()
    }

    fn set_level(&self, level: Level) {
        self.level.store(level)
    }

    fn formatter(&self) -> Arc<dyn LoggerFormatter> {
        self.formatter
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_formatter(&self, formatter: Arc<dyn LoggerFormatter>) {
        *self
            .formatter
            .write()
            .unwrap_or_else(PoisonError::into_inner) = formatter;
    }

    fn add_listener(&self, listener: Arc<dyn LoggerEventListener>) {
        self.listeners.insert(listener);
    }

    fn remove_listener(&self, listener: &Arc<dyn LoggerEventListener>) {
        self.listeners.remove(listener);
    }

    fn log(&self, level: Level, message: &str) {
        if !self.is_enabled(level) {
            return;
        }
        self.channel.emit(level, Substitution::new(message, &[]));
        self.notify(level, || message.to_owned());
    }

    fn log_args(&self, level: Level, template: &str, args: &[&dyn Display]) {
        if !self.is_enabled(level) {
            return;
        }
        self.channel.emit(level, Substitution::new(template, args));
        self.notify(level, || substitute(template, args));
    }

    fn log_throwable(
        &self,
        level: Level,
        throwable: &Throwable<'_>,
        template: Option<&str>,
        args: &[&dyn Display],
    ) {
        if !self.is_enabled(level) {
            return;
        }
        let message = template.map(|template| substitute(template, args));
        self.channel
            .emit_throwable(level, message.as_deref().unwrap_or_default(), throwable);
        self.notify(level, || throwable.describe(message.as_deref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ChannelRecord, InMemoryBackend, InMemoryChannel, InMemoryListener};
    use crate::Backend;
    use loglink::DefaultFormatter;
    use rstest::rstest;
    use std::fmt;

    #[derive(Debug)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("connection refused")
        }
    }

    impl std::error::Error for Refused {}

    struct Panicky;

    impl Display for Panicky {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            panic!("arguments must not be rendered below the threshold")
        }
    }

    fn logger(level: Level) -> (InMemoryBackend, InMemoryListener, SdkLogger<InMemoryChannel>) {
        let backend = InMemoryBackend::default();
        let listener = InMemoryListener::default();
        let logger = SdkLogger::new(
            "svc",
            backend.channel("svc"),
            level,
            Arc::new(DefaultFormatter),
        );
        logger.add_listener(Arc::new(listener.clone()));
        (backend, listener, logger)
    }

    #[rstest]
    fn emits_iff_level_reaches_threshold(
        #[values(Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error, Level::Fatal)]
        threshold: Level,
        #[values(Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error, Level::Fatal)]
        level: Level,
    ) {
        let (backend, listener, logger) = logger(threshold);
        logger.log(level, "message");
        let expected = usize::from(level >= threshold);
        assert_eq!(backend.get_emitted_records().len(), expected);
        assert_eq!(listener.get_emitted_events().len(), expected);
    }

    #[test]
    fn disabled_calls_do_not_render_arguments() {
        let (backend, listener, logger) = logger(Level::Info);
        logger.debug_args("{}", &[&Panicky]);
        let err = Refused;
        logger.trace_throwable_args(&Throwable::new(&err), "{}", &[&Panicky]);
        assert!(backend.get_emitted_records().is_empty());
        assert!(listener.get_emitted_events().is_empty());
    }

    #[test]
    fn info_with_argument() {
        let (backend, listener, logger) = logger(Level::Info);
        logger.debug("x");
        logger.info_args("hello {}", &[&"world"]);

        let records = backend.get_emitted_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].template, "hello {}");
        assert_eq!(records[0].args, vec!["world".to_owned()]);
        assert_eq!(records[0].message, "hello world");
        assert_eq!(records[0].channel, "svc");
        assert!(records[0].throwable.is_none());

        assert_eq!(
            listener.get_emitted_events(),
            vec![LogEvent::new(Level::Info, "svc", "hello world")]
        );
    }

    #[test]
    fn variadic_arguments() {
        let (backend, listener, logger) = logger(Level::Trace);
        logger.warn_args("{}-{}-{}-{}-{}", &[&1, &2, &3, &4, &5]);
        logger.warn_args("{} {} {}", &[&'a', &'b', &'c']);
        logger.warn_args("none {}", &[]);
        let messages: Vec<_> = listener
            .get_emitted_events()
            .iter()
            .map(|e| e.message().to_owned())
            .collect();
        assert_eq!(messages, ["1-2-3-4-5", "a b c", "none {}"]);
        assert_eq!(backend.get_emitted_records()[0].args.len(), 5);
    }

    #[test]
    fn throwable_alone() {
        let (backend, listener, logger) = logger(Level::Trace);
        let err = Refused;
        logger.error_throwable(&Throwable::new(&err));

        let record = &backend.get_emitted_records()[0];
        assert_eq!(record.message, "");
        assert_eq!(
            record.throwable.as_ref().map(|t| (t.kind.as_str(), t.message.as_str())),
            Some(("Refused", "connection refused"))
        );
        assert_eq!(
            listener.get_emitted_events()[0].message(),
            "Refused: connection refused"
        );
    }

    #[test]
    fn throwable_with_template_passes_final_text_to_backend() {
        let (backend, listener, logger) = logger(Level::Trace);
        let err = Refused;
        logger.warn_throwable_args(&Throwable::new(&err), "dialing {}:{}", &[&"db", &5432]);

        let record: &ChannelRecord = &backend.get_emitted_records()[0];
        assert_eq!(record.template, "dialing db:5432");
        assert!(record.args.is_empty());
        assert_eq!(record.message, "dialing db:5432");
        assert!(record.throwable.is_some());
        assert_eq!(
            listener.get_emitted_events()[0].message(),
            "Refused: dialing db:5432"
        );
    }

    #[test]
    fn fatal_is_reported_as_fatal() {
        let (backend, listener, logger) = logger(Level::Error);
        logger.fatal("down");
        assert_eq!(backend.get_emitted_records()[0].level, Level::Fatal);
        assert_eq!(listener.get_emitted_events()[0].level(), Level::Fatal);
    }

    #[test]
    fn level_and_formatter_can_be_replaced() {
        let (_, _, logger) = logger(Level::Info);
        logger.set_level(Level::Error);
        assert_eq!(logger.level(), Level::Error);
        assert!(!logger.is_enabled(Level::Warn));

        #[derive(Debug)]
        struct Bare;
        impl LoggerFormatter for Bare {
            fn apply(&self, _level: Level, _name: &str, message: &str) -> String {
                message.to_owned()
            }
        }
        logger.set_formatter(Arc::new(Bare));
        assert_eq!(logger.formatter().apply(Level::Info, "svc", "m"), "m");
    }

    #[test]
    fn duplicate_listener_notified_once() {
        let (_, listener, logger) = logger(Level::Info);
        let extra = InMemoryListener::default();
        let shared: Arc<dyn LoggerEventListener> = Arc::new(extra.clone());
        logger.add_listener(shared.clone());
        logger.add_listener(shared.clone());
        logger.info("once");
        assert_eq!(extra.get_emitted_events().len(), 1);
        assert_eq!(listener.get_emitted_events().len(), 1);
        assert_eq!(logger.listeners().count(), 2);

        logger.remove_listener(&shared);
        logger.remove_listener(&shared);
        logger.info("twice");
        assert_eq!(extra.get_emitted_events().len(), 1);
    }

    #[test]
    fn listener_snapshot_outlives_logger() {
        let (_, _, logger) = logger(Level::Info);
        let listeners = logger.listeners();
        drop(logger);
        assert_eq!(listeners.count(), 1);
    }

    fn failing_listener(_: &LogEvent) {
        panic!("listener failed")
    }

    #[test]
    #[should_panic(expected = "listener failed")]
    fn listener_panics_reach_the_caller() {
        let (_, _, logger) = logger(Level::Info);
        logger.add_listener(Arc::new(failing_listener));
        logger.info("boom");
    }

    #[test]
    fn listener_may_unregister_itself_while_notified() {
        let backend = InMemoryBackend::default();
        let logger = Arc::new(SdkLogger::new(
            "svc",
            backend.channel("svc"),
            Level::Info,
            Arc::new(DefaultFormatter),
        ));
        let slot: Arc<RwLock<Option<Arc<dyn LoggerEventListener>>>> = Arc::new(RwLock::new(None));
        let weak = Arc::downgrade(&logger);
        let handle = slot.clone();
        let listener: Arc<dyn LoggerEventListener> = Arc::new(move |_: &LogEvent| {
            if let (Some(logger), Some(me)) = (weak.upgrade(), handle.read().unwrap().clone()) {
                logger.remove_listener(&me);
            }
        });
        *slot.write().unwrap() = Some(listener.clone());
        logger.add_listener(listener);

        logger.info("first");
        assert_eq!(logger.listeners().count(), 0);
        logger.info("second");
    }
}
