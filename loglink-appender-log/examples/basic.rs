//! run with `$ RUST_LOG=debug cargo run --example basic`

/// This example writes loglink output through env_logger. Loggers are created
/// for a literal name and for a type; a listener counts what was emitted.
use loglink::{Level, LogEvent, Logger, LoggerEventListener, LoggerFactory};
use loglink_appender_log::LogBackend;
use loglink_sdk::SdkLoggerRegistry;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[allow(dead_code)]
struct Checkout;

fn main() {
    env_logger::init();

    let registry = SdkLoggerRegistry::builder(LogBackend::global())
        .with_default_level(Level::Debug)
        .build();

    let emitted = Arc::new(AtomicUsize::new(0));
    let counter = emitted.clone();
    let listener: Arc<dyn LoggerEventListener> = Arc::new(move |_: &LogEvent| {
        counter.fetch_add(1, Ordering::Relaxed);
    });
    registry.add_listener(listener);

    let logger = registry.create("svc").unwrap();
    let checkout = registry.create_for::<Checkout>().unwrap();

    let fruit = "apple";
    let price = 2.99;
    loglink::info!(logger, "hello from {}. My price is {}", fruit, price);
    loglink::debug!(checkout, "cart has {} items", 3);
    logger.trace("not emitted");

    let err = "abc".parse::<u32>().unwrap_err();
    loglink::error!(checkout, err: &err, "parsing quantity {}", "abc");

    registry.set_level("b.", Level::Warn);
    loglink::debug!(checkout, "not emitted either");

    println!("{} events emitted", emitted.load(Ordering::Relaxed));
}
