//! run with `$ cargo run --example basic`

use loglink::{Level, Logger, LoggerFactory};
use loglink_appender_tracing::TracingBackend;
use loglink_sdk::SdkLoggerRegistry;
use tracing_subscriber::prelude::*;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let registry = SdkLoggerRegistry::builder(TracingBackend)
        .with_default_level(Level::Info)
        .build();
    let logger = registry.create("my-system").unwrap();

    loglink::info!(logger, "user {} signed in", "otel");
    logger.debug("not emitted");

    let err = std::io::Error::other("connection reset");
    loglink::error!(logger, err: &err, "syncing {} failed", "inventory");
}
