use crate::Level;
use std::fmt::Debug;

/// Renders a log line out of its parts.
///
/// Loggers carry a formatter so that implementations without a rendering
/// backend of their own can use it. Bridges onto backends that format their
/// own output keep the formatter for API completeness only.
pub trait LoggerFormatter: Send + Sync + Debug {
    /// Render `message`, logged at `level` by the logger called `name`.
    fn apply(&self, level: Level, name: &str, message: &str) -> String;
}

/// `LEVEL name - message`, with the level padded to five characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFormatter;

impl LoggerFormatter for DefaultFormatter {
    fn apply(&self, level: Level, name: &str, message: &str) -> String {
        format!("{level:<5} {name} - {message}")
    }
}
