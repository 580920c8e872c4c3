use crate::name;
use std::error::Error;
use std::fmt;

/// An error passed along with a log message.
///
/// Besides the error itself a `Throwable` remembers the *kind* of the error,
/// the simple name of its concrete type, which listeners see as the prefix of
/// the event message:
///
/// ```
/// use loglink::Throwable;
///
/// let err = "x".parse::<u32>().unwrap_err();
/// let throwable = Throwable::new(&err);
/// assert_eq!(throwable.kind(), "ParseIntError");
/// assert_eq!(throwable.describe(None), "ParseIntError: invalid digit found in string");
/// assert_eq!(throwable.describe(Some("bad port")), "ParseIntError: bad port");
/// ```
#[derive(Clone, Copy)]
pub struct Throwable<'a> {
    kind: &'a str,
    error: &'a (dyn Error + 'static),
}

impl<'a> Throwable<'a> {
    /// Wrap a concrete error; its kind is derived from the type name.
    pub fn new<E>(error: &'a E) -> Self
    where
        E: Error + 'static,
    {
        Throwable {
            kind: name::simple_name_of::<E>(),
            error,
        }
    }

    /// Wrap a type-erased error under an explicit kind.
    pub fn with_kind(kind: &'a str, error: &'a (dyn Error + 'static)) -> Self {
        Throwable { kind, error }
    }

    /// Simple name of the error type.
    pub fn kind(&self) -> &'a str {
        self.kind
    }

    /// The wrapped error.
    pub fn error(&self) -> &'a (dyn Error + 'static) {
        self.error
    }

    /// `"<kind>: <message>"`, where the message defaults to the error's own
    /// text.
    pub fn describe(&self, message: Option<&str>) -> String {
        match message {
            Some(message) => format!("{}: {}", self.kind, message),
            None => format!("{}: {}", self.kind, self.error),
        }
    }
}

impl<'a> From<&'a (dyn Error + 'static)> for Throwable<'a> {
    fn from(error: &'a (dyn Error + 'static)) -> Self {
        Throwable::with_kind("Error", error)
    }
}

impl<'a> From<&'a (dyn Error + Send + Sync + 'static)> for Throwable<'a> {
    fn from(error: &'a (dyn Error + Send + Sync + 'static)) -> Self {
        Throwable::with_kind("Error", error)
    }
}

impl fmt::Debug for Throwable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throwable")
            .field("kind", &self.kind)
            .field("error", &self.error)
            .finish()
    }
}

impl fmt::Display for Throwable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.error)
    }
}
