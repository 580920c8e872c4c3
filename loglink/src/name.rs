//! Canonical logger names.
//!
//! Loggers requested for a type are registered under an abbreviated form of
//! the type's qualified name: every segment but the last is reduced to its
//! first character. This keeps the name column of log lines narrow while the
//! final, discriminating segment stays readable.
//!
//! ```
//! assert_eq!(loglink::name::abbreviate("com.example.service.UserManager"), "c.e.s.UserManager");
//! ```

use std::any;

/// Abbreviates a dotted qualified name.
///
/// Names without a dot are returned unchanged. Empty segments stay empty.
pub fn abbreviate(qualified: &str) -> String {
    let mut out = String::with_capacity(qualified.len());
    let mut segments = qualified.split('.').peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            out.push_str(segment);
        } else {
            out.extend(segment.chars().next());
            out.push('.');
        }
    }
    out
}

/// Dotted qualified name of `T`, e.g. `my_crate.service.UserManager`.
///
/// Path separators (`::`) become dots and generic arguments are dropped, so
/// `Vec<String>` yields `alloc.vec.Vec`. References, pointers and trait
/// objects are named after the type they point to: `&dyn Handler + Send`
/// yields the path of `Handler`.
pub fn qualified_name_of<T: ?Sized>() -> String {
    type_path(any::type_name::<T>()).replace("::", ".")
}

/// Canonical (abbreviated) logger name for `T`.
pub fn canonical_name_of<T: ?Sized>() -> String {
    abbreviate(&qualified_name_of::<T>())
}

/// Last path segment of `T`'s name without generic arguments, e.g.
/// `ParseIntError` for `core::num::error::ParseIntError`.
pub fn simple_name_of<T: ?Sized>() -> &'static str {
    let path = type_path(any::type_name::<T>());
    path.rsplit("::").next().unwrap_or(path)
}

const INDIRECTIONS: [&str; 5] = ["&", "mut ", "dyn ", "*const ", "*mut "];

/// Path of the named type in a `type_name` string, without indirections,
/// generic arguments or additional trait bounds.
fn type_path(full: &str) -> &str {
    let mut path = full;
    while let Some(rest) = INDIRECTIONS.iter().find_map(|prefix| path.strip_prefix(prefix)) {
        path = rest;
    }
    let end = path.find(|c: char| c == '<' || c == ' ').unwrap_or(path.len());
    &path[..end]
}
