//! In-memory backend and listener for testing purpose.
//!
//! [`InMemoryBackend`] records everything its channels receive,
//! [`InMemoryListener`] records the events it is notified of. Both are
//! cheap to clone; clones share their storage.

mod in_memory_backend;
mod in_memory_listener;

pub use in_memory_backend::{ChannelRecord, InMemoryBackend, InMemoryChannel, ThrowableRecord};
pub use in_memory_listener::InMemoryListener;
