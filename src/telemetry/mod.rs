//! Flow for relaying recorded sensor readings to the collection server,
//! one reading per second, round-robin over the loaded file.

mod emitter;
mod record_source;
mod transport;

pub use emitter::Emitter;
pub use record_source::{Reading, ReadingLoadError, RecordSource};
pub use transport::{CollectionPoint, Transport};

#[cfg(test)]
mod tests;
