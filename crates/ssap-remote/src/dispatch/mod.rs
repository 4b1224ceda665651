//! Dispatcher module exports.
//!
//! Re-exports the dispatcher and its seams so downstream consumers can depend
//! on this module directly.

pub mod dispatcher;

pub use dispatcher::{Dispatcher, IdSource, Transport, UuidIds};
