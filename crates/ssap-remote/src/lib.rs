//! ssap-remote library entry.
//!
//! Wires the core translator/encoder to the outside world: strict YAML config
//! (stored pairing key, frame limits), tracing setup, and a dispatcher that
//! hands encoded frames to a pluggable transport. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod config;
pub mod dispatch;
pub mod obs;
pub mod transport;
