//! Transports bundled with the crate.
//!
//! Real socket transports live elsewhere; these cover printing frames and
//! handing them to an in-process consumer.

pub mod channel;
pub mod stdout;

pub use channel::ChannelTransport;
pub use stdout::StdoutTransport;
