//! ssap core: command catalog, request envelopes, and the encoder for the
//! SSAP television control protocol (plus the Luna settings-dialog flavor).
//!
//! The crate turns a [`Command`] into an [`Envelope`] and an envelope plus an
//! externally supplied correlation id into wire text. It never owns a socket,
//! never generates ids, and keeps no state between calls, so every entry point
//! is safe to call from any thread.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `SsapError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod command;
pub mod encode;
pub mod error;
pub mod protocol;
pub mod translate;

pub use command::{Command, PairingType, SettingsCommand, SoundOutput};
pub use encode::{decode_envelope, decode_settings_envelope, encode, encode_to_vec, Stamp};
/// Shared result type.
pub use error::{Result, SsapError};
pub use protocol::envelope::{Envelope, RequestType};
pub use protocol::luna::SettingsEnvelope;
pub use protocol::payload::Payload;
pub use translate::translate;
