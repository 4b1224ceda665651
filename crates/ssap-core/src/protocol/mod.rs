//! Wire model for outbound requests.
//!
//! - `envelope`: the SSAP request envelope (`type`/`id`/`uri`/`payload`).
//! - `luna`: the alert-dialog envelope that carries Luna settings writes.
//! - `payload`: the open, optional-field body shared by every command.
//! - `manifest`: the fixed capability manifest sent while pairing.
//!
//! Absent optional fields are omitted from the wire, never written as `null`.

pub mod envelope;
pub mod luna;
pub mod manifest;
pub mod payload;
