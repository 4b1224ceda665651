//! Wire encoding (JSON text frames).
//!
//! `encode` never touches the caller's envelope: it stamps a copy with the
//! transport-supplied correlation id and serializes that copy.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, SsapError};
use crate::protocol::envelope::Envelope;
use crate::protocol::luna::SettingsEnvelope;

/// Envelopes that can carry a correlation id.
pub trait Stamp: Serialize + Clone {
    /// A copy of `self` with `id` set. `self` is left as is.
    fn with_id(&self, id: &str) -> Self;

    /// The correlation id, present only on stamped copies.
    fn id(&self) -> Option<&str>;
}

impl Stamp for Envelope {
    fn with_id(&self, id: &str) -> Self {
        self.stamped(id)
    }

    fn id(&self) -> Option<&str> {
        Envelope::id(self)
    }
}

impl Stamp for SettingsEnvelope {
    fn with_id(&self, id: &str) -> Self {
        self.stamped(id)
    }

    fn id(&self) -> Option<&str> {
        SettingsEnvelope::id(self)
    }
}

/// Serialize `envelope` with `id` injected.
pub fn encode<E: Stamp>(envelope: &E, id: &str) -> Result<String> {
    let stamped = envelope.with_id(id);
    let text = serde_json::to_string(&stamped)
        .map_err(|e| SsapError::Encoding(format!("envelope {id}: {e}")))?;
    tracing::trace!(%id, bytes = text.len(), "encoded envelope");
    Ok(text)
}

/// Like [`encode`], as bytes for binary-oriented transports.
pub fn encode_to_vec<E: Stamp>(envelope: &E, id: &str) -> Result<Vec<u8>> {
    encode(envelope, id).map(String::into_bytes)
}

fn decode<T: DeserializeOwned>(s: &str) -> Result<T> {
    serde_json::from_str(s).map_err(|e| SsapError::Decoding(format!("invalid envelope json: {e}")))
}

pub fn decode_envelope(s: &str) -> Result<Envelope> {
    decode(s)
}

pub fn decode_settings_envelope(s: &str) -> Result<SettingsEnvelope> {
    decode(s)
}
