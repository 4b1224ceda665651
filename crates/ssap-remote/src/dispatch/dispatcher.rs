use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use ssap_core::error::{Result, SsapError};
use ssap_core::{
    encode_to_vec, translate, Command, Envelope, RequestType, SettingsCommand, Stamp,
};

use crate::config::LimitsSection;

/// Outbound half of a TV connection. Response matching by id stays on the
/// transport side.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, frame: Bytes) -> Result<()>;
}

/// Correlation ids. Must be unique across in-flight requests.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Translate → stamp → encode → send. Holds no per-request state.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    ids: Arc<dyn IdSource>,
    max_frame_bytes: usize,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>, ids: Arc<dyn IdSource>, limits: &LimitsSection) -> Self {
        Self {
            transport,
            ids,
            max_frame_bytes: limits.max_frame_bytes,
        }
    }

    /// Send a remote-control command. Returns the correlation id used.
    pub async fn send(&self, command: &Command) -> Result<String> {
        self.send_request(&translate(command), command.name()).await
    }

    /// Send an SSAP envelope. A missing uri is logged and the frame still goes
    /// out, so callers can inject targets the static table lacks.
    pub async fn send_request(&self, env: &Envelope, label: &'static str) -> Result<String> {
        // Pairing is addressed by envelope type, not uri.
        if env.request_type() != RequestType::Register {
            if let Err(gap) = env.require_uri(label) {
                tracing::warn!(command = label, "{gap}; sending without target");
            }
        }

        self.send_envelope(env, label).await
    }

    /// Send a Luna settings write wrapped in its alert dialog.
    pub async fn send_settings(&self, command: &SettingsCommand) -> Result<String> {
        let env = command.to_envelope();
        self.send_envelope(&env, command.name()).await
    }

    pub async fn send_envelope<E: Stamp + Sync>(&self, env: &E, label: &str) -> Result<String> {
        let id = self.ids.next_id();
        let frame = encode_to_vec(env, &id)?;

        if frame.len() > self.max_frame_bytes {
            return Err(SsapError::FrameTooLarge {
                size: frame.len(),
                max: self.max_frame_bytes,
            });
        }

        tracing::debug!(command = label, %id, bytes = frame.len(), "sending frame");
        self.transport.send(Bytes::from(frame)).await?;
        Ok(id)
    }
}
