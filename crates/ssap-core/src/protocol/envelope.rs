//! SSAP request envelope (JSON).

use serde::{Deserialize, Serialize};

use crate::error::{Result, SsapError};
use crate::protocol::payload::Payload;

/// Envelope discriminator (field name is `type` in JSON).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// One-shot request.
    Request,
    /// Pairing handshake.
    Register,
    /// Ask for push updates.
    Subscribe,
    /// Cancel push updates.
    Unsubscribe,
}

impl RequestType {
    /// Envelope type for a subscribable query.
    ///
    /// `Some(true)` subscribes, `Some(false)` unsubscribes, `None` is a
    /// one-shot request.
    pub fn for_subscription(subscribe: Option<bool>) -> Self {
        match subscribe {
            Some(true) => RequestType::Subscribe,
            Some(false) => RequestType::Unsubscribe,
            None => RequestType::Request,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequestType::Request => "request",
            RequestType::Register => "register",
            RequestType::Subscribe => "subscribe",
            RequestType::Unsubscribe => "unsubscribe",
        }
    }
}

/// SSAP request envelope.
///
/// Built without an id. The correlation id is only ever set on a copy made by
/// [`crate::encode::Stamp::with_id`] right before the frame is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    #[serde(rename = "type")]
    request_type: RequestType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<Payload>,
}

impl Envelope {
    pub fn new(request_type: RequestType, uri: Option<&str>, payload: Option<Payload>) -> Self {
        Self {
            request_type,
            id: None,
            uri: uri.map(str::to_owned),
            payload,
        }
    }

    /// Return a copy targeting `uri`, for commands the static table cannot
    /// resolve.
    pub fn with_uri(&self, uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..self.clone()
        }
    }

    pub fn request_type(&self) -> RequestType {
        self.request_type
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// The target uri, or `TranslationGap` naming `command` when there is none.
    pub fn require_uri(&self, command: &'static str) -> Result<&str> {
        self.uri()
            .ok_or(SsapError::TranslationGap { command })
    }

    pub(crate) fn stamped(&self, id: &str) -> Self {
        Self {
            id: Some(id.to_owned()),
            ..self.clone()
        }
    }
}
