//! Luna settings writes, wrapped in an SSAP alert dialog.
//!
//! The TV only accepts `luna://` calls from an alert's button/close/fail hooks,
//! so a settings write is sent as a `createAlert` request whose three hooks all
//! call the same luna endpoint with the same params. Whatever the user does
//! with the dialog, the setting is applied.

use serde::{Deserialize, Serialize};

use crate::protocol::envelope::RequestType;
use crate::protocol::payload::Payload;

/// SSAP endpoint that shows the alert.
pub const ALERT_URI: &str = "ssap://system.notifications/createAlert";
/// Title and message shown while the setting is applied.
pub const ALERT_TITLE: &str = "Setting...";

/// Button hook: call `on_click` with `params`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AlertButton {
    pub on_click: String,
    pub params: Payload,
}

/// Close/fail hook: call `uri` with `params`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlertHook {
    pub uri: String,
    pub params: Payload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AlertPayload {
    pub buttons: Vec<AlertButton>,
    pub on_close: AlertHook,
    pub on_fail: AlertHook,
    pub title: String,
    pub message: String,
}

impl AlertPayload {
    /// One button plus close and fail hooks, each with its own copy of `params`.
    pub fn repeating(target: &str, params: &Payload, title: &str) -> Self {
        Self {
            buttons: vec![AlertButton {
                on_click: target.to_owned(),
                params: params.clone(),
            }],
            on_close: AlertHook {
                uri: target.to_owned(),
                params: params.clone(),
            },
            on_fail: AlertHook {
                uri: target.to_owned(),
                params: params.clone(),
            },
            title: title.to_owned(),
            message: title.to_owned(),
        }
    }
}

/// Alert-dialog envelope. The outer uri is always [`ALERT_URI`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsEnvelope {
    #[serde(rename = "type")]
    request_type: RequestType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    uri: String,
    payload: AlertPayload,
}

impl SettingsEnvelope {
    pub fn new(payload: AlertPayload) -> Self {
        Self {
            request_type: RequestType::Request,
            id: None,
            uri: ALERT_URI.to_owned(),
            payload,
        }
    }

    pub fn request_type(&self) -> RequestType {
        self.request_type
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn payload(&self) -> &AlertPayload {
        &self.payload
    }

    pub(crate) fn stamped(&self, id: &str) -> Self {
        Self {
            id: Some(id.to_owned()),
            ..self.clone()
        }
    }
}
