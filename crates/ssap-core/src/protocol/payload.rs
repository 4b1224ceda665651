//! Request payloads.
//!
//! One struct carries every field any command can populate. Builders below
//! fill in exactly the fields of their command; everything else stays `None`
//! and is omitted on the wire.

use std::collections::BTreeMap;

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};

use crate::command::{PairingType, SoundOutput};
use crate::protocol::manifest::Manifest;

/// Extra launch arguments handed to an app (`params` in JSON).
pub type LaunchParams = BTreeMap<String, ParamValue>;

/// A single launch argument value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ParamValue::Bool(b) => s.serialize_bool(*b),
            ParamValue::Integer(i) => s.serialize_i64(*i),
            // serde_json would silently write `null` here.
            ParamValue::Float(f) if !f.is_finite() => {
                Err(S::Error::custom(format!("non-finite number: {f}")))
            }
            ParamValue::Float(f) => s.serialize_f64(*f),
            ParamValue::Text(t) => s.serialize_str(t),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Integer(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

/// Settings group addressed by `getSystemSettings`/`setSystemSettings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsCategory {
    Picture,
    Sound,
}

/// Setting values written through the Luna settings service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SystemSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backlight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_mode: Option<String>,
}

/// Request body. Field names are camelCase on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Payload {
    // pairing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_pairing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<Manifest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pairing_type: Option<PairingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,

    // media / audio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<SoundOutput>,

    // notifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "icon_data::serialize",
        deserialize_with = "icon_data::deserialize"
    )]
    pub icon_data: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_extension: Option<String>,

    // power
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standby_mode: Option<String>,

    // apps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<LaunchParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    // text input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,

    // sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_id: Option<String>,

    // settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SettingsCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SystemSettings>,
}

/// Keys read by `getPictureSettings`.
pub const PICTURE_KEYS: [&str; 4] = ["brightness", "backlight", "contrast", "color"];
/// Keys read by `getSoundMode`.
pub const SOUND_KEYS: [&str; 1] = ["soundMode"];

impl Payload {
    /// Pairing handshake body. No client key means a fresh pairing.
    pub fn pairing(pairing_type: PairingType, client_key: Option<&str>) -> Self {
        Self {
            force_pairing: Some(false),
            manifest: Some(Manifest::default()),
            pairing_type: Some(pairing_type),
            client_key: client_key.map(str::to_owned),
            ..Self::default()
        }
    }

    pub fn pin(pin: &str) -> Self {
        Self {
            pin: Some(pin.to_owned()),
            ..Self::default()
        }
    }

    pub fn media(media_id: &str) -> Self {
        Self {
            media_id: Some(media_id.to_owned()),
            ..Self::default()
        }
    }

    pub fn volume(level: u32) -> Self {
        Self {
            volume: Some(level),
            ..Self::default()
        }
    }

    pub fn mute(mute: bool) -> Self {
        Self {
            mute: Some(mute),
            ..Self::default()
        }
    }

    pub fn sound_output(output: SoundOutput) -> Self {
        Self {
            output: Some(output),
            ..Self::default()
        }
    }

    pub fn toast(message: &str, icon_data: Option<&[u8]>, icon_extension: Option<&str>) -> Self {
        Self {
            message: Some(message.to_owned()),
            icon_data: icon_data.map(<[u8]>::to_vec),
            icon_extension: icon_extension.map(str::to_owned),
            ..Self::default()
        }
    }

    /// Body for both screen on and screen off.
    pub fn standby_active() -> Self {
        Self {
            standby_mode: Some("active".to_owned()),
            ..Self::default()
        }
    }

    pub fn launch(app_id: &str, content_id: Option<&str>, params: Option<&LaunchParams>) -> Self {
        Self {
            id: Some(app_id.to_owned()),
            content_id: content_id.map(str::to_owned),
            params: params.cloned(),
            ..Self::default()
        }
    }

    pub fn close_app(app_id: &str, session_id: Option<&str>) -> Self {
        Self {
            id: Some(app_id.to_owned()),
            session_id: session_id.map(str::to_owned),
            ..Self::default()
        }
    }

    pub fn insert_text(text: &str, replace: bool) -> Self {
        Self {
            text: Some(text.to_owned()),
            replace: Some(replace),
            ..Self::default()
        }
    }

    pub fn delete_characters(count: u32) -> Self {
        Self {
            count: Some(count),
            ..Self::default()
        }
    }

    pub fn source(input_id: &str) -> Self {
        Self {
            input_id: Some(input_id.to_owned()),
            ..Self::default()
        }
    }

    /// Read request for specific setting keys.
    pub fn settings_query(category: SettingsCategory, keys: &[&str]) -> Self {
        Self {
            category: Some(category),
            keys: Some(keys.iter().map(|k| (*k).to_owned()).collect()),
            ..Self::default()
        }
    }

    /// Write request carried inside a Luna alert.
    pub fn settings_write(category: SettingsCategory, settings: SystemSettings) -> Self {
        Self {
            category: Some(category),
            settings: Some(settings),
            ..Self::default()
        }
    }
}

/// `iconData` travels as standard base64 text.
pub(crate) mod icon_data {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        v: &Option<Vec<u8>>,
        s: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match v {
            Some(bytes) => s.serialize_str(&STANDARD.encode(bytes)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> std::result::Result<Option<Vec<u8>>, D::Error> {
        let text: Option<String> = Option::deserialize(d)?;
        text.map(|t| STANDARD.decode(t).map_err(D::Error::custom))
            .transpose()
    }
}
