//! Remote-control command catalog.
//!
//! Each variant carries only the parameters its operation needs. Commands hold
//! no protocol state; [`crate::translate`] turns them into envelopes.
//!
//! Query variants carry a tri-state `subscribe` flag instead of separate
//! subscribe/unsubscribe variants: `Some(true)` subscribes, `Some(false)`
//! unsubscribes, `None` asks once.
//!
//! Commands also have a tagged JSON form, e.g.
//! `{"command": "setVolume", "level": 42}`.

mod settings;

pub use settings::SettingsCommand;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SsapError};
use crate::protocol::payload::LaunchParams;

/// How the TV authorizes a new controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PairingType {
    /// User accepts an on-screen prompt.
    #[default]
    Prompt,
    /// User reads a PIN off the screen; follow up with [`Command::SetPin`].
    Pin,
}

/// Audio output routing targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundOutput {
    TvSpeaker,
    ExternalOptical,
    ExternalArc,
    ExternalSpeaker,
    Lineout,
    Headphone,
    TvExternalSpeaker,
    TvSpeakerHeadphone,
    BtSoundbar,
}

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    // pairing
    Register {
        #[serde(default)]
        pairing_type: PairingType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        client_key: Option<String>,
    },
    SetPin {
        pin: String,
    },

    // media casting
    CastPhoto {
        url: String,
    },
    StopCasting,

    // audio
    VolumeUp,
    VolumeDown,
    GetVolume {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subscribe: Option<bool>,
    },
    SetVolume {
        level: u32,
    },
    SetMute {
        mute: bool,
    },
    GetSoundOutput {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subscribe: Option<bool>,
    },
    ChangeSoundOutput {
        output: SoundOutput,
    },

    // playback
    Play,
    Pause,
    Stop,
    Rewind,
    FastForward,

    // notifications
    Toast {
        message: String,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "crate::protocol::payload::icon_data"
        )]
        icon_data: Option<Vec<u8>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon_extension: Option<String>,
    },

    // power / system
    GetPowerState {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subscribe: Option<bool>,
    },
    ScreenOff,
    ScreenOn,
    TurnOff,
    SystemInfo,
    MacAddressInfo,

    // apps
    ListApps,
    GetForegroundApp {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subscribe: Option<bool>,
    },
    GetForegroundAppMediaStatus {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subscribe: Option<bool>,
    },
    LaunchApp {
        app_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        params: Option<LaunchParams>,
    },
    CloseApp {
        app_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session_id: Option<String>,
    },

    // text input
    InsertText {
        text: String,
        #[serde(default)]
        replace: bool,
    },
    SendEnterKey,
    DeleteCharacters {
        #[serde(default = "one")]
        count: u32,
    },
    RegisterRemoteKeyboard,

    // pointer
    GetPointerInputSocket,

    // channels / sources
    ChannelUp,
    ChannelDown,
    ListSources,
    SetSource {
        input_id: String,
    },

    // settings reads
    GetPictureSettings {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subscribe: Option<bool>,
    },
    GetSoundMode {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subscribe: Option<bool>,
    },
}

impl Command {
    /// Every tag of the tagged JSON form.
    pub const NAMES: &'static [&'static str] = &[
        "register",
        "setPin",
        "castPhoto",
        "stopCasting",
        "volumeUp",
        "volumeDown",
        "getVolume",
        "setVolume",
        "setMute",
        "getSoundOutput",
        "changeSoundOutput",
        "play",
        "pause",
        "stop",
        "rewind",
        "fastForward",
        "toast",
        "getPowerState",
        "screenOff",
        "screenOn",
        "turnOff",
        "systemInfo",
        "macAddressInfo",
        "listApps",
        "getForegroundApp",
        "getForegroundAppMediaStatus",
        "launchApp",
        "closeApp",
        "insertText",
        "sendEnterKey",
        "deleteCharacters",
        "registerRemoteKeyboard",
        "getPointerInputSocket",
        "channelUp",
        "channelDown",
        "listSources",
        "setSource",
        "getPictureSettings",
        "getSoundMode",
    ];

    /// Wire name of the variant, as used in the tagged JSON form and in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Register { .. } => "register",
            Command::SetPin { .. } => "setPin",
            Command::CastPhoto { .. } => "castPhoto",
            Command::StopCasting => "stopCasting",
            Command::VolumeUp => "volumeUp",
            Command::VolumeDown => "volumeDown",
            Command::GetVolume { .. } => "getVolume",
            Command::SetVolume { .. } => "setVolume",
            Command::SetMute { .. } => "setMute",
            Command::GetSoundOutput { .. } => "getSoundOutput",
            Command::ChangeSoundOutput { .. } => "changeSoundOutput",
            Command::Play => "play",
            Command::Pause => "pause",
            Command::Stop => "stop",
            Command::Rewind => "rewind",
            Command::FastForward => "fastForward",
            Command::Toast { .. } => "toast",
            Command::GetPowerState { .. } => "getPowerState",
            Command::ScreenOff => "screenOff",
            Command::ScreenOn => "screenOn",
            Command::TurnOff => "turnOff",
            Command::SystemInfo => "systemInfo",
            Command::MacAddressInfo => "macAddressInfo",
            Command::ListApps => "listApps",
            Command::GetForegroundApp { .. } => "getForegroundApp",
            Command::GetForegroundAppMediaStatus { .. } => "getForegroundAppMediaStatus",
            Command::LaunchApp { .. } => "launchApp",
            Command::CloseApp { .. } => "closeApp",
            Command::InsertText { .. } => "insertText",
            Command::SendEnterKey => "sendEnterKey",
            Command::DeleteCharacters { .. } => "deleteCharacters",
            Command::RegisterRemoteKeyboard => "registerRemoteKeyboard",
            Command::GetPointerInputSocket => "getPointerInputSocket",
            Command::ChannelUp => "channelUp",
            Command::ChannelDown => "channelDown",
            Command::ListSources => "listSources",
            Command::SetSource { .. } => "setSource",
            Command::GetPictureSettings { .. } => "getPictureSettings",
            Command::GetSoundMode { .. } => "getSoundMode",
        }
    }

    /// The subscription flag of a query variant; `None` for everything else.
    pub fn subscription(&self) -> Option<Option<bool>> {
        match self {
            Command::GetVolume { subscribe }
            | Command::GetSoundOutput { subscribe }
            | Command::GetPowerState { subscribe }
            | Command::GetForegroundApp { subscribe }
            | Command::GetForegroundAppMediaStatus { subscribe }
            | Command::GetPictureSettings { subscribe }
            | Command::GetSoundMode { subscribe } => Some(*subscribe),
            _ => None,
        }
    }

    /// Parse the tagged JSON form.
    ///
    /// A tag outside the catalog is `UnsupportedVariant`; any other problem is
    /// `Decoding`.
    pub fn from_json(s: &str) -> Result<Self> {
        from_tagged_json(s, Self::NAMES)
    }
}

/// Shared by both catalogs: split unknown tags from malformed input.
///
/// The tag is checked against `names` before deserializing, so a bad value in
/// a field of a known command is always `Decoding`.
pub(crate) fn from_tagged_json<T: serde::de::DeserializeOwned>(
    s: &str,
    names: &[&str],
) -> Result<T> {
    let value: serde_json::Value =
        serde_json::from_str(s).map_err(|e| SsapError::Decoding(format!("invalid json: {e}")))?;
    let tag = value
        .get("command")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| SsapError::Decoding("missing \"command\" tag".into()))?
        .to_owned();

    if !names.contains(&tag.as_str()) {
        return Err(SsapError::UnsupportedVariant(tag));
    }

    serde_json::from_value(value)
        .map_err(|e| SsapError::Decoding(format!("invalid {tag} command: {e}")))
}
