//! Command → envelope translation.
//!
//! Three decisions per command: the target uri (static table below), the
//! envelope type, and the payload. Translation never fails. A command with no
//! table entry yields an envelope without a uri; callers that need a target
//! can add one with [`Envelope::with_uri`] or detect the gap with
//! [`Envelope::require_uri`].

use crate::command::{Command, SettingsCommand};
use crate::protocol::envelope::{Envelope, RequestType};
use crate::protocol::luna::{AlertPayload, SettingsEnvelope, ALERT_TITLE};
use crate::protocol::payload::{
    Payload, SettingsCategory, SystemSettings, PICTURE_KEYS, SOUND_KEYS,
};

/// Luna endpoint for every settings write.
pub const SET_SYSTEM_SETTINGS_URI: &str = "luna://com.webos.settingsservice/setSystemSettings";
/// SSAP endpoint for every settings read.
pub const GET_SYSTEM_SETTINGS_URI: &str = "ssap://settings/getSystemSettings";

impl Command {
    /// Static endpoint for this command, if it has one.
    pub fn uri(&self) -> Option<&'static str> {
        let uri = match self {
            Command::Register { .. } => return None,
            Command::SetPin { .. } => "ssap://pairing/setPin",
            Command::CastPhoto { .. } => "ssap://media.viewer/open",
            Command::StopCasting => "ssap://media.viewer/close",
            Command::VolumeUp => "ssap://audio/volumeUp",
            Command::VolumeDown => "ssap://audio/volumeDown",
            Command::GetVolume { .. } => "ssap://audio/getVolume",
            Command::SetVolume { .. } => "ssap://audio/setVolume",
            Command::SetMute { .. } => "ssap://audio/setMute",
            Command::GetSoundOutput { .. } => "ssap://audio/getSoundOutput",
            Command::ChangeSoundOutput { .. } => "ssap://audio/changeSoundOutput",
            Command::Play => "ssap://media.controls/play",
            Command::Pause => "ssap://media.controls/pause",
            Command::Stop => "ssap://media.controls/stop",
            Command::Rewind => "ssap://media.controls/rewind",
            Command::FastForward => "ssap://media.controls/fastForward",
            Command::Toast { .. } => "ssap://system.notifications/createToast",
            Command::GetPowerState { .. } => "ssap://com.webos.service.tvpower/power/getPowerState",
            Command::ScreenOff => "ssap://com.webos.service.tvpower/power/turnOffScreen",
            Command::ScreenOn => "ssap://com.webos.service.tvpower/power/turnOnScreen",
            Command::TurnOff => "ssap://system/turnOff",
            Command::SystemInfo => "ssap://com.webos.service.update/getCurrentSWInformation",
            Command::MacAddressInfo => "ssap://com.webos.service.connectionmanager",
            Command::ListApps => "ssap://com.webos.applicationManager/listApps",
            Command::GetForegroundApp { .. } => {
                "ssap://com.webos.applicationManager/getForegroundAppInfo"
            }
            Command::GetForegroundAppMediaStatus { .. } => {
                "ssap://com.webos.media/getForegroundAppInfo"
            }
            Command::LaunchApp { .. } => "ssap://system.launcher/launch",
            Command::CloseApp { .. } => "ssap://system.launcher/close",
            Command::InsertText { .. } => "ssap://com.webos.service.ime/insertText",
            Command::SendEnterKey => "ssap://com.webos.service.ime/sendEnterKey",
            Command::DeleteCharacters { .. } => "ssap://com.webos.service.ime/deleteCharacters",
            Command::RegisterRemoteKeyboard => {
                "ssap://com.webos.service.ime/registerRemoteKeyboard"
            }
            Command::GetPointerInputSocket => {
                "ssap://com.webos.service.networkinput/getPointerInputSocket"
            }
            Command::ChannelUp => "ssap://tv/channelUp",
            Command::ChannelDown => "ssap://tv/channelDown",
            Command::ListSources => "ssap://tv/getExternalInputList",
            Command::SetSource { .. } => "ssap://tv/switchInput",
            Command::GetPictureSettings { .. } | Command::GetSoundMode { .. } => {
                GET_SYSTEM_SETTINGS_URI
            }
        };
        Some(uri)
    }

    /// Envelope type this command is sent with.
    pub fn request_type(&self) -> RequestType {
        match self {
            Command::Register { .. } => RequestType::Register,
            Command::RegisterRemoteKeyboard => RequestType::Subscribe,
            other => match other.subscription() {
                Some(flag) => RequestType::for_subscription(flag),
                None => RequestType::Request,
            },
        }
    }

    /// Request body, if this command sends one.
    pub fn payload(&self) -> Option<Payload> {
        let payload = match self {
            Command::Register {
                pairing_type,
                client_key,
            } => Payload::pairing(*pairing_type, client_key.as_deref()),
            Command::SetPin { pin } => Payload::pin(pin),
            Command::CastPhoto { url } => Payload::media(url),
            Command::StopCasting => Payload::default(),
            Command::SetVolume { level } => Payload::volume(*level),
            Command::SetMute { mute } => Payload::mute(*mute),
            Command::ChangeSoundOutput { output } => Payload::sound_output(*output),
            Command::Toast {
                message,
                icon_data,
                icon_extension,
            } => Payload::toast(message, icon_data.as_deref(), icon_extension.as_deref()),
            Command::ScreenOn | Command::ScreenOff => Payload::standby_active(),
            Command::LaunchApp {
                app_id,
                content_id,
                params,
            } => Payload::launch(app_id, content_id.as_deref(), params.as_ref()),
            Command::CloseApp { app_id, session_id } => {
                Payload::close_app(app_id, session_id.as_deref())
            }
            Command::InsertText { text, replace } => Payload::insert_text(text, *replace),
            Command::DeleteCharacters { count } => Payload::delete_characters(*count),
            Command::SetSource { input_id } => Payload::source(input_id),
            Command::GetPictureSettings { .. } => {
                Payload::settings_query(SettingsCategory::Picture, &PICTURE_KEYS)
            }
            Command::GetSoundMode { .. } => {
                Payload::settings_query(SettingsCategory::Sound, &SOUND_KEYS)
            }
            Command::VolumeUp
            | Command::VolumeDown
            | Command::GetVolume { .. }
            | Command::GetSoundOutput { .. }
            | Command::Play
            | Command::Pause
            | Command::Stop
            | Command::Rewind
            | Command::FastForward
            | Command::GetPowerState { .. }
            | Command::TurnOff
            | Command::SystemInfo
            | Command::MacAddressInfo
            | Command::ListApps
            | Command::GetForegroundApp { .. }
            | Command::GetForegroundAppMediaStatus { .. }
            | Command::SendEnterKey
            | Command::RegisterRemoteKeyboard
            | Command::GetPointerInputSocket
            | Command::ChannelUp
            | Command::ChannelDown
            | Command::ListSources => return None,
        };
        Some(payload)
    }

    pub fn to_envelope(&self) -> Envelope {
        Envelope::new(self.request_type(), self.uri(), self.payload())
    }
}

/// Translate a command into its (id-less) request envelope.
pub fn translate(command: &Command) -> Envelope {
    command.to_envelope()
}

impl SettingsCommand {
    /// Luna endpoint the alert hooks call. Constant across the catalog.
    pub fn uri(&self) -> &'static str {
        SET_SYSTEM_SETTINGS_URI
    }

    pub fn title(&self) -> &'static str {
        ALERT_TITLE
    }

    /// The `{category, settings}` object applied by the luna call.
    pub fn params(&self) -> Payload {
        match self {
            SettingsCommand::SetPictureSettings {
                brightness,
                contrast,
                color,
                backlight,
            } => Payload::settings_write(
                SettingsCategory::Picture,
                SystemSettings {
                    brightness: Some(*brightness),
                    contrast: Some(*contrast),
                    backlight: Some(*backlight),
                    color: Some(*color),
                    ..SystemSettings::default()
                },
            ),
            SettingsCommand::SetPictureMode { mode } => Payload::settings_write(
                SettingsCategory::Picture,
                SystemSettings {
                    picture_mode: Some(mode.clone()),
                    ..SystemSettings::default()
                },
            ),
            SettingsCommand::SetSoundMode { mode } => Payload::settings_write(
                SettingsCategory::Sound,
                SystemSettings {
                    sound_mode: Some(mode.clone()),
                    ..SystemSettings::default()
                },
            ),
        }
    }

    pub fn to_envelope(&self) -> SettingsEnvelope {
        let params = self.params();
        SettingsEnvelope::new(AlertPayload::repeating(self.uri(), &params, self.title()))
    }
}
