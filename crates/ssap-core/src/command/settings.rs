//! Luna settings-write catalog.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings writes. All of them go through the same luna endpoint; only the
/// nested settings object differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum SettingsCommand {
    SetPictureSettings {
        brightness: u32,
        contrast: u32,
        color: u32,
        backlight: u32,
    },
    SetPictureMode {
        mode: String,
    },
    SetSoundMode {
        mode: String,
    },
}

impl SettingsCommand {
    /// Every tag of the tagged JSON form.
    pub const NAMES: &'static [&'static str] =
        &["setPictureSettings", "setPictureMode", "setSoundMode"];

    pub fn name(&self) -> &'static str {
        match self {
            SettingsCommand::SetPictureSettings { .. } => "setPictureSettings",
            SettingsCommand::SetPictureMode { .. } => "setPictureMode",
            SettingsCommand::SetSoundMode { .. } => "setSoundMode",
        }
    }

    /// Parse the tagged JSON form, e.g. `{"command": "setPictureMode", "mode": "vivid"}`.
    pub fn from_json(s: &str) -> Result<Self> {
        super::from_tagged_json(s, Self::NAMES)
    }
}
