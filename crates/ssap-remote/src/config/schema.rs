use serde::Deserialize;
use ssap_core::error::{Result, SsapError};
use ssap_core::{Command, PairingType};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    pub version: u32,

    #[serde(default)]
    pub pairing: PairingSection,

    #[serde(default)]
    pub limits: LimitsSection,
}

impl RemoteConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SsapError::UnsupportedVersion);
        }

        self.pairing.validate()?;
        self.limits.validate()?;

        Ok(())
    }

    /// Pairing request for this controller: resumes with the stored key when
    /// there is one, otherwise asks for a fresh pairing.
    pub fn register_command(&self) -> Command {
        Command::Register {
            pairing_type: self.pairing.pairing_type,
            client_key: self.pairing.client_key.clone(),
        }
    }
}

/// Stored pairing state.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PairingSection {
    #[serde(default, rename = "type")]
    pub pairing_type: PairingType,

    /// Key issued by the TV on a previous successful pairing.
    #[serde(default)]
    pub client_key: Option<String>,
}

impl PairingSection {
    pub fn validate(&self) -> Result<()> {
        if let Some(key) = &self.client_key {
            if key.trim().is_empty() {
                return Err(SsapError::BadConfig(
                    "pairing.client_key must not be empty (omit it to pair again)".into(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsSection {
    #[serde(default = "default_max_frame_bytes")]
    pub max_frame_bytes: usize,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            max_frame_bytes: default_max_frame_bytes(),
        }
    }
}

impl LimitsSection {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_FRAME_BYTES..=MAX_FRAME_BYTES).contains(&self.max_frame_bytes) {
            return Err(SsapError::BadConfig(format!(
                "limits.max_frame_bytes must be between {MIN_FRAME_BYTES} and {MAX_FRAME_BYTES}"
            )));
        }
        Ok(())
    }
}

/// Leaves room for the pairing frame, which carries the full manifest.
pub const MIN_FRAME_BYTES: usize = 4096;
pub const MAX_FRAME_BYTES: usize = 16 * 1024 * 1024;

fn default_max_frame_bytes() -> usize {
    1024 * 1024
}
