//! Remote config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use ssap_core::error::{Result, SsapError};

pub use schema::{LimitsSection, PairingSection, RemoteConfig};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<RemoteConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| SsapError::BadConfig(format!("read {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<RemoteConfig> {
    let cfg: RemoteConfig = serde_yaml::from_str(s)
        .map_err(|e| SsapError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
