use serde::Deserialize;

use crate::api::requests::RequestEncoding;
use crate::error::{Result, SandboxError};
use crate::sandbox::editor::PrefillPolicy;

/// Runtime settings. Missing fields fall back to [`Default`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Base URL of the simulation server. Empty means same origin.
    pub server_url: String,
    /// Directory the component icons are served from.
    pub asset_base: String,
    pub encoding: RequestEncoding,
    pub prefill: PrefillPolicy,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            asset_base: "/img".to_string(),
            encoding: RequestEncoding::default(),
            prefill: PrefillPolicy::default(),
        }
    }
}

impl SandboxConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SandboxError::Config)
    }

    /// Reads the JSON baked in through `CIRCUIT_SANDBOX_CONFIG` at build time.
    pub fn from_build_env() -> Result<Self> {
        match option_env!("CIRCUIT_SANDBOX_CONFIG") {
            Some(json) => Self::from_json(json),
            None => Ok(Self::default()),
        }
    }
}
