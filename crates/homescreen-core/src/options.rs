#![forbid(unsafe_code)]

//! Frontend configuration.
//!
//! Every field has a default, so a zero-config embed is just
//! `InstallOptions::default()`. The wasm frontend accepts a plain JS
//! options object and feeds it through [`InstallOptions::from_json_str`];
//! unknown fields are ignored, missing fields take defaults.

use serde::{Deserialize, Serialize};

/// Worker script path, resolved against the hosting page's location.
pub const DEFAULT_SERVICE_WORKER_PATH: &str = "./sw.js";
/// Container element the button mounts into (soft dependency).
pub const DEFAULT_CONTAINER_ID: &str = "install";
/// Fixed logical id of the install button; the render guard keys on it.
pub const DEFAULT_BUTTON_ID: &str = "install-app-button";
/// Default button label.
pub const DEFAULT_BUTTON_LABEL: &str = "Install App";
/// Default proactive reveal delay, tolerating late DOM readiness.
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 1_000;

/// Install-affordance configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallOptions {
    /// Worker script path, resolved against the page location.
    pub service_worker_path: String,
    /// Id of the container element the button mounts into. A page without
    /// the container simply gets no button.
    pub container_id: String,
    /// Id assigned to the button element.
    pub button_id: String,
    /// Button label text.
    pub button_label: String,
    /// Delay before the proactive reveal on platforms without a native
    /// install signal.
    pub reveal_delay_ms: u32,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            service_worker_path: DEFAULT_SERVICE_WORKER_PATH.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            button_id: DEFAULT_BUTTON_ID.to_string(),
            button_label: DEFAULT_BUTTON_LABEL.to_string(),
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}

impl InstallOptions {
    /// Parse options from a JSON object string.
    pub fn from_json_str(raw: &str) -> Result<Self, OptionsError> {
        serde_json::from_str(raw).map_err(|err| OptionsError {
            detail: err.to_string(),
        })
    }

    /// Stable JSON encoding.
    pub fn to_json_string(&self) -> Result<String, OptionsError> {
        serde_json::to_string(self).map_err(|err| OptionsError {
            detail: err.to_string(),
        })
    }
}

/// Options that fail to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsError {
    detail: String,
}

impl core::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid install options: {}", self.detail)
    }
}

impl std::error::Error for OptionsError {}
