//! TOML file configuration structures.
//!
//! These structs directly map to the `xendit.toml` file format.

use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub xendit: XenditConfig,
}

/// API connection section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XenditConfig {
    /// Root URL of the API.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Secret API key. May be left out when `XENDIT_SECRET_KEY` is set.
    #[serde(default)]
    pub secret_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> Url {
    Url::parse(xendit_sdk::config::DEFAULT_BASE_URL).expect("valid default base url")
}

impl Default for XenditConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            secret_key: None,
            timeout_secs: None,
        }
    }
}
