use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where listings are fetched from and how post links are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin the listing endpoints hang off (e.g., "https://www.reddit.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Prefix prepended verbatim to each post's permalink.
    #[serde(default = "default_link_origin")]
    pub link_origin: String,
    /// User-Agent header sent with every listing request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "https://www.reddit.com".to_string()
}

fn default_link_origin() -> String {
    "http://reddit.com".to_string()
}

fn default_user_agent() -> String {
    format!("reddit-top/{}", env!("CARGO_PKG_VERSION"))
}

fn default_connect_timeout() -> u32 {
    10
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            link_origin: default_link_origin(),
            user_agent: default_user_agent(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
