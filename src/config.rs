use crate::gateway::DEFAULT_PAGE_SIZE;
use std::time::Duration;

pub const DEFAULT_URL: &str = "http://localhost:9200";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    None,
    ApiKey(String),
    Basic { username: String, password: String },
}

/// Connection settings for the Elasticsearch gateway
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    pub url: String,
    pub credentials: Credentials,
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            credentials: Credentials::None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    /// Build a config from raw flag/env values.
    ///
    /// A non-blank API key wins over basic auth; basic auth needs a non-blank username.
    pub fn resolve(
        url: Option<&str>,
        api_key: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
        timeout_secs: u64,
    ) -> Self {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_URL)
            .to_string();

        let api_key = api_key.map(str::trim).filter(|k| !k.is_empty());
        let username = username.filter(|u| !u.trim().is_empty());

        let credentials = match (api_key, username) {
            (Some(key), _) => Credentials::ApiKey(key.to_string()),
            (None, Some(user)) => Credentials::Basic {
                username: user.to_string(),
                password: password.unwrap_or_default().to_string(),
            },
            (None, None) => Credentials::None,
        };

        Self {
            url,
            credentials,
            timeout: Duration::from_secs(timeout_secs.max(1)),
        }
    }
}

/// Settings for the interactive browser itself
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserOptions {
    pub page_size: usize,
    pub command_timeout: Duration,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            command_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl BrowserOptions {
    pub fn new(page_size: i64, timeout_secs: u64) -> Self {
        let page_size = if page_size <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size as usize
        };
        Self {
            page_size,
            command_timeout: Duration::from_secs(timeout_secs.max(1)),
        }
    }
}
