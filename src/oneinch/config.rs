use std::env;
use std::time::Duration;

use crate::entity::FetchError;
use crate::oneinch::models::ARBITRUM_CHAIN_ID;
use crate::oneinch::presets::Preset;
use crate::utils::parse_flag;

pub const DEFAULT_API_URL: &str = "https://api.1inch.dev";
pub const DEFAULT_API_VERSION: &str = "v5.2";

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// Base URL of the 1inch API, without trailing slash
    pub api_url: String,

    /// Swap API version segment, e.g. "v5.2"
    pub api_version: String,

    pub chain_id: u64,

    /// Bearer token, checked before the request is built
    pub api_token: Option<String>,

    /// No timeout when unset
    pub request_timeout: Option<Duration>,

    pub preset: Preset,

    /// Print the calldata with a leading "0x"
    pub hex_prefix: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            chain_id: ARBITRUM_CHAIN_ID,
            api_token: None,
            request_timeout: None,
            preset: Preset::default(),
            hex_prefix: false,
        }
    }
}

// The token never shows up in logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .field("chain_id", &self.chain_id)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("request_timeout", &self.request_timeout)
            .field("preset", &self.preset)
            .field("hex_prefix", &self.hex_prefix)
            .finish()
    }
}

impl Config {
    /// Builds the configuration from process environment variables
    pub fn from_env() -> Result<Self, FetchError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FetchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("ONEINCH_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);

        let api_version = lookup("ONEINCH_API_VERSION").unwrap_or(defaults.api_version);

        let chain_id = match lookup("ONEINCH_CHAIN_ID") {
            Some(value) => value.trim().parse::<u64>().map_err(|_| {
                FetchError::Configuration(format!("ONEINCH_CHAIN_ID is not a number: {:?}", value))
            })?,
            None => defaults.chain_id,
        };

        let request_timeout = match lookup("ONEINCH_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(FetchError::Configuration(format!(
                        "ONEINCH_TIMEOUT_SECS must be a positive integer: {:?}",
                        value
                    )))
                }
            },
            None => None,
        };

        let preset = match lookup("SWAP_PRESET") {
            Some(name) => name.parse::<Preset>()?,
            None => defaults.preset,
        };

        let hex_prefix = match lookup("CALLDATA_HEX_PREFIX") {
            Some(value) => parse_flag(&value).ok_or_else(|| {
                FetchError::Configuration(format!(
                    "CALLDATA_HEX_PREFIX must be true or false: {:?}",
                    value
                ))
            })?,
            None => defaults.hex_prefix,
        };

        Ok(Self {
            api_url,
            api_version,
            chain_id,
            api_token: lookup("API_TOKEN"),
            request_timeout,
            preset,
            hex_prefix,
        })
    }

    /// Full URL of the swap endpoint
    pub fn swap_url(&self) -> String {
        format!(
            "{}/swap/{}/{}/swap",
            self.api_url, self.api_version, self.chain_id
        )
    }

    /// Returns the bearer token or fails when it is missing or blank
    pub fn require_token(&self) -> Result<&str, FetchError> {
        match self.api_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(FetchError::Configuration(
                "API_TOKEN must be set in environment variables".to_string(),
            )),
        }
    }
}
