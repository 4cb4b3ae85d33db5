use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::validator::{SemanticValidationError, Validator};
use crate::TslConfig;

/// Configuration for the HTTP API.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct HttpApi {
    /// The address the API will bind to.
    /// The format is `ip:port`, for example `0.0.0.0:8000`. If you want to
    /// listen to all interfaces, use `0.0.0.0`. If you want the operating
    /// system to choose a random port, use port `0`.
    #[serde(default = "HttpApi::default_bind_address")]
    pub bind_address: SocketAddr,

    /// TSL config. When present the API is served over HTTPS.
    #[serde(default = "HttpApi::default_tsl_config")]
    pub tsl_config: Option<TslConfig>,

    /// Shared secret clients must send in the `x-api-key` header. When it is
    /// not set, the API does not require authentication.
    #[serde(default = "HttpApi::default_api_key")]
    pub api_key: Option<String>,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self {
            bind_address: Self::default_bind_address(),
            tsl_config: Self::default_tsl_config(),
            api_key: Self::default_api_key(),
        }
    }
}

impl HttpApi {
    fn default_bind_address() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 8000)
    }

    fn default_tsl_config() -> Option<TslConfig> {
        None
    }

    fn default_api_key() -> Option<String> {
        None
    }

    /// Returns `true` when the API requires the `x-api-key` header.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    /// Checks a client provided key against the configured one.
    #[must_use]
    pub fn accepts_key(&self, key: &str) -> bool {
        self.api_key.as_deref() == Some(key)
    }

    pub fn mask_secrets(&mut self) {
        if let Some(api_key) = self.api_key.as_mut() {
            *api_key = "***".to_string();
        }
    }
}

impl Validator for HttpApi {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        match &self.api_key {
            Some(api_key) if api_key.is_empty() => Err(SemanticValidationError::EmptyApiKey),
            _ => Ok(()),
        }
    }
}
