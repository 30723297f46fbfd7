//! Endpoint addressing and client configuration.

use crate::error::ClientError;
use crate::{DIRECT_PATH, PROXIED_PATH};
use std::env;
use url::Url;

/// Where calculation requests go.
///
/// `Direct` targets the API's fully-qualified base URL (cross-origin from a
/// browser host, so subject to CORS). `Proxied` targets the fixed
/// `/api/v1/basic-calc` path on a same-origin base and relies on a reverse
/// proxy in front of the real endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Direct { base: String },
    Proxied { origin: String },
}

impl Endpoint {
    /// Resolve the calculation URL for this endpoint.
    pub fn url(&self) -> Result<Url, ClientError> {
        let joined = match self {
            Endpoint::Direct { base } => {
                format!("{}{}", base.trim_end_matches('/'), DIRECT_PATH)
            }
            Endpoint::Proxied { origin } => {
                format!("{}{}", origin.trim_end_matches('/'), PROXIED_PATH)
            }
        };
        Url::parse(&joined).map_err(|e| ClientError::InvalidEndpoint(format!("{}: {}", joined, e)))
    }
}

/// The single parameterization of a calculation call: where it goes and
/// whether the credential header is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: Endpoint,
    pub attach_credential: bool,
}

impl ClientConfig {
    /// Direct mode against `base`, with the credential attached.
    pub fn direct(base: impl Into<String>) -> Self {
        ClientConfig {
            endpoint: Endpoint::Direct { base: base.into() },
            attach_credential: true,
        }
    }

    /// Proxied mode against `origin`, with the credential attached.
    pub fn proxied(origin: impl Into<String>) -> Self {
        ClientConfig {
            endpoint: Endpoint::Proxied {
                origin: origin.into(),
            },
            attach_credential: true,
        }
    }

    /// Suppress the `Authorization` header for this configuration.
    pub fn without_credential(mut self) -> Self {
        self.attach_credential = false;
        self
    }

    /// Read configuration from the environment.
    ///
    /// `TALLY_API_BASE_URL` selects direct mode; otherwise
    /// `TALLY_PROXY_ORIGIN` selects proxied mode.
    pub fn from_env() -> Result<Self, ClientError> {
        if let Ok(base) = env::var("TALLY_API_BASE_URL") {
            return Ok(ClientConfig::direct(base));
        }
        if let Ok(origin) = env::var("TALLY_PROXY_ORIGIN") {
            return Ok(ClientConfig::proxied(origin));
        }
        Err(ClientError::MissingEndpoint)
    }
}
