//! Provider configuration, read from the deployment environment.

use crate::error::AuthError;
use crate::DEFAULT_SCOPE;
use std::env;

/// OIDC provider configuration for the host application's redirect flows.
///
/// `authority` is the issuer URL the session store key is scoped by;
/// `domain` is the provider's hosted UI domain used for the logout redirect.
/// None of these are hardcoded; they describe an externally provisioned
/// identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub authority: String,
    pub client_id: String,
    pub domain: String,
    pub redirect_uri: String,
    pub logout_uri: String,
    pub scope: String,
}

impl ProviderConfig {
    /// Read configuration from `TALLY_OIDC_*` environment variables.
    ///
    /// `TALLY_OIDC_SCOPE` is optional and defaults to `"email openid phone"`.
    pub fn from_env() -> Result<Self, AuthError> {
        Ok(ProviderConfig {
            authority: require("TALLY_OIDC_AUTHORITY")?,
            client_id: require("TALLY_OIDC_CLIENT_ID")?,
            domain: require("TALLY_OIDC_DOMAIN")?,
            redirect_uri: require("TALLY_OIDC_REDIRECT_URI")?,
            logout_uri: require("TALLY_OIDC_LOGOUT_URI")?,
            scope: env::var("TALLY_OIDC_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string()),
        })
    }
}

fn require(var: &'static str) -> Result<String, AuthError> {
    env::var(var).map_err(|_| AuthError::MissingEnv(var))
}
