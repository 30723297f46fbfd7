use serde::{Deserialize, Serialize};

/// Identity claims surfaced from the stored session for display.
///
/// Everything is optional: the provider controls which claims it returns for
/// the requested scopes, and unknown claims are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Subject identifier, stable per user at the issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Read-only view of the session entry written by the external OIDC client.
///
/// Created on successful sign-in redirect completion, destroyed on sign-out.
/// This crate only parses it at call time; the external identity library owns
/// its lifecycle. Fields beyond these are tolerated and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    /// The identity token attached to calculation requests as the bearer
    /// credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Expiry as a unix timestamp. Not checked here; an expired token is the
    /// remote endpoint's to reject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}
