//! Sign-out redirect URL construction.

use crate::error::AuthError;
use url::Url;

/// Build the provider's logout redirect URL.
///
/// Shape: `{domain}/logout?client_id=<id>&logout_uri=<uri>` with
/// `logout_uri` percent-encoded. The host application navigates to this URL;
/// the provider destroys its own session and redirects back to `logout_uri`.
pub fn build_logout_url(
    domain: &str,
    client_id: &str,
    logout_uri: &str,
) -> Result<String, AuthError> {
    let base = format!("{}/logout", domain.trim_end_matches('/'));
    let mut url = Url::parse(&base).map_err(|e| AuthError::InvalidUrl(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("logout_uri", logout_uri);
    Ok(url.to_string())
}
