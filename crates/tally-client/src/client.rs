//! The calculation client and its credential seam.

use crate::endpoint::ClientConfig;
use crate::error::ClientError;
use crate::response;
use crate::types::{CalculationRequest, CalculationResult, ServiceInfo};
use std::sync::Arc;
use tally_auth::SessionStore;
use tracing::debug;

/// Credential source consulted on every authenticated call.
///
/// Returning `None` is not an error: the request is sent without an
/// `Authorization` header and the remote endpoint decides whether to reject
/// it.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

impl<F> TokenProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn token(&self) -> Option<String> {
        self()
    }
}

/// `TokenProvider` backed by the OIDC session store.
///
/// Reads the identity token for `authority` at call time, so sign-in and
/// sign-out between calls are picked up without rebuilding the client.
pub struct SessionTokenProvider {
    store: Arc<dyn SessionStore>,
    authority: String,
}

impl SessionTokenProvider {
    pub fn new(store: Arc<dyn SessionStore>, authority: impl Into<String>) -> Self {
        SessionTokenProvider {
            store,
            authority: authority.into(),
        }
    }
}

impl TokenProvider for SessionTokenProvider {
    fn token(&self) -> Option<String> {
        tally_auth::id_token(self.store.as_ref(), &self.authority)
    }
}

/// Stateless client for the basic-calc endpoint.
///
/// Each call is one attempt producing exactly one result or error. Calls
/// share no mutable state, so concurrent calls are independent and may
/// complete out of submission order; cancellation and stale-response
/// handling stay with the caller.
pub struct CalcClient {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: Option<Arc<dyn TokenProvider>>,
}

impl CalcClient {
    /// Client with no credential source. Authenticated configurations will
    /// send unauthenticated requests until a provider is attached.
    pub fn new(config: ClientConfig) -> Self {
        CalcClient {
            http: reqwest::Client::new(),
            config,
            tokens: None,
        }
    }

    /// Attach a credential source consulted on every call.
    pub fn with_token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.tokens = Some(provider);
        self
    }

    /// POST the calculation and normalize the response.
    ///
    /// 2xx parses as [`CalculationResult`]; non-2xx becomes
    /// [`ClientError::Remote`] with the body's `error` field (or the generic
    /// fallback); a request that never completes becomes
    /// [`ClientError::Transport`].
    pub async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, ClientError> {
        let url = self.config.endpoint.url()?;
        debug!("POST {} operation={}", url, request.operation);

        let mut builder = self.http.post(url).json(request);
        if let Some(token) = self.current_token() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            response::parse_calculation(&body)
        } else {
            let message = response::error_message(&body);
            debug!("calculation rejected: status={} message={}", status, message);
            Err(ClientError::Remote { message })
        }
    }

    /// GET the deployment info message from the calculation endpoint.
    pub async fn service_info(&self) -> Result<ServiceInfo, ClientError> {
        let url = self.config.endpoint.url()?;
        debug!("GET {}", url);

        let mut builder = self.http.get(url);
        if let Some(token) = self.current_token() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            response::parse_service_info(&body)
        } else {
            Err(ClientError::Remote {
                message: response::error_message(&body),
            })
        }
    }

    fn current_token(&self) -> Option<String> {
        if !self.config.attach_credential {
            return None;
        }
        self.tokens.as_ref().and_then(|provider| provider.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_auth::MemorySessionStore;

    const AUTHORITY: &str = "https://cognito-idp.eu-central-1.amazonaws.com/eu-central-1_AbCdEf";

    fn store_with_token(token: &str) -> Arc<MemorySessionStore> {
        let store = Arc::new(MemorySessionStore::new());
        store.insert(
            format!("oidc.user:{}:client-abc123", AUTHORITY),
            format!(r#"{{"id_token":"{}"}}"#, token),
        );
        store
    }

    #[test]
    fn closures_are_token_providers() {
        let provider = || Some("tok".to_string());
        assert_eq!(TokenProvider::token(&provider).as_deref(), Some("tok"));
    }

    #[test]
    fn session_provider_reads_store_at_call_time() {
        let store = store_with_token("first");
        let provider = SessionTokenProvider::new(store.clone(), AUTHORITY);
        assert_eq!(provider.token().as_deref(), Some("first"));

        // Sign-out then sign-in again: the provider follows the store.
        store.clear();
        assert!(provider.token().is_none());
        store.insert(
            format!("oidc.user:{}:client-abc123", AUTHORITY),
            r#"{"id_token":"second"}"#,
        );
        assert_eq!(provider.token().as_deref(), Some("second"));
    }

    #[test]
    fn no_provider_means_no_token() {
        let client = CalcClient::new(ClientConfig::direct("https://api.example.com"));
        assert!(client.current_token().is_none());
    }

    #[test]
    fn detached_credential_suppresses_token() {
        let store = store_with_token("tok");
        let client =
            CalcClient::new(ClientConfig::proxied("https://tally.example.com").without_credential())
                .with_token_provider(Arc::new(SessionTokenProvider::new(store, AUTHORITY)));
        assert!(client.current_token().is_none());
    }

    #[test]
    fn attached_credential_uses_provider() {
        let store = store_with_token("tok");
        let client = CalcClient::new(ClientConfig::direct("https://api.example.com"))
            .with_token_provider(Arc::new(SessionTokenProvider::new(store, AUTHORITY)));
        assert_eq!(client.current_token().as_deref(), Some("tok"));
    }
}
