//! Locate and read the OIDC client's stored session.

use crate::store::SessionStore;
use crate::types::StoredSession;
use crate::SESSION_KEY_PREFIX;

/// Find the storage key holding the session for `authority`.
///
/// Scans the key-space for the first key starting with
/// `oidc.user:<authority>`. If stale entries from earlier sessions also
/// match, the first enumerated one wins; enumeration order is store-defined,
/// so this is not a guaranteed invariant.
pub fn find_session_key(store: &dyn SessionStore, authority: &str) -> Option<String> {
    let prefix = format!("{}{}", SESSION_KEY_PREFIX, authority);
    store.keys().into_iter().find(|key| key.starts_with(&prefix))
}

/// Load and parse the stored session for `authority`.
///
/// Returns `None` when no key matches or the stored value is not valid
/// session JSON. A malformed entry degrades to the unauthenticated state
/// rather than erroring.
pub fn load_session(store: &dyn SessionStore, authority: &str) -> Option<StoredSession> {
    let key = find_session_key(store, authority)?;
    let raw = store.get(&key)?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::debug!("stored session under {} is not parseable: {}", key, e);
            None
        }
    }
}

/// Extract the identity token for `authority`, if a usable session exists.
pub fn id_token(store: &dyn SessionStore, authority: &str) -> Option<String> {
    load_session(store, authority)?.id_token
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySessionStore;
    use serde_json::json;

    const AUTHORITY: &str = "https://cognito-idp.eu-central-1.amazonaws.com/eu-central-1_AbCdEf";

    fn session_key() -> String {
        format!("oidc.user:{}:client-abc123", AUTHORITY)
    }

    fn store_with_session(value: &str) -> MemorySessionStore {
        let store = MemorySessionStore::new();
        store.insert(session_key(), value);
        store
    }

    #[test]
    fn finds_matching_key() {
        let store = store_with_session("{}");
        assert_eq!(find_session_key(&store, AUTHORITY), Some(session_key()));
    }

    #[test]
    fn no_match_when_store_empty() {
        let store = MemorySessionStore::new();
        assert!(find_session_key(&store, AUTHORITY).is_none());
    }

    #[test]
    fn ignores_other_issuers() {
        let store = MemorySessionStore::new();
        store.insert("oidc.user:https://other-issuer.example.com:client-x", "{}");
        assert!(find_session_key(&store, AUTHORITY).is_none());
    }

    #[test]
    fn ignores_unrelated_keys() {
        let store = MemorySessionStore::new();
        store.insert("theme", "dark");
        store.insert("oidc.user", "not a session entry");
        assert!(find_session_key(&store, AUTHORITY).is_none());
    }

    #[test]
    fn first_enumerated_match_wins() {
        let store = MemorySessionStore::new();
        store.insert(format!("oidc.user:{}:client-a", AUTHORITY), r#"{"id_token":"a"}"#);
        store.insert(format!("oidc.user:{}:client-b", AUTHORITY), r#"{"id_token":"b"}"#);
        // MemorySessionStore enumerates sorted, so client-a comes first.
        assert_eq!(id_token(&store, AUTHORITY).as_deref(), Some("a"));
    }

    #[test]
    fn loads_parsed_session() {
        let raw = json!({
            "id_token": "tok-1",
            "profile": { "email": "demo@mailinator.com" }
        });
        let store = store_with_session(&raw.to_string());
        let session = load_session(&store, AUTHORITY).unwrap();
        assert_eq!(session.id_token.as_deref(), Some("tok-1"));
        assert_eq!(
            session.profile.unwrap().email.as_deref(),
            Some("demo@mailinator.com")
        );
    }

    #[test]
    fn malformed_json_degrades_to_none() {
        let store = store_with_session("{not json");
        assert!(load_session(&store, AUTHORITY).is_none());
        assert!(id_token(&store, AUTHORITY).is_none());
    }

    #[test]
    fn wrong_shape_degrades_to_none() {
        let store = store_with_session(r#"["an", "array"]"#);
        assert!(load_session(&store, AUTHORITY).is_none());
    }

    #[test]
    fn session_without_id_token_yields_no_token() {
        let store = store_with_session(r#"{"access_token":"only-access"}"#);
        assert!(load_session(&store, AUTHORITY).is_some());
        assert!(id_token(&store, AUTHORITY).is_none());
    }

    #[test]
    fn extracts_exact_token() {
        let store = store_with_session(r#"{"id_token":"eyJhbGciOiJSUzI1NiJ9.x.y"}"#);
        assert_eq!(
            id_token(&store, AUTHORITY).as_deref(),
            Some("eyJhbGciOiJSUzI1NiJ9.x.y")
        );
    }
}
