//! OIDC session reading for the tally calculator.
//!
//! This crate provides read-only access to the session an external OpenID
//! Connect client stores in the per-origin key-value session store, plus the
//! sign-out redirect URL construction. Sign-in/sign-out orchestration
//! (redirects, token exchange, session lifecycle) stays in the host
//! application; this crate never mutates, refreshes, or validates a session.

mod config;
mod error;
mod logout;
mod session;
mod store;
mod types;

pub use config::ProviderConfig;
pub use error::AuthError;
pub use logout::build_logout_url;
pub use session::{find_session_key, id_token, load_session};
pub use store::{MemorySessionStore, SessionStore};
pub use types::{Profile, StoredSession};

/// Key prefix under which the OIDC client stores its session entry.
///
/// The full key is `oidc.user:<authority>:<client_id>`; lookups match by
/// prefix on this plus the issuer authority.
pub const SESSION_KEY_PREFIX: &str = "oidc.user:";

/// Default scope requested by the sign-in flow when none is configured.
pub const DEFAULT_SCOPE: &str = "email openid phone";
