//! The session store seam: where the OIDC client keeps its session.

use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Read access to the per-origin key-value session store.
///
/// Mirrors browser `sessionStorage`: string keys, string values, enumeration
/// order is implementation-defined. This crate only reads through this trait;
/// writes belong to the external identity library.
pub trait SessionStore: Send + Sync {
    /// All keys currently present, in store-defined order.
    fn keys(&self) -> Vec<String>;

    /// The value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory `SessionStore` for native hosts and tests.
///
/// Keys enumerate in sorted order, which makes "first match" deterministic
/// here even though the trait leaves it store-defined.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.write().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl SessionStore for MemorySessionStore {
    fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }
}
