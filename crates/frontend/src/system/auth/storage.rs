use std::cell::RefCell;
use std::collections::HashMap;

use contracts::system::auth::Identity;

const ACCESS_TOKEN_KEY: &str = "jwt_access";
const ROLE_KEY: &str = "me_role";
const USERNAME_KEY: &str = "me_username";
const ID_KEY: &str = "me_id";

/// Key/value backend for the session
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Store backed by browser `localStorage`
#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store for tests
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Access token and cached identity of the signed-in user.
///
/// The cached fields are a convenience copy of the last successful identity
/// fetch; they are never authoritative for authorization. Storage access is
/// synchronous and last-writer-wins across tabs.
pub struct Session<S: SessionStore = BrowserStore> {
    store: S,
}

impl Session<BrowserStore> {
    pub fn browser() -> Self {
        Session {
            store: BrowserStore,
        }
    }
}

impl Session<MemoryStore> {
    pub fn in_memory() -> Self {
        Session {
            store: MemoryStore::default(),
        }
    }
}

impl<S: SessionStore> Session<S> {
    /// The stored access token, empty when absent
    pub fn token(&self) -> String {
        self.store.get(ACCESS_TOKEN_KEY).unwrap_or_default()
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(ACCESS_TOKEN_KEY, token);
    }

    /// Forget the token and every cached identity field. This is the single
    /// logout operation; no partial clear is observable.
    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(ROLE_KEY);
        self.store.remove(USERNAME_KEY);
        self.store.remove(ID_KEY);
    }

    /// Overwrite the cached identity with a freshly fetched one
    pub fn remember_identity(&self, me: &Identity) {
        self.store.set(ROLE_KEY, me.role.as_deref().unwrap_or(""));
        self.store.set(USERNAME_KEY, &me.username);
        self.store.set(ID_KEY, &me.id_text());
    }

    pub fn cached_role(&self) -> Option<String> {
        self.store.get(ROLE_KEY)
    }

    pub fn cached_username(&self) -> Option<String> {
        self.store.get(USERNAME_KEY)
    }

    pub fn cached_id(&self) -> Option<String> {
        self.store.get(ID_KEY)
    }
}
