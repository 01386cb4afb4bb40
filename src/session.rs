//! Client-held session state.
//!
//! The session (bearer token, role, acting identifier, display email) is
//! persisted as flat string keys in localStorage. Every read and write in
//! the app goes through [`SessionStore`], which sits behind the
//! [`SessionStorage`] trait so tests can swap in an in-memory map.

use crate::model::Role;
use crate::web::LocalStorage;

pub const KEY_TOKEN: &str = "token";
pub const KEY_ROLE: &str = "role";
pub const KEY_USER_ID: &str = "userId";
pub const KEY_VENDOR_ID: &str = "vendorId";
pub const KEY_EMAIL: &str = "userEmail";

/// Flat string key-value storage the session lives in.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser localStorage adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get(key)
    }

    fn set(&self, key: &str, value: &str) {
        LocalStorage::set(key, value);
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Snapshot of the persisted session.
///
/// Invariant: a missing token means unauthenticated, and every other field
/// reads as absent no matter what residue sits in storage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub subject_id: Option<String>,
    pub email: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// True when the session may act in one of `roles`. An empty slice
    /// means any authenticated session qualifies.
    pub fn has_role(&self, roles: &[Role]) -> bool {
        if roles.is_empty() {
            return self.is_authenticated();
        }
        matches!(self.role, Some(role) if roles.contains(&role))
    }
}

/// The session store proper. `Copy` so it can move freely into Leptos
/// closures.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore<S: SessionStorage = BrowserStorage> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Writes the whole session. The identifier lands under `vendorId`
    /// for vendors and `userId` for everyone else; the opposite slot is
    /// cleared so at most one is ever populated.
    pub fn set_session(&self, token: &str, role: Role, subject_id: &str, email: Option<&str>) {
        self.storage.set(KEY_TOKEN, token);
        self.storage.set(KEY_ROLE, role.as_str());

        let (own_key, other_key) = match role {
            Role::Vendor => (KEY_VENDOR_ID, KEY_USER_ID),
            _ => (KEY_USER_ID, KEY_VENDOR_ID),
        };
        self.storage.set(own_key, subject_id);
        self.storage.remove(other_key);

        match email {
            Some(email) => self.storage.set(KEY_EMAIL, email),
            None => self.storage.remove(KEY_EMAIL),
        }
    }

    /// Reads the current session. Never fails; without a token the
    /// remaining fields are reported absent.
    pub fn get_session(&self) -> Session {
        let Some(token) = self.storage.get(KEY_TOKEN) else {
            return Session::default();
        };

        let role = self.storage.get(KEY_ROLE).and_then(|s| Role::parse(&s));
        let subject_id = match role {
            Some(Role::Vendor) => self.storage.get(KEY_VENDOR_ID),
            Some(_) => self.storage.get(KEY_USER_ID),
            None => None,
        };
        let email = self.storage.get(KEY_EMAIL);

        Session {
            token: Some(token),
            role,
            subject_id,
            email,
        }
    }

    /// Removes every session key.
    pub fn clear_session(&self) {
        for key in [KEY_TOKEN, KEY_ROLE, KEY_USER_ID, KEY_VENDOR_ID, KEY_EMAIL] {
            self.storage.remove(key);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.storage.get(KEY_TOKEN).is_some()
    }

    /// Bearer token for authorizing API calls.
    pub fn token(&self) -> Option<String> {
        self.storage.get(KEY_TOKEN)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for localStorage.
    #[derive(Default)]
    pub(crate) struct MemoryStorage {
        map: RefCell<HashMap<String, String>>,
    }

    impl SessionStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.map.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.map
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.map.borrow_mut().remove(key);
        }
    }

    impl MemoryStorage {
        fn len(&self) -> usize {
            self.map.borrow().len()
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = SessionStore::new(MemoryStorage::default());
        store.set_session("tok-1", Role::User, "u-42", Some("a@b.com"));

        let session = store.get_session();
        assert_eq!(session.token.as_deref(), Some("tok-1"));
        assert_eq!(session.role, Some(Role::User));
        assert_eq!(session.subject_id.as_deref(), Some("u-42"));
        assert_eq!(session.email.as_deref(), Some("a@b.com"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn vendor_session_populates_vendor_slot_only() {
        let store = SessionStore::new(MemoryStorage::default());
        // A previous user login must not leave its id behind.
        store.set_session("tok-u", Role::User, "u-1", None);
        store.set_session("tok-v", Role::Vendor, "v-7", Some("shop@veg.com"));

        assert_eq!(store.storage.get(KEY_VENDOR_ID).as_deref(), Some("v-7"));
        assert_eq!(store.storage.get(KEY_USER_ID), None);

        let session = store.get_session();
        assert_eq!(session.role, Some(Role::Vendor));
        assert_eq!(session.subject_id.as_deref(), Some("v-7"));
    }

    #[test]
    fn clear_session_removes_every_key() {
        let store = SessionStore::new(MemoryStorage::default());
        store.set_session("tok", Role::Admin, "a-1", Some("root@veg.com"));
        store.clear_session();

        assert_eq!(store.storage.len(), 0);
        assert_eq!(store.get_session(), Session::default());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn missing_token_masks_stale_fields() {
        let store = SessionStore::new(MemoryStorage::default());
        // Residue without a token must read as a fully absent session.
        store.storage.set(KEY_ROLE, "VENDOR");
        store.storage.set(KEY_VENDOR_ID, "v-9");
        store.storage.set(KEY_EMAIL, "stale@veg.com");

        assert_eq!(store.get_session(), Session::default());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn role_membership_checks() {
        let authed = Session {
            token: Some("t".into()),
            role: Some(Role::ProductManager),
            subject_id: Some("pm-1".into()),
            email: None,
        };
        assert!(authed.has_role(&[]));
        assert!(authed.has_role(&[Role::ProductManager, Role::Admin]));
        assert!(!authed.has_role(&[Role::Vendor]));

        let anon = Session::default();
        assert!(!anon.has_role(&[]));
        assert!(!anon.has_role(&[Role::User]));
    }
}
