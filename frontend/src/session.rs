use crate::Route;
use gloo_storage::{LocalStorage, Storage};
use log::{debug, warn};
use std::cell::RefCell;

/// Local storage key holding the access token
pub const TOKEN_KEY: &str = "token";
/// Local storage key holding the opaque user info
pub const USER_KEY: &str = "user";

/// Read/clear access to the persisted session.
///
/// The token is an opaque capability: the dashboard only checks whether one
/// is present and never inspects it.
pub trait SessionProvider {
    fn token(&self) -> Option<String>;
    fn clear(&self);
}

/// Outcome of the session guard on view activation
#[derive(Debug, Clone, PartialEq)]
pub enum SessionGate {
    Authorized,
    Redirect(Route),
}

pub fn check_session(session: &impl SessionProvider) -> SessionGate {
    match session.token() {
        Some(_) => SessionGate::Authorized,
        None => {
            debug!("No session token, redirecting to entry route");
            SessionGate::Redirect(Route::Login)
        }
    }
}

/// Session stored as raw strings in browser local storage
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorageSession;

impl LocalStorageSession {
    /// Persists a fresh session after sign-in
    pub fn store(token: &str, user: &str) -> shared::Result<()> {
        let storage = LocalStorage::raw();
        storage
            .set_item(TOKEN_KEY, token)
            .and_then(|_| storage.set_item(USER_KEY, user))
            .map_err(|e| shared::SharedError::Storage(format!("{:?}", e)))
    }
}

impl SessionProvider for LocalStorageSession {
    fn token(&self) -> Option<String> {
        match LocalStorage::raw().get_item(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("Failed to read session token: {:?}", e);
                None
            }
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
    }
}

/// In-memory session, for headless use and tests
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RefCell<Option<String>>,
    user: RefCell<Option<String>>,
}

impl MemorySession {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
            user: RefCell::new(None),
        }
    }

    pub fn with_user(self, user: &str) -> Self {
        *self.user.borrow_mut() = Some(user.to_string());
        self
    }

    pub fn user(&self) -> Option<String> {
        self.user.borrow().clone()
    }
}

impl SessionProvider for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone().filter(|t| !t.is_empty())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
        self.user.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_redirects_to_entry() {
        let session = MemorySession::default();
        assert_eq!(check_session(&session), SessionGate::Redirect(Route::Login));
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        let session = MemorySession::with_token("");
        assert_eq!(check_session(&session), SessionGate::Redirect(Route::Login));
    }

    #[test]
    fn test_any_token_authorizes() {
        let session = MemorySession::with_token("not-even-a-jwt");
        assert_eq!(check_session(&session), SessionGate::Authorized);
    }

    #[test]
    fn test_clear_drops_token_and_user() {
        let session = MemorySession::with_token("abc").with_user(r#"{"name":"Ana"}"#);
        session.clear();
        assert_eq!(session.token(), None);
        assert_eq!(session.user(), None);
    }
}
