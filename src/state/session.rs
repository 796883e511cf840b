#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tokio::sync::watch;

use super::storage::{AUTH_TOKEN_KEY, TokenStorage};
use crate::net::types::User;

/// Who is signed in. An empty token means nobody.
///
/// The token is empty exactly when `user` is `None`; [`SessionStore`]'s
/// mutators keep that true but do not check it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, user: Option<User>) -> Self {
        Self { token: token.into(), user }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Single source of truth for the current session, mirrored to storage.
///
/// Build one per app and pass it by reference. The token survives restarts
/// through `storage`; the user does not and must be re-fetched.
pub struct SessionStore<S> {
    storage: S,
    state: watch::Sender<Session>,
}

impl<S: TokenStorage> SessionStore<S> {
    /// Restore the token a previous run left in `storage`.
    #[must_use]
    pub fn load(storage: S) -> Self {
        let token = match storage.get_item(AUTH_TOKEN_KEY) {
            Ok(token) => token.unwrap_or_default(),
            Err(error) => {
                tracing::warn!(%error, "failed to read stored auth token");
                String::new()
            }
        };
        let (state, _) = watch::channel(Session { token, user: None });
        Self { storage, state }
    }

    #[must_use]
    pub fn token(&self) -> String {
        self.state.borrow().token.clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Receiver that observes every subsequent session change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace token and user together and persist the token.
    ///
    /// An empty token removes the stored value instead of writing it.
    pub fn set_session(&self, session: Session) {
        let persisted = if session.token.is_empty() {
            self.storage.remove_item(AUTH_TOKEN_KEY)
        } else {
            self.storage.set_item(AUTH_TOKEN_KEY, &session.token)
        };
        if let Err(error) = persisted {
            tracing::warn!(%error, "failed to persist auth token");
        }
        self.state.send_replace(session);
    }

    pub fn sign_out(&self) {
        self.set_session(Session::default());
    }
}
