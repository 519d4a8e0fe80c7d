//! Process-wide authentication state.

use parking_lot::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    LoggedIn,
    LoggedOut,
}

#[derive(Debug)]
pub struct AuthState {
    status: RwLock<AuthStatus>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new(AuthStatus::LoggedOut)
    }
}

impl AuthState {
    pub fn new(status: AuthStatus) -> Self {
        Self {
            status: RwLock::new(status),
        }
    }

    /// Derive the state from whether a token is persisted.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.is_empty() => Self::new(AuthStatus::LoggedIn),
            _ => Self::new(AuthStatus::LoggedOut),
        }
    }

    pub fn status(&self) -> AuthStatus {
        *self.status.read()
    }

    pub fn is_logged_in(&self) -> bool {
        self.status() == AuthStatus::LoggedIn
    }

    pub fn login(&self) {
        *self.status.write() = AuthStatus::LoggedIn;
    }

    /// Transition to `LoggedOut`. Returns `true` only for the call that
    /// performed the transition; later calls are no-ops.
    pub fn logout(&self) -> bool {
        let mut guard = self.status.write();
        let was_logged_in = *guard == AuthStatus::LoggedIn;
        *guard = AuthStatus::LoggedOut;
        was_logged_in
    }
}
