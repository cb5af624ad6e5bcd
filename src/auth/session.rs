// src/auth/session.rs — Session state machine
//
// Checking -> Authenticated | Unauthenticated at startup, driven by
// credential presence; thereafter flips synchronously on login/logout.
// Registration never transitions session state. A 401 mid-session does not
// force logout; stale-session recovery is out of scope.

use std::sync::Arc;

use crate::auth::CredentialStore;
use crate::infra::errors::ChemvizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Transient initial state, before the startup credential check.
    Checking,
    Unauthenticated,
    Authenticated,
}

pub struct SessionController {
    store: Arc<CredentialStore>,
    state: SessionState,
}

impl SessionController {
    pub fn new(store: Arc<CredentialStore>) -> Self {
        Self {
            store,
            state: SessionState::Checking,
        }
    }

    /// Startup credential check: resolves `Checking` from stored credential
    /// presence. Idempotent on later states.
    pub fn resolve(&mut self) -> SessionState {
        if self.state == SessionState::Checking {
            self.state = if self.store.get().is_some() {
                SessionState::Authenticated
            } else {
                SessionState::Unauthenticated
            };
        }
        self.state
    }

    /// Called after a successful authenticate (the gateway has already stored
    /// the credential).
    pub fn on_authenticated(&mut self) {
        self.state = SessionState::Authenticated;
    }

    /// Explicit logout: clears the credential store and drops to
    /// `Unauthenticated`.
    pub fn logout(&mut self) -> Result<(), ChemvizError> {
        self.store.clear()?;
        self.state = SessionState::Unauthenticated;
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }
}
