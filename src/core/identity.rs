//! Identity store - sign-in, sign-up, and session lifecycle.
//!
//! There is no real authentication: any credentials succeed after the
//! simulated round trip, and a fresh [`User`] record is fabricated on every
//! sign-in. The current user persists under the global `user` snapshot key
//! and rehydrates on startup via [`IdentityStore::restore`]. Signing in
//! yields an `Arc<Session>` that the caller passes to the per-user store
//! constructors; signing out drops it.

use crate::entities::User;
use crate::errors::Result;
use crate::id;
use crate::remote::RemoteCall;
use crate::session::Session;
use crate::storage::{self, SnapshotStore, keys};
use std::sync::Arc;
use tracing::info;

/// Owner of the current signed-in user.
pub struct IdentityStore {
    storage: Arc<dyn SnapshotStore>,
    remote: Arc<dyn RemoteCall>,
    current: Option<Arc<Session>>,
    loading: bool,
}

impl IdentityStore {
    /// Creates the store, rehydrating the current user from the persisted
    /// `user` record if one exists. Absence leaves the store unauthenticated.
    pub fn restore(storage: Arc<dyn SnapshotStore>, remote: Arc<dyn RemoteCall>) -> Result<Self> {
        let current = storage::load_snapshot::<User>(storage.as_ref(), keys::USER)?
            .map(|user| Arc::new(Session::new(user)));
        Ok(Self {
            storage,
            remote,
            current,
            loading: false,
        })
    }

    /// The active session, if a user is signed in.
    #[must_use]
    pub const fn current_session(&self) -> Option<&Arc<Session>> {
        self.current.as_ref()
    }

    /// Whether an operation is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Signs in with any credentials. The password is accepted unverified;
    /// the display name is derived from the email's local part.
    pub async fn login(&mut self, email: &str, _password: &str) -> Result<Arc<Session>> {
        self.loading = true;
        let name = email.split('@').next().unwrap_or(email).to_string();
        let result = self.sign_in(name, email, "identity.login").await;
        self.loading = false;
        result
    }

    /// Creates an account with the given display name. Like [`Self::login`],
    /// this fabricates the user record locally - no account exists anywhere.
    pub async fn signup(&mut self, name: &str, email: &str, _password: &str) -> Result<Arc<Session>> {
        self.loading = true;
        let result = self.sign_in(name.to_string(), email, "identity.signup").await;
        self.loading = false;
        result
    }

    /// Signs out: clears the current session and removes the persisted
    /// `user` record.
    pub async fn logout(&mut self) -> Result<()> {
        self.loading = true;
        let result = self.sign_out().await;
        self.loading = false;
        result
    }

    /// Simulates sending a password reset email. No observable state change
    /// beyond the delay; the send is diagnostic output only.
    pub async fn reset_password(&mut self, email: &str) -> Result<()> {
        self.loading = true;
        let result = self.remote.perform("identity.reset_password").await;
        self.loading = false;
        result?;
        info!(email, "password reset email queued");
        Ok(())
    }

    async fn sign_in(&mut self, name: String, email: &str, operation: &str) -> Result<Arc<Session>> {
        self.remote.perform(operation).await?;

        let user = User {
            id: id::generate(),
            name,
            email: email.to_string(),
        };
        storage::save_snapshot(self.storage.as_ref(), keys::USER, &user)?;

        let session = Arc::new(Session::new(user));
        self.current = Some(Arc::clone(&session));
        info!(user_id = %session.user_id(), "signed in");
        Ok(session)
    }

    async fn sign_out(&mut self) -> Result<()> {
        self.remote.perform("identity.logout").await?;
        self.current = None;
        self.storage.remove(keys::USER)?;
        info!("signed out");
        Ok(())
    }
}
