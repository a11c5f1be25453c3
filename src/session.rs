//! Session-scoped context for the signed-in user.
//!
//! A [`Session`] is created by the identity store on sign-in and passed to
//! every per-user store constructor; it is dropped on sign-out. Keeping the
//! current user in an explicit context object (rather than ambient global
//! state) means a store can never outlive or observe the wrong user's
//! session.

use crate::entities::User;

/// The signed-in user's context. Shared as `Arc<Session>` across stores.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    user: User,
}

impl Session {
    /// Wraps a signed-in user into a session context.
    #[must_use]
    pub const fn new(user: User) -> Self {
        Self { user }
    }

    /// The signed-in user.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// The scoping key for this session's per-user snapshots.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}
