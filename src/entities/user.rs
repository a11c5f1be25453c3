//! User entity - the signed-in account holder.
//!
//! A user record is fabricated on login/signup (there is no real
//! authentication) and lives for the session. It is persisted as the single
//! global `user` snapshot and scopes every other per-user collection.

use serde::{Deserialize, Serialize};

/// The current account holder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, also the scoping key for per-user snapshots
    pub id: String,
    /// Display name (derived from the email local part on login)
    pub name: String,
    /// Email address the user signed in with
    pub email: String,
}
