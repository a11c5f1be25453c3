//! Core business logic - the four domain stores.
//!
//! Each store owns one entity collection's in-memory state plus its
//! persistence and mutation operations. Mutating operations share a common
//! shape: raise the loading flag, perform one remote round trip, apply the
//! in-memory mutation, persist the per-user snapshot, lower the flag.
//! Methods take `&mut self`, which realizes the single-writer concurrency
//! contract directly; overlapping completions resolve last-write-wins.

/// Appointment book - scheduling, status transitions, and date filtering
pub mod appointments;
/// Identity store - sign-in, sign-up, and session lifecycle
pub mod identity;
/// Pet roster - the set of pets owned by the current user
pub mod pets;
/// Subscription store - plan enrollment and payment method
pub mod subscription;

pub use appointments::AppointmentBook;
pub use identity::IdentityStore;
pub use pets::PetRoster;
pub use subscription::SubscriptionStore;
