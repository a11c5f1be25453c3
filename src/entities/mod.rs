//! Entity module - serde data models for everything the stores own.
//!
//! These structs define both the in-memory shape and the persisted JSON wire
//! format of the per-user snapshots. Field names serialize in camelCase to
//! match the stored snapshot layout; enum values serialize as their lowercase
//! wire tokens.

pub mod appointment;
pub mod pet;
pub mod subscription;
pub mod user;

pub use appointment::{Appointment, AppointmentDraft, AppointmentStatus, AppointmentType};
pub use pet::{Pet, PetDraft, PetUpdate, Species};
pub use subscription::{PaymentMethod, PaymentMethodType, PlanId, Subscription};
pub use user::User;
