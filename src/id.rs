//! Random id generation for user-created records.
//!
//! Every record a store creates (user, pet, appointment, subscription) gets a
//! short random id. The persisted format is seven lowercase alphanumeric
//! characters, matching the id shape already present in stored snapshots.

use rand::distr::{Alphanumeric, SampleString};

/// Length of generated ids.
const ID_LENGTH: usize = 7;

/// Generates a fresh seven-character lowercase alphanumeric id.
///
/// Uniqueness is probabilistic; collisions within a single user's collection
/// are vanishingly unlikely at this length and are not checked for.
#[must_use]
pub fn generate() -> String {
    Alphanumeric
        .sample_string(&mut rand::rng(), ID_LENGTH)
        .to_lowercase()
}
