//! Shared test utilities for `petvida-core`.
//!
//! This module provides common helper functions for wiring stores to an
//! in-memory snapshot store and a zero-latency remote, plus builders for
//! test entities with sensible defaults.

use crate::catalog::Catalog;
use crate::entities::{
    AppointmentDraft, AppointmentType, PaymentMethod, PaymentMethodType, Pet, PetDraft, Species,
    User,
};
use crate::errors::Result;
use crate::remote::{RemoteCall, SimulatedRemote};
use crate::session::Session;
use crate::storage::{MemoryStore, SnapshotStore};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Creates an empty in-memory snapshot store. This is the standard storage
/// for all store tests.
pub fn test_storage() -> Arc<dyn SnapshotStore> {
    Arc::new(MemoryStore::new())
}

/// Creates a zero-latency simulated remote so tests never sleep.
pub fn instant_remote() -> Arc<dyn RemoteCall> {
    Arc::new(SimulatedRemote::instant())
}

/// Parses the built-in reference catalog.
pub fn test_catalog() -> Result<Arc<Catalog>> {
    Catalog::builtin().map(Arc::new)
}

/// Creates a session for the given user id.
///
/// # Defaults
/// * `name`: "Test Owner"
/// * `email`: `owner@example.com`
pub fn test_session(user_id: &str) -> Arc<Session> {
    Arc::new(Session::new(User {
        id: user_id.to_string(),
        name: "Test Owner".to_string(),
        email: "owner@example.com".to_string(),
    }))
}

/// The two-pet roster matching the onboarding fixture ids ("1" and "2"),
/// for seeding an appointment book in isolation from [`crate::core::PetRoster`].
pub fn demo_roster() -> Vec<Pet> {
    vec![
        Pet {
            id: "1".to_string(),
            name: "Max".to_string(),
            species: Species::Dog,
            breed: "Golden Retriever".to_string(),
            age: 3,
            weight: 30.0,
            image_url: None,
        },
        Pet {
            id: "2".to_string(),
            name: "Luna".to_string(),
            species: Species::Cat,
            breed: "Siamese".to_string(),
            age: 2,
            weight: 4.0,
            image_url: None,
        },
    ]
}

/// Creates a pet draft with sensible defaults.
///
/// # Defaults
/// * `species`: dog
/// * `breed`: "Labrador"
/// * `age`: 4, `weight`: 25.0, no image
pub fn sample_pet_draft(name: &str) -> PetDraft {
    PetDraft {
        name: name.to_string(),
        species: Species::Dog,
        breed: "Labrador".to_string(),
        age: 4,
        weight: 25.0,
        image_url: None,
    }
}

/// Creates an appointment draft for the given pet and date.
///
/// # Defaults
/// * `doctor_id`: "d1", `location_id`: "l1"
/// * `kind`: checkup, `duration`: 30 minutes, no notes
pub fn sample_appointment_draft(pet_id: &str, date: DateTime<Utc>) -> AppointmentDraft {
    AppointmentDraft {
        pet_id: pet_id.to_string(),
        doctor_id: "d1".to_string(),
        location_id: "l1".to_string(),
        kind: AppointmentType::Checkup,
        date,
        duration: 30,
        notes: None,
    }
}

/// Creates a credit-card payment method ending in the given digits.
pub fn card(last_four: &str) -> PaymentMethod {
    PaymentMethod {
        kind: PaymentMethodType::CreditCard,
        last_four: last_four.to_string(),
    }
}
