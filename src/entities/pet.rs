//! Pet entity - an animal on the owner's roster.
//!
//! Pets are owned by exactly one user; ownership is the snapshot scoping key,
//! not a field on the record. Numeric ranges (age, weight) are not validated
//! at this layer - form validation is the presentation layer's job.

use serde::{Deserialize, Serialize};

/// Species of a pet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// Dogs
    Dog,
    /// Cats
    Cat,
    /// Birds
    Bird,
    /// Anything else
    Other,
}

/// A pet on the current user's roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Unique identifier within the owner's roster
    pub id: String,
    /// The pet's name
    pub name: String,
    /// Species of the pet
    pub species: Species,
    /// Breed description, free-form
    pub breed: String,
    /// Age in whole years
    pub age: u32,
    /// Weight in kilograms
    pub weight: f64,
    /// Optional photo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Input for creating a pet - everything but the id, which the roster assigns.
#[derive(Clone, Debug, PartialEq)]
pub struct PetDraft {
    /// The pet's name
    pub name: String,
    /// Species of the pet
    pub species: Species,
    /// Breed description, free-form
    pub breed: String,
    /// Age in whole years
    pub age: u32,
    /// Weight in kilograms
    pub weight: f64,
    /// Optional photo URL
    pub image_url: Option<String>,
}

impl PetDraft {
    /// Materializes the draft into a [`Pet`] with the given id.
    #[must_use]
    pub fn into_pet(self, id: String) -> Pet {
        Pet {
            id,
            name: self.name,
            species: self.species,
            breed: self.breed,
            age: self.age,
            weight: self.weight,
            image_url: self.image_url,
        }
    }
}

/// Partial update for a pet: a `None` field leaves the current value
/// unchanged (shallow merge).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PetUpdate {
    /// New name, if changing
    pub name: Option<String>,
    /// New species, if changing
    pub species: Option<Species>,
    /// New breed, if changing
    pub breed: Option<String>,
    /// New age, if changing
    pub age: Option<u32>,
    /// New weight, if changing
    pub weight: Option<f64>,
    /// New photo URL, if changing
    pub image_url: Option<String>,
}
