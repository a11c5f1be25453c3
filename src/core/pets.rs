//! Pet roster - the set of pets owned by the current user.
//!
//! The roster rehydrates from the `pets_<uid>` snapshot when a session
//! starts; a user seen for the first time gets a fixed two-pet demo fixture,
//! persisted immediately. Every mutation persists the full roster, including
//! a mutation that empties it - an intentionally emptied roster stays empty
//! on the next load instead of reverting to a stale snapshot.

use crate::entities::{Pet, PetDraft, PetUpdate, Species};
use crate::errors::Result;
use crate::id;
use crate::remote::RemoteCall;
use crate::session::Session;
use crate::storage::{self, SnapshotStore, keys};
use std::sync::Arc;
use tracing::debug;

/// Owner of the current user's pet collection.
pub struct PetRoster {
    session: Arc<Session>,
    storage: Arc<dyn SnapshotStore>,
    remote: Arc<dyn RemoteCall>,
    pets: Vec<Pet>,
    loading: bool,
}

impl PetRoster {
    /// Loads the roster for the session's user, seeding the demo fixture on
    /// a first-time user.
    pub fn load(
        session: Arc<Session>,
        storage: Arc<dyn SnapshotStore>,
        remote: Arc<dyn RemoteCall>,
    ) -> Result<Self> {
        let key = keys::pets(session.user_id());
        let pets = match storage::load_snapshot::<Vec<Pet>>(storage.as_ref(), &key)? {
            Some(pets) => pets,
            None => {
                let demo = demo_pets();
                storage::save_snapshot(storage.as_ref(), &key, &demo)?;
                debug!(user_id = %session.user_id(), "seeded demo pet roster");
                demo
            }
        };
        Ok(Self {
            session,
            storage,
            remote,
            pets,
            loading: false,
        })
    }

    /// All pets on the roster, in insertion order.
    #[must_use]
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Looks up a pet by id. Pure read; repeated calls without an
    /// intervening mutation return equal results.
    #[must_use]
    pub fn get_pet(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    /// Whether an operation is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Adds a pet: assigns a fresh id, appends, persists. Returns the
    /// materialized record. Numeric ranges are not validated here.
    pub async fn add_pet(&mut self, draft: PetDraft) -> Result<Pet> {
        self.loading = true;
        let result = self.do_add(draft).await;
        self.loading = false;
        result
    }

    /// Applies a shallow field merge over the pet with the given id. A
    /// dangling id is a silent no-op.
    pub async fn update_pet(&mut self, id: &str, update: PetUpdate) -> Result<()> {
        self.loading = true;
        let result = self.do_update(id, update).await;
        self.loading = false;
        result
    }

    /// Removes the pet with the given id. A dangling id is a silent no-op.
    pub async fn delete_pet(&mut self, id: &str) -> Result<()> {
        self.loading = true;
        let result = self.do_delete(id).await;
        self.loading = false;
        result
    }

    async fn do_add(&mut self, draft: PetDraft) -> Result<Pet> {
        self.remote.perform("pets.add").await?;

        let pet = draft.into_pet(id::generate());
        self.pets.push(pet.clone());
        self.persist()?;
        debug!(user_id = %self.session.user_id(), pet_id = %pet.id, "added pet");
        Ok(pet)
    }

    async fn do_update(&mut self, id: &str, update: PetUpdate) -> Result<()> {
        self.remote.perform("pets.update").await?;

        if let Some(pet) = self.pets.iter_mut().find(|p| p.id == id) {
            if let Some(name) = update.name {
                pet.name = name;
            }
            if let Some(species) = update.species {
                pet.species = species;
            }
            if let Some(breed) = update.breed {
                pet.breed = breed;
            }
            if let Some(age) = update.age {
                pet.age = age;
            }
            if let Some(weight) = update.weight {
                pet.weight = weight;
            }
            if let Some(image_url) = update.image_url {
                pet.image_url = Some(image_url);
            }
        }
        self.persist()
    }

    async fn do_delete(&mut self, id: &str) -> Result<()> {
        self.remote.perform("pets.delete").await?;

        self.pets.retain(|p| p.id != id);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        storage::save_snapshot(
            self.storage.as_ref(),
            &keys::pets(self.session.user_id()),
            &self.pets,
        )
    }
}

/// The fixed onboarding fixture for a first-time user.
fn demo_pets() -> Vec<Pet> {
    vec![
        Pet {
            id: "1".to_string(),
            name: "Max".to_string(),
            species: Species::Dog,
            breed: "Golden Retriever".to_string(),
            age: 3,
            weight: 30.0,
            image_url: Some(
                "https://images.pexels.com/photos/2253275/pexels-photo-2253275.jpeg".to_string(),
            ),
        },
        Pet {
            id: "2".to_string(),
            name: "Luna".to_string(),
            species: Species::Cat,
            breed: "Siamese".to_string(),
            age: 2,
            weight: 4.0,
            image_url: Some(
                "https://images.pexels.com/photos/1170986/pexels-photo-1170986.jpeg".to_string(),
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{instant_remote, sample_pet_draft, test_session, test_storage};

    fn roster_for(user_id: &str, storage: &Arc<dyn SnapshotStore>) -> Result<PetRoster> {
        PetRoster::load(test_session(user_id), Arc::clone(storage), instant_remote())
    }

    #[tokio::test]
    async fn test_first_load_seeds_demo_pets() -> Result<()> {
        let storage = test_storage();
        let roster = roster_for("u1", &storage)?;

        let pets = roster.pets();
        assert_eq!(pets.len(), 2);
        assert_eq!(pets[0].name, "Max");
        assert_eq!(pets[0].species, Species::Dog);
        assert_eq!(pets[1].name, "Luna");
        assert_eq!(pets[1].species, Species::Cat);

        // The fixture persisted immediately
        assert!(storage.read("pets_u1")?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_reload_uses_persisted_roster_not_fixture() -> Result<()> {
        let storage = test_storage();
        let mut roster = roster_for("u1", &storage)?;

        roster.add_pet(sample_pet_draft("Rex")).await?;

        let reloaded = roster_for("u1", &storage)?;
        assert_eq!(reloaded.pets().len(), 3);
        assert_eq!(reloaded.pets()[2].name, "Rex");

        Ok(())
    }

    #[tokio::test]
    async fn test_add_pet_assigns_id_and_appends() -> Result<()> {
        let storage = test_storage();
        let mut roster = roster_for("u1", &storage)?;

        let rex = roster.add_pet(sample_pet_draft("Rex")).await?;
        assert_eq!(rex.id.len(), 7);
        assert_eq!(roster.pets().last().unwrap(), &rex);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_pet_is_shallow_merge() -> Result<()> {
        let storage = test_storage();
        let mut roster = roster_for("u1", &storage)?;

        let update = PetUpdate {
            weight: Some(32.5),
            ..PetUpdate::default()
        };
        roster.update_pet("1", update).await?;

        let max = roster.get_pet("1").unwrap();
        assert_eq!(max.weight, 32.5);
        // Untouched fields keep their values
        assert_eq!(max.name, "Max");
        assert_eq!(max.breed, "Golden Retriever");
        assert_eq!(max.age, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_dangling_id_is_noop() -> Result<()> {
        let storage = test_storage();
        let mut roster = roster_for("u1", &storage)?;

        let before = roster.pets().to_vec();
        roster
            .update_pet(
                "missing",
                PetUpdate {
                    name: Some("Ghost".to_string()),
                    ..PetUpdate::default()
                },
            )
            .await?;
        assert_eq!(roster.pets(), before.as_slice());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_pet_removes_by_id() -> Result<()> {
        let storage = test_storage();
        let mut roster = roster_for("u1", &storage)?;

        roster.delete_pet("1").await?;
        assert_eq!(roster.pets().len(), 1);
        assert!(roster.get_pet("1").is_none());
        assert!(roster.get_pet("2").is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_emptied_roster_persists_as_empty() -> Result<()> {
        let storage = test_storage();
        let mut roster = roster_for("u1", &storage)?;

        roster.delete_pet("1").await?;
        roster.delete_pet("2").await?;
        assert!(roster.pets().is_empty());

        // The deliberate empty state survives a reload
        let reloaded = roster_for("u1", &storage)?;
        assert!(reloaded.pets().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_pet_is_idempotent() -> Result<()> {
        let storage = test_storage();
        let roster = roster_for("u1", &storage)?;

        let first = roster.get_pet("1").cloned();
        let second = roster.get_pet("1").cloned();
        assert_eq!(first, second);

        Ok(())
    }

    #[tokio::test]
    async fn test_rosters_are_isolated_per_user() -> Result<()> {
        let storage = test_storage();

        let mut u1 = roster_for("u1", &storage)?;
        u1.add_pet(sample_pet_draft("Rex")).await?;

        // A different user gets their own fixture, never u1's data
        let u2 = roster_for("u2", &storage)?;
        assert_eq!(u2.pets().len(), 2);
        assert!(u2.pets().iter().all(|p| p.name != "Rex"));

        // And u1's roster is unchanged on reload
        let u1_again = roster_for("u1", &storage)?;
        assert_eq!(u1_again.pets().len(), 3);

        Ok(())
    }
}
