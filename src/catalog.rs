//! Static doctor, location, and plan reference catalogs.
//!
//! Catalog data is product configuration loaded from a TOML file - it is
//! never mutated at runtime and is not user-scoped. A copy of `config.toml`
//! is embedded in the crate so the catalogs are available without any file
//! on disk. Lookups by id return `Option`, forcing callers to handle the
//! dangling-reference case explicitly.

use crate::entities::PlanId;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// The catalog data shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../config.toml");

/// Kind of care venue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    /// Outpatient clinic
    Clinic,
    /// Full hospital
    Hospital,
    /// Diagnostics laboratory
    Lab,
}

/// A veterinarian available for appointments.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Doctor {
    /// Catalog id referenced by appointments
    pub id: String,
    /// The doctor's name
    pub name: String,
    /// Medical specialty
    pub specialty: String,
    /// Optional portrait URL
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A venue where appointments take place.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Location {
    /// Catalog id referenced by appointments
    pub id: String,
    /// Venue name
    pub name: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// Kind of venue
    pub kind: LocationType,
}

/// A subscription plan on offer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Plan {
    /// Plan identifier referenced by subscriptions
    pub id: PlanId,
    /// Display name
    pub name: String,
    /// Monthly price
    pub price: f64,
    /// Short marketing description
    pub description: String,
    /// Bullet-point feature list
    pub features: Vec<String>,
    /// CSS class hint used by the presentation layer
    pub color_class: String,
}

/// The full set of reference catalogs.
#[derive(Clone, Debug, Deserialize)]
pub struct Catalog {
    /// Available doctors
    pub doctors: Vec<Doctor>,
    /// Available venues
    pub locations: Vec<Location>,
    /// Available plans
    pub plans: Vec<Plan>,
}

impl Catalog {
    /// Parses the catalog embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_CATALOG)
    }

    /// Loads a catalog from a TOML file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
            message: format!("Failed to read catalog file: {e}"),
        })?;
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse catalog TOML: {e}"),
        })
    }

    /// Looks up a doctor by catalog id.
    #[must_use]
    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    /// Looks up a location by catalog id.
    #[must_use]
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Looks up a plan by plan id.
    #[must_use]
    pub fn plan(&self, id: PlanId) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.doctors.len(), 4);
        assert_eq!(catalog.locations.len(), 4);
        assert_eq!(catalog.plans.len(), 3);
    }

    #[test]
    fn test_doctor_lookup_hit_and_miss() {
        let catalog = Catalog::builtin().unwrap();

        let d1 = catalog.doctor("d1").unwrap();
        assert_eq!(d1.name, "Dra. Maria Silva");

        assert!(catalog.doctor("d99").is_none());
    }

    #[test]
    fn test_location_lookup_hit_and_miss() {
        let catalog = Catalog::builtin().unwrap();

        let l2 = catalog.location("l2").unwrap();
        assert_eq!(l2.kind, LocationType::Hospital);

        assert!(catalog.location("nowhere").is_none());
    }

    #[test]
    fn test_plan_lookup_covers_all_tiers() {
        let catalog = Catalog::builtin().unwrap();

        let basic = catalog.plan(PlanId::Basic).unwrap();
        assert_eq!(basic.price, 79.90);

        let premium = catalog.plan(PlanId::Premium).unwrap();
        assert!(premium.features.len() >= basic.features.len());

        assert!(catalog.plan(PlanId::Intermediate).is_some());
    }

    #[test]
    fn test_parse_catalog_snippet() {
        let toml_str = r#"
            [[doctors]]
            id = "dx"
            name = "Dr. Test"
            specialty = "Testing"

            [[locations]]
            id = "lx"
            name = "Test Clinic"
            address = "Nowhere St. 1"
            city = "Testville"
            kind = "clinic"

            [[plans]]
            id = "basic"
            name = "Basic"
            price = 10.0
            description = "Test plan"
            features = ["one"]
            color_class = "bg-test"
        "#;

        let catalog = Catalog::parse(toml_str).unwrap();
        assert_eq!(catalog.doctors.len(), 1);
        assert!(catalog.doctors[0].image_url.is_none());
        assert_eq!(catalog.plans[0].id, PlanId::Basic);
    }

    #[test]
    fn test_parse_rejects_invalid_toml() {
        let result = Catalog::parse("not valid toml [");
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
