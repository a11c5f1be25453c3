//! Appointment entity - a scheduled, completed, or cancelled visit.
//!
//! Appointments reference a pet, a doctor, and a location by id. Referential
//! integrity is not enforced: a dangling id is tolerated and resolves to a
//! catalog/roster miss at display time. Status only ever moves forward from
//! `scheduled`, and only by explicit cancel/complete action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of veterinary visit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentType {
    /// Routine checkup
    Checkup,
    /// Vaccination visit
    Vaccination,
    /// Diagnostic exam
    Exam,
    /// Emergency visit
    Emergency,
    /// Surgical procedure
    Surgery,
}

/// Lifecycle state of an appointment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Booked and not yet resolved
    Scheduled,
    /// Visit took place
    Completed,
    /// Visit was called off
    Cancelled,
}

/// A veterinary appointment on the current user's book.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Unique identifier within the owner's book
    pub id: String,
    /// Id of the pet being seen
    pub pet_id: String,
    /// Id of the attending doctor (catalog reference)
    pub doctor_id: String,
    /// Id of the venue (catalog reference)
    pub location_id: String,
    /// Kind of visit
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    /// Scheduled start, stored as an ISO-8601 string on the wire
    pub date: DateTime<Utc>,
    /// Planned duration in minutes
    pub duration: u32,
    /// Current lifecycle state
    pub status: AppointmentStatus,
    /// Free-form visit notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Input for booking an appointment - everything but the id and status,
/// which the book assigns (status is always forced to `scheduled`).
#[derive(Clone, Debug, PartialEq)]
pub struct AppointmentDraft {
    /// Id of the pet being seen
    pub pet_id: String,
    /// Id of the attending doctor (catalog reference)
    pub doctor_id: String,
    /// Id of the venue (catalog reference)
    pub location_id: String,
    /// Kind of visit
    pub kind: AppointmentType,
    /// Scheduled start
    pub date: DateTime<Utc>,
    /// Planned duration in minutes
    pub duration: u32,
    /// Free-form visit notes
    pub notes: Option<String>,
}

impl AppointmentDraft {
    /// Materializes the draft into a freshly scheduled [`Appointment`].
    #[must_use]
    pub fn into_scheduled(self, id: String) -> Appointment {
        Appointment {
            id,
            pet_id: self.pet_id,
            doctor_id: self.doctor_id,
            location_id: self.location_id,
            kind: self.kind,
            date: self.date,
            duration: self.duration,
            status: AppointmentStatus::Scheduled,
            notes: self.notes,
        }
    }
}
