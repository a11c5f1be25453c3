//! Appointment book - scheduling, status transitions, and date filtering.
//!
//! The book rehydrates from the `appointments_<uid>` snapshot; a first-time
//! user gets three demo appointments referencing the first two roster pets.
//! Scheduling always produces a `scheduled` record regardless of input.
//! Cancel and complete move a record forward from `scheduled` only and touch
//! nothing but the status field; a dangling or already-resolved id is a
//! silent no-op. Doctor and location reads go to the static catalog and
//! resolve misses to `None`.

use crate::catalog::{Catalog, Doctor, Location};
use crate::entities::{Appointment, AppointmentDraft, AppointmentStatus, AppointmentType, Pet};
use crate::errors::Result;
use crate::id;
use crate::remote::RemoteCall;
use crate::session::Session;
use crate::storage::{self, SnapshotStore, keys};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::debug;

/// Owner of the current user's scheduled, completed, and cancelled visits.
pub struct AppointmentBook {
    session: Arc<Session>,
    storage: Arc<dyn SnapshotStore>,
    remote: Arc<dyn RemoteCall>,
    catalog: Arc<Catalog>,
    appointments: Vec<Appointment>,
    loading: bool,
}

impl AppointmentBook {
    /// Loads the book for the session's user. A first-time user is seeded
    /// with demo appointments against the first two pets of `pets` (falling
    /// back to the demo roster ids when the roster is shorter).
    pub fn load(
        session: Arc<Session>,
        storage: Arc<dyn SnapshotStore>,
        remote: Arc<dyn RemoteCall>,
        catalog: Arc<Catalog>,
        pets: &[Pet],
    ) -> Result<Self> {
        let key = keys::appointments(session.user_id());
        let appointments =
            match storage::load_snapshot::<Vec<Appointment>>(storage.as_ref(), &key)? {
                Some(appointments) => appointments,
                None => {
                    let demo = demo_appointments(pets, Utc::now());
                    storage::save_snapshot(storage.as_ref(), &key, &demo)?;
                    debug!(user_id = %session.user_id(), "seeded demo appointments");
                    demo
                }
            };
        Ok(Self {
            session,
            storage,
            remote,
            catalog,
            appointments,
            loading: false,
        })
    }

    /// All appointments on the book, in insertion order.
    #[must_use]
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Looks up an appointment by id.
    #[must_use]
    pub fn get_appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Whether an operation is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Books a visit: assigns a fresh id and forces status `scheduled`,
    /// whatever the caller intended. Returns the materialized record.
    pub async fn schedule_appointment(&mut self, draft: AppointmentDraft) -> Result<Appointment> {
        self.loading = true;
        let result = self.do_schedule(draft).await;
        self.loading = false;
        result
    }

    /// Cancels a scheduled appointment in place. Only the status changes;
    /// a dangling id or an already-resolved record is a silent no-op.
    pub async fn cancel_appointment(&mut self, id: &str) -> Result<()> {
        self.loading = true;
        let result = self
            .transition(id, AppointmentStatus::Cancelled, "appointments.cancel")
            .await;
        self.loading = false;
        result
    }

    /// Marks a scheduled appointment completed in place. Same no-op rules
    /// as [`Self::cancel_appointment`].
    pub async fn complete_appointment(&mut self, id: &str) -> Result<()> {
        self.loading = true;
        let result = self
            .transition(id, AppointmentStatus::Completed, "appointments.complete")
            .await;
        self.loading = false;
        result
    }

    /// Scheduled visits strictly in the future, earliest first.
    #[must_use]
    pub fn upcoming_appointments(&self) -> Vec<Appointment> {
        let now = Utc::now();
        let mut upcoming: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled && a.date > now)
            .cloned()
            .collect();
        upcoming.sort_by_key(|a| a.date);
        upcoming
    }

    /// Completed visits plus scheduled visits whose date has passed (a
    /// missed appointment counts as past), most recent first. Cancelled
    /// visits appear in neither listing.
    #[must_use]
    pub fn past_appointments(&self) -> Vec<Appointment> {
        let now = Utc::now();
        let mut past: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|a| {
                a.status == AppointmentStatus::Completed
                    || (a.status == AppointmentStatus::Scheduled && a.date < now)
            })
            .cloned()
            .collect();
        past.sort_by(|a, b| b.date.cmp(&a.date));
        past
    }

    /// Looks up a doctor in the static catalog.
    #[must_use]
    pub fn get_doctor(&self, id: &str) -> Option<&Doctor> {
        self.catalog.doctor(id)
    }

    /// Looks up a location in the static catalog.
    #[must_use]
    pub fn get_location(&self, id: &str) -> Option<&Location> {
        self.catalog.location(id)
    }

    async fn do_schedule(&mut self, draft: AppointmentDraft) -> Result<Appointment> {
        self.remote.perform("appointments.schedule").await?;

        let appointment = draft.into_scheduled(id::generate());
        self.appointments.push(appointment.clone());
        self.persist()?;
        debug!(
            user_id = %self.session.user_id(),
            appointment_id = %appointment.id,
            "scheduled appointment"
        );
        Ok(appointment)
    }

    async fn transition(
        &mut self,
        id: &str,
        to: AppointmentStatus,
        operation: &str,
    ) -> Result<()> {
        self.remote.perform(operation).await?;

        if let Some(appointment) = self.appointments.iter_mut().find(|a| a.id == id) {
            // Status only ever moves forward from `scheduled`
            if appointment.status == AppointmentStatus::Scheduled {
                appointment.status = to;
                debug!(appointment_id = %id, status = ?to, "appointment transitioned");
            }
        }
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        storage::save_snapshot(
            self.storage.as_ref(),
            &keys::appointments(self.session.user_id()),
            &self.appointments,
        )
    }
}

/// The fixed demo fixture for a first-time user: a checkup tomorrow, an exam
/// next week, and a completed vaccination last week.
fn demo_appointments(pets: &[Pet], now: DateTime<Utc>) -> Vec<Appointment> {
    let first_pet = pets.first().map_or_else(|| "1".to_string(), |p| p.id.clone());
    let second_pet = pets.get(1).map_or_else(|| "2".to_string(), |p| p.id.clone());

    vec![
        Appointment {
            id: "1".to_string(),
            pet_id: first_pet.clone(),
            doctor_id: "d1".to_string(),
            location_id: "l1".to_string(),
            kind: AppointmentType::Checkup,
            date: now + Duration::days(1),
            duration: 30,
            status: AppointmentStatus::Scheduled,
            notes: None,
        },
        Appointment {
            id: "2".to_string(),
            pet_id: first_pet,
            doctor_id: "d3".to_string(),
            location_id: "l4".to_string(),
            kind: AppointmentType::Exam,
            date: now + Duration::days(7),
            duration: 45,
            status: AppointmentStatus::Scheduled,
            notes: None,
        },
        Appointment {
            id: "3".to_string(),
            pet_id: second_pet,
            doctor_id: "d2".to_string(),
            location_id: "l2".to_string(),
            kind: AppointmentType::Vaccination,
            date: now - Duration::days(7),
            duration: 15,
            status: AppointmentStatus::Completed,
            notes: Some("Vacina antirrábica aplicada. Próxima dose em 1 ano.".to_string()),
        },
    ]
}
