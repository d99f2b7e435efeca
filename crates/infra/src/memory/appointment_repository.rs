//! In-memory implementation of the `AppointmentRepository` port.
//!
//! Ids are allocated sequentially and never reused. When constructed with a
//! directory, writes are rejected if they reference an unknown staff member,
//! customer or contact, the way a foreign-key constraint would.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use apptcal_core::calendar::ports::AppointmentRepository;
use apptcal_domain::{Appointment, AppointmentId, Result, SchedulerError};
use parking_lot::RwLock;
use tracing::{debug, instrument};

use super::directory::InMemoryDirectory;

#[derive(Debug)]
struct Store {
    appointments: Vec<Appointment>,
    next_id: AppointmentId,
}

/// Appointment store held in memory
#[derive(Debug)]
pub struct InMemoryAppointmentRepository {
    store: RwLock<Store>,
    directory: Option<Arc<InMemoryDirectory>>,
    available: AtomicBool,
}

impl Default for InMemoryAppointmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAppointmentRepository {
    /// Empty, available repository without reference checks
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store { appointments: Vec::new(), next_id: 1 }),
            directory: None,
            available: AtomicBool::new(true),
        }
    }

    /// Enforce references against `directory` on insert and update
    pub fn with_directory(mut self, directory: Arc<InMemoryDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Seed stored appointments as-is. Later inserts continue after the
    /// highest seeded id.
    pub fn with_appointments(self, appointments: Vec<Appointment>) -> Self {
        {
            let mut store = self.store.write();
            let highest = appointments.iter().map(|a| a.id).max().unwrap_or(0);
            store.next_id = store.next_id.max(highest + 1);
            store.appointments.extend(appointments);
        }
        self
    }

    /// Simulate an outage. While unavailable every call fails with
    /// `StoreUnavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Whether calls currently succeed
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    /// Number of stored appointments
    pub fn len(&self) -> usize {
        self.store.read().appointments.len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.store.read().appointments.is_empty()
    }

    fn ensure_available(&self) -> Result<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(SchedulerError::StoreUnavailable("in-memory store is offline".to_string()))
        }
    }

    fn check_references(&self, appointment: &Appointment) -> Result<()> {
        let Some(directory) = &self.directory else {
            return Ok(());
        };

        if !directory.has_staff(appointment.staff_id) {
            return Err(SchedulerError::ConstraintViolation(format!(
                "staff member {} does not exist",
                appointment.staff_id
            )));
        }
        if !directory.has_customer(appointment.customer_id) {
            return Err(SchedulerError::ConstraintViolation(format!(
                "customer {} does not exist",
                appointment.customer_id
            )));
        }
        if !directory.has_contact(appointment.contact_id) {
            return Err(SchedulerError::ConstraintViolation(format!(
                "contact {} does not exist",
                appointment.contact_id
            )));
        }
        Ok(())
    }
}

impl AppointmentRepository for InMemoryAppointmentRepository {
    fn list_all(&self) -> Result<Vec<Appointment>> {
        self.ensure_available()?;
        Ok(self.store.read().appointments.clone())
    }

    #[instrument(skip(self, appointment))]
    fn insert(&self, appointment: &Appointment) -> Result<AppointmentId> {
        self.ensure_available()?;
        self.check_references(appointment)?;

        let mut store = self.store.write();
        let id = store.next_id;
        store.next_id += 1;
        store.appointments.push(appointment.with_id(id));

        debug!(appointment_id = id, "stored appointment");
        Ok(id)
    }

    #[instrument(skip(self, appointment), fields(appointment_id = appointment.id))]
    fn update(&self, appointment: &Appointment) -> Result<()> {
        self.ensure_available()?;
        self.check_references(appointment)?;

        let mut store = self.store.write();
        let slot = store
            .appointments
            .iter_mut()
            .find(|stored| stored.id == appointment.id)
            .ok_or_else(|| SchedulerError::NotFound(format!("appointment {}", appointment.id)))?;
        *slot = appointment.clone();

        debug!("replaced appointment");
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete(&self, id: AppointmentId) -> Result<()> {
        self.ensure_available()?;

        let mut store = self.store.write();
        let position = store
            .appointments
            .iter()
            .position(|stored| stored.id == id)
            .ok_or_else(|| SchedulerError::NotFound(format!("appointment {id}")))?;
        store.appointments.remove(position);

        debug!("removed appointment");
        Ok(())
    }
}
