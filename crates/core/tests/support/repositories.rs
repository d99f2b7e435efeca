//! Mock implementations of the calendar ports
//!
//! Both mocks keep their state behind `Arc<Mutex<..>>` so a test can hand a
//! clone to the service and keep another to inspect calls or inject faults.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use apptcal_core::calendar::ports::{AppointmentRepository, Directory};
use apptcal_domain::{
    Appointment, AppointmentId, Contact, ContactId, Customer, Result as DomainResult,
    SchedulerError, StaffId, StaffMember,
};

/// Repository operations, as recorded by [`MockAppointmentRepository`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepoCall {
    ListAll,
    Insert,
    Update,
    Delete,
}

#[derive(Default)]
struct RepoState {
    appointments: Vec<Appointment>,
    next_id: AppointmentId,
    calls: Vec<RepoCall>,
    failures: HashMap<RepoCall, SchedulerError>,
}

/// In-memory mock for `AppointmentRepository`.
///
/// Records every call and fails an operation on demand. Ids are assigned
/// sequentially after the highest seeded id.
#[derive(Clone)]
pub struct MockAppointmentRepository {
    state: Arc<Mutex<RepoState>>,
}

impl MockAppointmentRepository {
    /// Create a new mock seeded with the provided appointments.
    pub fn new(appointments: Vec<Appointment>) -> Self {
        let next_id = appointments.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            state: Arc::new(Mutex::new(RepoState {
                appointments,
                next_id,
                ..RepoState::default()
            })),
        }
    }

    /// Convenience helper for seeding a single appointment.
    pub fn with_appointment(self, appointment: Appointment) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.next_id = state.next_id.max(appointment.id + 1);
            state.appointments.push(appointment);
        }
        self
    }

    /// Make every subsequent `call` fail with `error`.
    pub fn fail_on(&self, call: RepoCall, error: SchedulerError) {
        self.state.lock().unwrap().failures.insert(call, error);
    }

    pub fn clear_failures(&self) {
        self.state.lock().unwrap().failures.clear();
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self, call: RepoCall) -> usize {
        self.state.lock().unwrap().calls.iter().filter(|c| **c == call).count()
    }

    /// Appointments currently held by the mock store
    pub fn stored(&self) -> Vec<Appointment> {
        self.state.lock().unwrap().appointments.clone()
    }

    fn record(&self, call: RepoCall) -> DomainResult<std::sync::MutexGuard<'_, RepoState>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if let Some(error) = state.failures.get(&call).cloned() {
            return Err(error);
        }
        Ok(state)
    }
}

impl AppointmentRepository for MockAppointmentRepository {
    fn list_all(&self) -> DomainResult<Vec<Appointment>> {
        let state = self.record(RepoCall::ListAll)?;
        Ok(state.appointments.clone())
    }

    fn insert(&self, appointment: &Appointment) -> DomainResult<AppointmentId> {
        let mut state = self.record(RepoCall::Insert)?;
        let id = state.next_id;
        state.next_id += 1;
        state.appointments.push(appointment.with_id(id));
        Ok(id)
    }

    fn update(&self, appointment: &Appointment) -> DomainResult<()> {
        let mut state = self.record(RepoCall::Update)?;
        let slot = state
            .appointments
            .iter_mut()
            .find(|stored| stored.id == appointment.id)
            .ok_or_else(|| SchedulerError::NotFound(format!("appointment {}", appointment.id)))?;
        *slot = appointment.clone();
        Ok(())
    }

    fn delete(&self, id: AppointmentId) -> DomainResult<()> {
        let mut state = self.record(RepoCall::Delete)?;
        let before = state.appointments.len();
        state.appointments.retain(|stored| stored.id != id);
        if state.appointments.len() == before {
            return Err(SchedulerError::NotFound(format!("appointment {id}")));
        }
        Ok(())
    }
}

impl Default for MockAppointmentRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// In-memory mock for `Directory`.
#[derive(Default, Clone)]
pub struct MockDirectory {
    customers: Vec<Customer>,
    contacts: Vec<Contact>,
    staff: Vec<StaffMember>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customer(mut self, id: i64, name: &str) -> Self {
        self.customers.push(Customer::new(id, name));
        self
    }

    pub fn with_contact(mut self, id: i64, name: &str) -> Self {
        self.contacts.push(Contact::new(id, name));
        self
    }

    pub fn with_staff(mut self, id: i64, name: &str) -> Self {
        self.staff.push(StaffMember::new(id, name));
        self
    }
}

impl Directory for MockDirectory {
    fn list_customers(&self) -> DomainResult<Vec<Customer>> {
        Ok(self.customers.clone())
    }

    fn list_contacts(&self) -> DomainResult<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn list_staff(&self) -> DomainResult<Vec<StaffMember>> {
        Ok(self.staff.clone())
    }

    fn contact_name(&self, id: ContactId) -> DomainResult<Option<String>> {
        Ok(self.contacts.iter().find(|c| c.id() == id).map(|c| c.name().to_string()))
    }

    fn staff_name(&self, id: StaffId) -> DomainResult<Option<String>> {
        Ok(self.staff.iter().find(|s| s.id() == id).map(|s| s.name().to_string()))
    }
}
