//! Port interfaces for appointment storage and directory lookups
//!
//! These traits define the boundary between the rules engine and whatever
//! store holds the records. Calls are synchronous and are made at most once
//! per service operation; retry policy belongs to the implementation.

use apptcal_domain::{
    Appointment, AppointmentId, Contact, ContactId, Customer, Result, StaffId, StaffMember,
};

/// Appointment persistence
pub trait AppointmentRepository: Send + Sync {
    /// Every stored appointment, in store order
    ///
    /// # Errors
    /// `StoreUnavailable` if the backing store cannot be reached.
    fn list_all(&self) -> Result<Vec<Appointment>>;

    /// Store a new appointment and return its assigned id. The id on
    /// `appointment` is ignored.
    ///
    /// # Errors
    /// `StoreUnavailable`, or `ConstraintViolation` when a referenced staff
    /// member, customer or contact does not exist.
    fn insert(&self, appointment: &Appointment) -> Result<AppointmentId>;

    /// Replace the stored appointment with the same id
    ///
    /// # Errors
    /// `NotFound` if the id is unknown, `StoreUnavailable` or
    /// `ConstraintViolation` as for `insert`.
    fn update(&self, appointment: &Appointment) -> Result<()>;

    /// Remove an appointment. Does not cascade to other records.
    ///
    /// # Errors
    /// `NotFound` if the id is unknown, `StoreUnavailable` on outage.
    fn delete(&self, id: AppointmentId) -> Result<()>;
}

/// Read-only lookups for display labels and report seeding.
///
/// Never consulted by the scheduling rules themselves.
pub trait Directory: Send + Sync {
    /// Every customer, in directory order
    fn list_customers(&self) -> Result<Vec<Customer>>;

    /// Every contact, in directory order
    fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// Every staff member, in directory order
    fn list_staff(&self) -> Result<Vec<StaffMember>>;

    /// Display name of a contact, `None` if unknown
    fn contact_name(&self, id: ContactId) -> Result<Option<String>>;

    /// Display name of a staff member, `None` if unknown
    fn staff_name(&self, id: StaffId) -> Result<Option<String>>;
}
