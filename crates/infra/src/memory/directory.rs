//! In-memory implementation of the `Directory` port.

use apptcal_core::calendar::ports::Directory;
use apptcal_domain::{Contact, ContactId, Customer, CustomerId, Result, StaffId, StaffMember};
use parking_lot::RwLock;

#[derive(Debug, Default)]
struct DirectoryData {
    customers: Vec<Customer>,
    contacts: Vec<Contact>,
    staff: Vec<StaffMember>,
}

/// Customers, contacts and staff members held in memory, in insertion order
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    data: RwLock<DirectoryData>,
}

impl InMemoryDirectory {
    /// Empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a customer
    pub fn with_customer(self, customer: Customer) -> Self {
        self.add_customer(customer);
        self
    }

    /// Builder: add a contact
    pub fn with_contact(self, contact: Contact) -> Self {
        self.add_contact(contact);
        self
    }

    /// Builder: add a staff member
    pub fn with_staff(self, staff: StaffMember) -> Self {
        self.add_staff(staff);
        self
    }

    /// Add or replace a customer, keyed by id
    pub fn add_customer(&self, customer: Customer) {
        upsert(&mut self.data.write().customers, customer, Customer::id);
    }

    /// Insert or replace a contact
    pub fn add_contact(&self, contact: Contact) {
        upsert(&mut self.data.write().contacts, contact, Contact::id);
    }

    /// Insert or replace a staff member
    pub fn add_staff(&self, staff: StaffMember) {
        upsert(&mut self.data.write().staff, staff, StaffMember::id);
    }

    /// Whether a customer with `id` exists
    pub fn has_customer(&self, id: CustomerId) -> bool {
        self.data.read().customers.iter().any(|c| c.id() == id)
    }

    /// Whether a contact with `id` exists
    pub fn has_contact(&self, id: ContactId) -> bool {
        self.data.read().contacts.iter().any(|c| c.id() == id)
    }

    /// Whether a staff member with `id` exists
    pub fn has_staff(&self, id: StaffId) -> bool {
        self.data.read().staff.iter().any(|s| s.id() == id)
    }
}

fn upsert<T>(records: &mut Vec<T>, record: T, id: impl Fn(&T) -> i64) {
    let key = id(&record);
    match records.iter_mut().find(|existing| id(existing) == key) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

impl Directory for InMemoryDirectory {
    fn list_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.data.read().customers.clone())
    }

    fn list_contacts(&self) -> Result<Vec<Contact>> {
        Ok(self.data.read().contacts.clone())
    }

    fn list_staff(&self) -> Result<Vec<StaffMember>> {
        Ok(self.data.read().staff.clone())
    }

    fn contact_name(&self, id: ContactId) -> Result<Option<String>> {
        Ok(self
            .data
            .read()
            .contacts
            .iter()
            .find(|c| c.id() == id)
            .map(|c| c.name().to_string()))
    }

    fn staff_name(&self, id: StaffId) -> Result<Option<String>> {
        Ok(self.data.read().staff.iter().find(|s| s.id() == id).map(|s| s.name().to_string()))
    }
}
