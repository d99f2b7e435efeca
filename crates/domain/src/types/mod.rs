//! Domain types and models

pub mod appointment;
pub mod directory;
pub mod report;

pub use appointment::{
    Appointment, AppointmentId, ContactId, CustomerId, StaffId, TimeInterval, UNSAVED_ID,
};
pub use directory::{Contact, Customer, NamedEntity, StaffMember};
pub use report::{CustomerHours, MonthTypeCount, MonthTypeKey};
