//! Appointment calendar
//!
//! Storage ports, the immutable snapshot with its queries and reports,
//! reminder scanning, and the service that owns all writes.

pub mod ports;
pub mod reminders;
pub mod service;
pub mod view;

pub use ports::{AppointmentRepository, Directory};
pub use reminders::ReminderScanner;
pub use service::CalendarService;
pub use view::CalendarView;
