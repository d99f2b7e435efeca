//! # Apptcal Core
//!
//! Scheduling rules engine - no infrastructure dependencies.
//!
//! This crate contains:
//! - Pure scheduling rules (zones, business hours, overlap, slot grid)
//! - Port interfaces for appointment storage and directory lookups
//! - Calendar snapshot queries, reports and reminders
//! - The calendar service that validates and applies every mutation
//!
//! ## Architecture Principles
//! - Only depends on `apptcal-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod calendar;
pub mod scheduling;

// Re-export specific items to avoid ambiguity
pub use calendar::{
    AppointmentRepository, CalendarService, CalendarView, Directory, ReminderScanner,
};
pub use scheduling::{
    conflicts_with, default_window, meeting_slots, overlaps, BusinessHoursValidator,
    BusinessHoursViolation, Endpoint, TimeNormalizer, ViolationReason,
};
