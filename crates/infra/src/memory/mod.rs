//! In-memory adapters for the calendar ports
//!
//! Thread-safe (`parking_lot::RwLock`) stores suitable for embedding, demos
//! and failure drills. Nothing is persisted.

pub mod appointment_repository;
pub mod directory;

pub use appointment_repository::InMemoryAppointmentRepository;
pub use directory::InMemoryDirectory;
