//! Pure scheduling rules
//!
//! Zone normalization, business-hours checks, conflict detection and the
//! meeting slot grid. Nothing here touches storage or holds state.

pub mod business_hours;
pub mod overlap;
pub mod slots;
pub mod time_normalizer;

pub use business_hours::{
    BusinessHoursValidator, BusinessHoursViolation, Endpoint, ViolationReason,
};
pub use overlap::{conflicts_with, overlaps};
pub use slots::{default_window, meeting_slots};
pub use time_normalizer::{to_zone, TimeNormalizer};
