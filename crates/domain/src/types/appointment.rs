//! Appointment record and the interval derived from it

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Repository-assigned appointment identity. `0` means not yet persisted.
pub type AppointmentId = i64;
/// Staff member identity (the user an appointment is booked for).
pub type StaffId = i64;
/// Customer identity
pub type CustomerId = i64;
/// Contact identity
pub type ContactId = i64;

/// Id carried by an appointment that has not been persisted yet.
pub const UNSAVED_ID: AppointmentId = 0;

/// A scheduled appointment bound to one staff member.
///
/// Start and end are absolute UTC instants; every zone-specific decision
/// (business hours, calendar dates) converts them explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// [`UNSAVED_ID`] until the repository assigns one
    #[serde(default)]
    pub id: AppointmentId,
    /// Short subject shown in calendar lists
    pub title: String,
    /// Free-text details
    pub description: String,
    /// Where the appointment takes place
    pub location: String,
    /// Free-text category, serialized as `type`
    #[serde(rename = "type")]
    pub appointment_type: String,
    /// Inclusive start instant
    pub start: DateTime<Utc>,
    /// Exclusive end instant
    pub end: DateTime<Utc>,
    /// Staff member the appointment is booked for
    pub staff_id: StaffId,
    /// Customer the time is booked against
    pub customer_id: CustomerId,
    /// Contact attending the appointment
    pub contact_id: ContactId,
}

impl Appointment {
    /// Whether the repository has assigned an id
    pub fn is_persisted(&self) -> bool {
        self.id > UNSAVED_ID
    }

    /// Copy of this appointment carrying a different id
    pub fn with_id(&self, id: AppointmentId) -> Self {
        Self { id, ..self.clone() }
    }

    /// The appointment's interval, `None` when end is not after start
    pub fn interval(&self) -> Option<TimeInterval> {
        TimeInterval::new(self.start, self.end)
    }

    /// Length in hours, counted in whole minutes.
    pub fn duration_hours(&self) -> f64 {
        minutes_as_hours(self.end - self.start)
    }
}

/// Half-open span of time with `start < end` guaranteed by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeInterval {
    /// Build an interval, `None` unless `start < end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Inclusive start instant
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive end instant
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `instant` lies strictly between start and end
    pub fn strictly_contains(&self, instant: DateTime<Utc>) -> bool {
        self.start < instant && instant < self.end
    }

    /// Whether the two intervals share more than a boundary instant.
    ///
    /// Identical intervals intersect; back-to-back intervals do not.
    pub fn intersects(&self, other: &Self) -> bool {
        self == other
            || self.strictly_contains(other.start)
            || self.strictly_contains(other.end)
            || other.strictly_contains(self.start)
            || other.strictly_contains(self.end)
    }
}

#[allow(clippy::cast_precision_loss)]
fn minutes_as_hours(duration: Duration) -> f64 {
    duration.num_minutes() as f64 / 60.0
}
