//! Time zone normalization
//!
//! Appointments carry UTC instants. Rules that depend on wall-clock time
//! (weekday, hour, calendar date) first re-express the instant in an explicit
//! zone: the reference zone for business rules, the display zone for views.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Re-express `instant` in `zone` without moving the absolute point in time.
pub fn to_zone<Z: TimeZone>(instant: &DateTime<Utc>, zone: &Z) -> DateTime<Z> {
    instant.with_timezone(zone)
}

/// Converts instants into the configured reference and display zones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeNormalizer {
    reference_zone: Tz,
    display_zone: Tz,
}

impl TimeNormalizer {
    /// Normalizer for the given reference and display zones
    pub fn new(reference_zone: Tz, display_zone: Tz) -> Self {
        Self { reference_zone, display_zone }
    }

    /// Zone used for business rules
    pub fn reference_zone(&self) -> Tz {
        self.reference_zone
    }

    /// Zone used for calendar views
    pub fn display_zone(&self) -> Tz {
        self.display_zone
    }

    /// The instant as seen on a wall clock at headquarters
    pub fn to_reference_zone(&self, instant: &DateTime<Utc>) -> DateTime<Tz> {
        to_zone(instant, &self.reference_zone)
    }

    /// The instant as shown in calendar views
    pub fn to_display_zone(&self, instant: &DateTime<Utc>) -> DateTime<Tz> {
        to_zone(instant, &self.display_zone)
    }

    /// Calendar date of the instant in the display zone
    pub fn display_date(&self, instant: &DateTime<Utc>) -> NaiveDate {
        self.to_display_zone(instant).date_naive()
    }
}
