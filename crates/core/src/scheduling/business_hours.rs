//! Business-hours validation
//!
//! An appointment is bookable when both of its endpoints, seen in the
//! reference zone, fall on a weekday between the opening hour and the closing
//! hour. The closing boundary itself (`22:00` by default) is still inside the
//! window; any later minute is not.
//!
//! Only the two endpoints are checked. An appointment starting Monday 21:00
//! and ending Tuesday 09:00 passes even though it runs through the night.

use std::fmt;

use apptcal_domain::BusinessHours;
use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use chrono_tz::Tz;

use super::time_normalizer::TimeNormalizer;

/// Which end of an appointment a violation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The appointment start
    Start,
    /// The appointment end
    End,
}

impl Endpoint {
    /// Field name used in validation errors
    pub fn field(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Why an endpoint falls outside business hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationReason {
    /// Saturday or Sunday in the reference zone
    Weekend,
    /// Earlier than the opening hour
    BeforeOpening,
    /// Later than `close_hour:00`
    AfterClosing,
}

/// One endpoint that falls outside the operating window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessHoursViolation {
    /// Which end of the appointment failed
    pub endpoint: Endpoint,
    /// What rule it broke
    pub reason: ViolationReason,
    /// The offending instant in the reference zone
    pub local_time: DateTime<Tz>,
}

impl fmt::Display for BusinessHoursViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.reason {
            ViolationReason::Weekend => "falls on a weekend",
            ViolationReason::BeforeOpening => "is before opening time",
            ViolationReason::AfterClosing => "is after closing time",
        };
        write!(
            f,
            "{} time {} {}",
            self.endpoint.field(),
            self.local_time.format("%a %Y-%m-%d %H:%M %Z"),
            reason
        )
    }
}

/// Decides whether appointment endpoints fall inside business hours
#[derive(Debug, Clone, Copy)]
pub struct BusinessHoursValidator {
    normalizer: TimeNormalizer,
    hours: BusinessHours,
}

impl BusinessHoursValidator {
    /// Validator for the given operating window
    pub fn new(normalizer: TimeNormalizer, hours: BusinessHours) -> Self {
        Self { normalizer, hours }
    }

    /// The configured operating window
    pub fn hours(&self) -> BusinessHours {
        self.hours
    }

    /// `true` when both endpoints independently pass
    pub fn is_within_business_hours(&self, start: &DateTime<Utc>, end: &DateTime<Utc>) -> bool {
        self.check(Endpoint::Start, start).is_none() && self.check(Endpoint::End, end).is_none()
    }

    /// Every failing endpoint, start first
    pub fn violations(
        &self,
        start: &DateTime<Utc>,
        end: &DateTime<Utc>,
    ) -> Vec<BusinessHoursViolation> {
        [self.check(Endpoint::Start, start), self.check(Endpoint::End, end)]
            .into_iter()
            .flatten()
            .collect()
    }

    fn check(&self, endpoint: Endpoint, instant: &DateTime<Utc>) -> Option<BusinessHoursViolation> {
        let local_time = self.normalizer.to_reference_zone(instant);
        let reason = self.reason_for(&local_time)?;
        Some(BusinessHoursViolation { endpoint, reason, local_time })
    }

    fn reason_for(&self, local_time: &DateTime<Tz>) -> Option<ViolationReason> {
        if matches!(local_time.weekday(), Weekday::Sat | Weekday::Sun) {
            return Some(ViolationReason::Weekend);
        }

        let hour = local_time.hour();
        if hour < self.hours.open_hour {
            return Some(ViolationReason::BeforeOpening);
        }
        if hour > self.hours.close_hour || (hour == self.hours.close_hour && local_time.minute() != 0)
        {
            return Some(ViolationReason::AfterClosing);
        }
        None
    }
}
