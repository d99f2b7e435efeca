//! Upcoming-appointment reminders
//!
//! When a staff member signs in, the scanner looks for one of their
//! appointments starting within the look-ahead window on the current day.

use apptcal_domain::{Appointment, ReminderConfig, ReminderSelection, StaffId};
use chrono::{DateTime, Utc};

use crate::scheduling::TimeNormalizer;

/// Finds the appointment a staff member should be reminded about
#[derive(Debug, Clone, Copy)]
pub struct ReminderScanner {
    normalizer: TimeNormalizer,
    config: ReminderConfig,
}

impl ReminderScanner {
    /// Scanner using `config` for window and selection
    pub fn new(normalizer: TimeNormalizer, config: ReminderConfig) -> Self {
        Self { normalizer, config }
    }

    /// Width of the reminder window in minutes
    pub fn look_ahead_minutes(&self) -> u32 {
        self.config.look_ahead_minutes
    }

    /// The appointment to remind `staff_id` about at `now`, if any.
    ///
    /// A candidate starts on the same display-zone date as `now`, and no
    /// earlier than `now` and at most `look_ahead_minutes` whole minutes
    /// later. Among several candidates the earliest start wins, ties going
    /// to scan order; [`ReminderSelection::FirstMatch`] takes the first
    /// candidate instead.
    pub fn next_reminder<'a>(
        &self,
        appointments: &'a [Appointment],
        staff_id: StaffId,
        now: DateTime<Utc>,
    ) -> Option<&'a Appointment> {
        let mut candidates =
            appointments.iter().filter(|appointment| self.is_due(appointment, staff_id, now));

        match self.config.selection {
            ReminderSelection::FirstMatch => candidates.next(),
            ReminderSelection::Earliest => candidates.min_by_key(|appointment| appointment.start),
        }
    }

    fn is_due(&self, appointment: &Appointment, staff_id: StaffId, now: DateTime<Utc>) -> bool {
        if appointment.staff_id != staff_id {
            return false;
        }
        if self.normalizer.display_date(&appointment.start) != self.normalizer.display_date(&now)
        {
            return false;
        }

        let minutes_until_start = (appointment.start - now).num_minutes();
        (0..=i64::from(self.config.look_ahead_minutes)).contains(&minutes_until_start)
    }
}
