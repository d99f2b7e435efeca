//! Scheduler constants
//!
//! Centralized defaults for the scheduling rules. Every value here can be
//! overridden through [`crate::SchedulerConfig`].

use chrono_tz::Tz;

/// Headquarters zone in which business hours and conflicts are evaluated.
pub const DEFAULT_REFERENCE_ZONE: Tz = chrono_tz::America::New_York;
/// Zone used for calendar dates when the caller does not supply one.
pub const DEFAULT_DISPLAY_ZONE: Tz = chrono_tz::UTC;

// Business hours (reference zone, Monday-Friday)
/// First bookable hour in the reference zone
pub const DEFAULT_OPEN_HOUR: u32 = 8;
/// Last bookable hour; `22:00` itself is inside the window
pub const DEFAULT_CLOSE_HOUR: u32 = 22;

// Reminders
/// Reminder window in whole minutes
pub const DEFAULT_REMINDER_LOOKAHEAD_MINUTES: u32 = 15;

// Meeting slot grid offered for start/end pickers
/// Spacing of the meeting slot grid
pub const DEFAULT_SLOT_STEP_MINUTES: u32 = 15;
/// Minutes in a calendar day
pub const MINUTES_PER_DAY: u32 = 24 * 60;

// Logging
/// Log filter used when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";
