//! Meeting slot grid and default booking window
//!
//! Start and end times are picked from a fixed grid of times of day. A new
//! appointment is pre-filled with the next half-hour slot.

use apptcal_domain::constants::MINUTES_PER_DAY;
use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

/// Every time of day on a `step_minutes` grid, starting at midnight.
///
/// A step of zero, or one longer than a day, yields midnight only.
pub fn meeting_slots(step_minutes: u32) -> Vec<NaiveTime> {
    if step_minutes == 0 || step_minutes > MINUTES_PER_DAY {
        return vec![NaiveTime::MIN];
    }

    (0..MINUTES_PER_DAY)
        .step_by(step_minutes as usize)
        .filter_map(|minute| NaiveTime::from_hms_opt(minute / 60, minute % 60, 0))
        .collect()
}

/// Suggested start and end for an appointment created at `now`.
///
/// Before half past the hour the suggestion is `hh:30`-`(hh+1):00`, otherwise
/// `(hh+1):00`-`(hh+1):30`. Crossing midnight rolls over to the next day.
pub fn default_window(now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let top_of_hour = now.date().and_hms_opt(now.hour(), 0, 0).unwrap_or(now);

    if now.minute() < 30 {
        (top_of_hour + Duration::minutes(30), top_of_hour + Duration::hours(1))
    } else {
        (top_of_hour + Duration::hours(1), top_of_hour + Duration::minutes(90))
    }
}

#[cfg(test)]
mod tests {
    use apptcal_domain::constants::DEFAULT_SLOT_STEP_MINUTES;
    use chrono::NaiveDate;

    use super::*;

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn datetime(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_quarter_hour_grid() {
        let slots = meeting_slots(DEFAULT_SLOT_STEP_MINUTES);

        assert_eq!(slots.len(), 96);
        assert_eq!(slots[0], time(0, 0));
        assert_eq!(slots[1], time(0, 15));
        assert_eq!(slots[95], time(23, 45));
    }

    #[test]
    fn test_degenerate_steps() {
        assert_eq!(meeting_slots(0), vec![time(0, 0)]);
        assert_eq!(meeting_slots(MINUTES_PER_DAY + 1), vec![time(0, 0)]);
        assert_eq!(meeting_slots(MINUTES_PER_DAY), vec![time(0, 0)]);
    }

    #[test]
    fn test_uneven_step_stops_before_midnight() {
        let slots = meeting_slots(25);
        assert_eq!(slots.last().copied(), Some(time(23, 45)));
    }

    #[test]
    fn test_default_window_first_half_hour() {
        let (start, end) = default_window(datetime(4, 9, 10));
        assert_eq!(start, datetime(4, 9, 30));
        assert_eq!(end, datetime(4, 10, 0));
    }

    #[test]
    fn test_default_window_second_half_hour() {
        let (start, end) = default_window(datetime(4, 9, 30));
        assert_eq!(start, datetime(4, 10, 0));
        assert_eq!(end, datetime(4, 10, 30));
    }

    #[test]
    fn test_default_window_rolls_past_midnight() {
        let (start, end) = default_window(datetime(4, 23, 45));
        assert_eq!(start, datetime(5, 0, 0));
        assert_eq!(end, datetime(5, 0, 30));
    }
}
