//! Appointment fixtures
//!
//! Times are written as New York wall-clock times, the default reference
//! zone. March 2024 starts on a Friday, so 2024-03-04 is a Monday.

use std::sync::Arc;

use apptcal_core::CalendarService;
use apptcal_domain::{Appointment, SchedulerConfig};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::New_York;

use super::repositories::{MockAppointmentRepository, MockDirectory};

/// A New York wall-clock time in March 2024 as a UTC instant
pub fn eastern(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    New_York.with_ymd_and_hms(2024, 3, day, hour, minute, 0).unwrap().with_timezone(&Utc)
}

/// A valid appointment for staff member `staff_id`
pub fn appointment(
    id: i64,
    staff_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Appointment {
    Appointment {
        id,
        title: "Quarterly review".to_string(),
        description: "Review the quarter".to_string(),
        location: "Room 3".to_string(),
        appointment_type: "Review".to_string(),
        start,
        end,
        staff_id,
        customer_id: 1,
        contact_id: 1,
    }
}

/// A loaded service over `repository`, default configuration
pub fn loaded_service(
    repository: &MockAppointmentRepository,
    directory: MockDirectory,
) -> CalendarService {
    let mut service = CalendarService::new(
        Arc::new(repository.clone()),
        Arc::new(directory),
        &SchedulerConfig::default(),
    );
    service.load().unwrap();
    service
}
