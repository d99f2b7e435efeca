//! Appointment conflict detection
//!
//! Two appointments conflict when they belong to the same staff member, are
//! not the same appointment (compared by id), and their time spans intersect
//! beyond mere boundary contact. Back-to-back appointments are allowed.

use apptcal_domain::Appointment;

/// Whether `a` and `b` double-book the same staff member.
///
/// An appointment whose end is not after its start has no interval and
/// conflicts with nothing; the time-order rule reports it instead.
pub fn overlaps(a: &Appointment, b: &Appointment) -> bool {
    if a.id == b.id || a.staff_id != b.staff_id {
        return false;
    }

    match (a.interval(), b.interval()) {
        (Some(a), Some(b)) => a.intersects(&b),
        _ => false,
    }
}

/// Every appointment in `existing` that conflicts with `candidate`, in order
pub fn conflicts_with<'a>(
    candidate: &Appointment,
    existing: &'a [Appointment],
) -> Vec<&'a Appointment> {
    existing.iter().filter(|other| overlaps(other, candidate)).collect()
}
