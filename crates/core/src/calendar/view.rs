//! Immutable calendar snapshot and the queries answered from it
//!
//! A [`CalendarView`] is a point-in-time copy of every appointment. Cloning
//! it is cheap (the appointments sit behind an `Arc`) and nothing can mutate
//! it, so callers may hold on to a view while the service moves on.
//!
//! Calendar dates (week, month, day) are taken in the display zone.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use apptcal_domain::{
    Appointment, AppointmentId, ContactId, Customer, CustomerHours, CustomerId, MonthMatch,
    MonthTypeCount, MonthTypeKey, NamedEntity,
};
use chrono::{Datelike, NaiveDate, Weekday};

use crate::scheduling::TimeNormalizer;

const UNKNOWN_CUSTOMER: &str = "Unknown customer";

/// Point-in-time copy of every appointment
#[derive(Debug, Clone)]
pub struct CalendarView {
    appointments: Arc<[Appointment]>,
    normalizer: TimeNormalizer,
    month_match: MonthMatch,
}

impl CalendarView {
    /// Snapshot `appointments`, keeping their order
    pub fn new(
        appointments: Vec<Appointment>,
        normalizer: TimeNormalizer,
        month_match: MonthMatch,
    ) -> Self {
        Self { appointments: appointments.into(), normalizer, month_match }
    }

    /// Snapshot with no appointments, used before the first load
    pub fn empty(normalizer: TimeNormalizer, month_match: MonthMatch) -> Self {
        Self::new(Vec::new(), normalizer, month_match)
    }

    /// Every appointment in repository fetch order
    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Number of appointments in the snapshot
    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    /// Whether the snapshot holds no appointments
    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Look up an appointment by id
    pub fn get(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Whether an appointment with `id` is in the snapshot
    pub fn contains(&self, id: AppointmentId) -> bool {
        self.get(id).is_some()
    }

    /// Appointments touching the Monday-Sunday week around `reference_date`.
    ///
    /// Included when either the start date or the end date lies inside the
    /// week, so an appointment spanning Sunday night into Monday shows up in
    /// both weeks.
    pub fn this_week(&self, reference_date: NaiveDate) -> Vec<&Appointment> {
        let week = reference_date.week(Weekday::Mon);
        let (monday, sunday) = (week.first_day(), week.last_day());
        let in_week = |date: NaiveDate| monday <= date && date <= sunday;

        self.appointments
            .iter()
            .filter(|a| {
                in_week(self.normalizer.display_date(&a.start))
                    || in_week(self.normalizer.display_date(&a.end))
            })
            .collect()
    }

    /// Appointments starting in the month of `reference_date`.
    ///
    /// With [`MonthMatch::MonthOnly`] the year is ignored.
    pub fn this_month(&self, reference_date: NaiveDate) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| {
                let start = self.normalizer.display_date(&a.start);
                match self.month_match {
                    MonthMatch::MonthOnly => start.month() == reference_date.month(),
                    MonthMatch::MonthAndYear => {
                        start.month() == reference_date.month()
                            && start.year() == reference_date.year()
                    }
                }
            })
            .collect()
    }

    /// Appointments starting on `date`
    pub fn for_day(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| self.normalizer.display_date(&a.start) == date)
            .collect()
    }

    /// Schedule of a single contact
    pub fn for_contact(&self, contact_id: ContactId) -> Vec<&Appointment> {
        self.appointments.iter().filter(|a| a.contact_id == contact_id).collect()
    }

    /// Appointment count per (month, year, type) of the start date
    pub fn count_by_month_and_type(&self) -> BTreeMap<MonthTypeKey, usize> {
        let mut buckets = BTreeMap::new();
        for appointment in self.appointments.iter() {
            *buckets.entry(self.month_type_key(appointment)).or_insert(0) += 1;
        }
        buckets
    }

    /// The month/type buckets as report rows, in first-seen order
    pub fn month_type_report(&self) -> Vec<MonthTypeCount> {
        let mut rows: Vec<MonthTypeCount> = Vec::new();
        let mut index: HashMap<MonthTypeKey, usize> = HashMap::new();

        for appointment in self.appointments.iter() {
            let key = self.month_type_key(appointment);
            if let Some(&position) = index.get(&key) {
                rows[position].count += 1;
                continue;
            }
            index.insert(key.clone(), rows.len());
            rows.push(MonthTypeCount {
                month: key.month,
                year: key.year,
                appointment_type: key.appointment_type,
                count: 1,
            });
        }
        rows
    }

    /// Total booked hours per customer id.
    ///
    /// Seeded from `customers`, so every directory customer appears even with
    /// no appointments. Customers referenced only by appointments are
    /// included as well.
    pub fn hours_by_customer(&self, customers: &[Customer]) -> BTreeMap<CustomerId, f64> {
        let mut totals: BTreeMap<CustomerId, f64> =
            customers.iter().map(|customer| (customer.id(), 0.0)).collect();

        for appointment in self.appointments.iter() {
            *totals.entry(appointment.customer_id).or_insert(0.0) += appointment.duration_hours();
        }
        totals
    }

    /// Labelled hours per customer.
    ///
    /// Customers with appointments come first in first-seen order, followed
    /// by the remaining directory customers in directory order.
    pub fn customer_hours_report(&self, customers: &[Customer]) -> Vec<CustomerHours> {
        let names: HashMap<CustomerId, &str> =
            customers.iter().map(|customer| (customer.id(), customer.name())).collect();
        let mut rows: Vec<CustomerHours> = Vec::new();
        let mut index: HashMap<CustomerId, usize> = HashMap::new();

        for appointment in self.appointments.iter() {
            let id = appointment.customer_id;
            let hours = appointment.duration_hours();
            if let Some(&position) = index.get(&id) {
                rows[position].hours += hours;
                continue;
            }
            let name = names.get(&id).copied().unwrap_or(UNKNOWN_CUSTOMER);
            index.insert(id, rows.len());
            rows.push(CustomerHours { customer: NamedEntity::new(id, name), hours });
        }

        for customer in customers {
            if !index.contains_key(&customer.id()) {
                index.insert(customer.id(), rows.len());
                rows.push(CustomerHours { customer: customer.entity.clone(), hours: 0.0 });
            }
        }
        rows
    }

    fn month_type_key(&self, appointment: &Appointment) -> MonthTypeKey {
        let start = self.normalizer.display_date(&appointment.start);
        MonthTypeKey::new(start.month(), start.year(), appointment.appointment_type.clone())
    }
}
