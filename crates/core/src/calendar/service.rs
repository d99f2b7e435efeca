//! Calendar service - the single writer of appointment data
//!
//! Every mutation is validated in full before the repository is touched.
//! After a successful write the snapshot is rebuilt from the repository, so
//! queries always reflect the store rather than a local guess of it. A
//! failed write leaves the snapshot exactly as it was.
//!
//! A write that lands but whose follow-up refresh fails still succeeds. The
//! snapshot is then marked stale and the next write refreshes it before
//! validating, so overlap checks never run against data missing a stored row.

use std::collections::BTreeMap;
use std::sync::Arc;

use apptcal_domain::validation::codes;
use apptcal_domain::{
    Appointment, AppointmentId, ContactId, CustomerHours, CustomerId, FieldError, MonthMatch,
    Result, SchedulerConfig, SchedulerError, StaffId, ValidationError, UNSAVED_ID,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use super::ports::{AppointmentRepository, Directory};
use super::reminders::ReminderScanner;
use super::view::CalendarView;
use crate::scheduling::{conflicts_with, BusinessHoursValidator, TimeNormalizer};

/// Validates, persists and serves appointments
pub struct CalendarService {
    repository: Arc<dyn AppointmentRepository>,
    directory: Arc<dyn Directory>,
    normalizer: TimeNormalizer,
    business_hours: BusinessHoursValidator,
    reminders: ReminderScanner,
    month_match: MonthMatch,
    snapshot: CalendarView,
    stale: bool,
}

impl CalendarService {
    /// Create a service with an empty snapshot. Call [`load`](Self::load)
    /// before answering queries.
    pub fn new(
        repository: Arc<dyn AppointmentRepository>,
        directory: Arc<dyn Directory>,
        config: &SchedulerConfig,
    ) -> Self {
        let normalizer = TimeNormalizer::new(config.reference_zone, config.display_zone);
        Self {
            repository,
            directory,
            normalizer,
            business_hours: BusinessHoursValidator::new(normalizer, config.business_hours),
            reminders: ReminderScanner::new(normalizer, config.reminders),
            month_match: config.month_match,
            snapshot: CalendarView::empty(normalizer, config.month_match),
            stale: false,
        }
    }

    /// Fetch the initial snapshot
    pub fn load(&mut self) -> Result<()> {
        self.refresh()
    }

    /// Rebuild the snapshot from the repository.
    ///
    /// On failure the previous snapshot stays in place.
    pub fn refresh(&mut self) -> Result<()> {
        let appointments = self.repository.list_all().map_err(|err| {
            warn!(error = %err, error_label = err.label(), "Failed to refresh appointment snapshot");
            err
        })?;

        debug!(count = appointments.len(), "Appointment snapshot refreshed");
        self.snapshot = CalendarView::new(appointments, self.normalizer, self.month_match);
        self.stale = false;
        Ok(())
    }

    /// Whether a write landed that the snapshot does not show yet
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// The current snapshot. Later mutations do not affect it.
    pub fn view(&self) -> CalendarView {
        self.snapshot.clone()
    }

    /// Zone conversions used by this service
    pub fn normalizer(&self) -> TimeNormalizer {
        self.normalizer
    }

    /// Run every appointment rule against the current snapshot.
    ///
    /// # Errors
    /// `SchedulerError::Validation` listing every failing field.
    pub fn validate(&self, appointment: &Appointment) -> Result<()> {
        self.collect_errors(appointment).into_result().map_err(SchedulerError::from)
    }

    /// Validate and store a new appointment, returning its id.
    ///
    /// Any id already set on `appointment` is ignored.
    ///
    /// # Errors
    /// `StoreUnavailable` before anything is written when a stale snapshot
    /// cannot be refreshed; `Validation` when any rule fails.
    #[instrument(skip(self, appointment), fields(staff_id = appointment.staff_id))]
    pub fn create(&mut self, appointment: &Appointment) -> Result<AppointmentId> {
        self.ensure_fresh()?;
        let candidate = appointment.with_id(UNSAVED_ID);
        self.validate(&candidate).map_err(|err| log_rejection("create", err))?;

        let id = self.repository.insert(&candidate).map_err(|err| log_store_failure("insert", err))?;
        info!(appointment_id = id, "Appointment created");

        self.refresh_after_write();
        Ok(id)
    }

    /// Validate and replace an existing appointment
    #[instrument(skip(self, appointment), fields(appointment_id = appointment.id))]
    pub fn update(&mut self, appointment: &Appointment) -> Result<()> {
        self.ensure_fresh()?;
        let mut errors = ValidationError::new();
        if !appointment.is_persisted() {
            errors.push(
                FieldError::new("id", "Appointment must be saved before it can be updated")
                    .with_code(codes::INVALID_ID),
            );
        }
        errors.merge(self.collect_errors(appointment));
        errors
            .into_result()
            .map_err(|err| log_rejection("update", SchedulerError::from(err)))?;

        self.repository.update(appointment).map_err(|err| log_store_failure("update", err))?;
        info!("Appointment updated");

        self.refresh_after_write();
        Ok(())
    }

    /// Remove an appointment by id
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: AppointmentId) -> Result<()> {
        self.repository.delete(id).map_err(|err| log_store_failure("delete", err))?;
        info!("Appointment deleted");

        self.refresh_after_write();
        Ok(())
    }

    /// The appointment `staff_id` should be reminded about at `now`
    pub fn next_reminder(&self, staff_id: StaffId, now: DateTime<Utc>) -> Option<Appointment> {
        self.reminders.next_reminder(self.snapshot.all(), staff_id, now).cloned()
    }

    /// Hours per customer id, seeded with every directory customer
    pub fn hours_by_customer(&self) -> Result<BTreeMap<CustomerId, f64>> {
        let customers = self.directory.list_customers()?;
        Ok(self.snapshot.hours_by_customer(&customers))
    }

    /// Labelled hours per customer, seeded with every directory customer
    pub fn customer_hours_report(&self) -> Result<Vec<CustomerHours>> {
        let customers = self.directory.list_customers()?;
        Ok(self.snapshot.customer_hours_report(&customers))
    }

    /// Display name of a contact, if the directory knows it
    pub fn contact_name(&self, id: ContactId) -> Result<Option<String>> {
        self.directory.contact_name(id)
    }

    /// Display name of a staff member, if the directory knows it
    pub fn staff_name(&self, id: StaffId) -> Result<Option<String>> {
        self.directory.staff_name(id)
    }

    fn ensure_fresh(&mut self) -> Result<()> {
        if self.stale {
            self.refresh()?;
        }
        Ok(())
    }

    fn refresh_after_write(&mut self) {
        if let Err(err) = self.refresh() {
            warn!(error = %err, "Write stored but snapshot is stale until the next refresh");
            self.stale = true;
        }
    }

    fn collect_errors(&self, appointment: &Appointment) -> ValidationError {
        let mut errors = ValidationError::new();

        for (field, value) in [
            ("title", &appointment.title),
            ("description", &appointment.description),
            ("location", &appointment.location),
            ("type", &appointment.appointment_type),
        ] {
            if value.trim().is_empty() {
                errors.add_error_with_code(field, format!("{field} is required"), codes::REQUIRED);
            }
        }

        for (field, id) in [
            ("staff_id", appointment.staff_id),
            ("customer_id", appointment.customer_id),
            ("contact_id", appointment.contact_id),
        ] {
            if id <= 0 {
                errors.push(
                    FieldError::new(field, format!("{field} must reference an existing record"))
                        .with_code(codes::INVALID_REFERENCE)
                        .with_metadata("value", id.to_string()),
                );
            }
        }

        if appointment.interval().is_none() {
            errors.add_error_with_code("end", "end must be after start", codes::TIME_ORDER);
        }

        for violation in self.business_hours.violations(&appointment.start, &appointment.end) {
            errors.add_error_with_code(
                violation.endpoint.field(),
                violation.to_string(),
                codes::OUTSIDE_BUSINESS_HOURS,
            );
        }

        // Overlap against an inverted interval is meaningless
        if appointment.interval().is_some() {
            let conflicts = conflicts_with(appointment, self.snapshot.all());
            if !conflicts.is_empty() {
                errors.push(self.overlap_error(&conflicts));
            }
        }

        errors
    }

    fn overlap_error(&self, conflicts: &[&Appointment]) -> FieldError {
        let described: Vec<String> = conflicts
            .iter()
            .map(|other| {
                format!(
                    "{} ({} - {})",
                    other.id,
                    self.normalizer.to_display_zone(&other.start).format("%Y-%m-%d %H:%M"),
                    self.normalizer.to_display_zone(&other.end).format("%H:%M %Z"),
                )
            })
            .collect();
        let ids: Vec<String> = conflicts.iter().map(|other| other.id.to_string()).collect();

        FieldError::new("start", format!("Overlaps appointment {}", described.join(", ")))
            .with_code(codes::OVERLAP)
            .with_metadata("conflicting_ids", ids.join(","))
    }
}

fn log_rejection(operation: &'static str, err: SchedulerError) -> SchedulerError {
    let error_count = err.validation_errors().map_or(0, ValidationError::error_count);
    warn!(operation, error_count, error = %err, "Appointment rejected");
    err
}

fn log_store_failure(operation: &'static str, err: SchedulerError) -> SchedulerError {
    warn!(
        operation,
        error = %err,
        error_label = err.label(),
        retryable = err.is_retryable(),
        "Repository call failed"
    );
    err
}
