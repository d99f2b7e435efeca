//! Aggregation rows produced from a calendar snapshot

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::directory::NamedEntity;

/// Bucket key for the month/type count report
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthTypeKey {
    /// Calendar month, 1-12
    pub month: u32,
    /// Calendar year of the start date
    pub year: i32,
    /// Free-text appointment type
    pub appointment_type: String,
}

impl MonthTypeKey {
    /// Key for `month`/`year` and an appointment type
    pub fn new(month: u32, year: i32, appointment_type: impl Into<String>) -> Self {
        Self { month, year, appointment_type: appointment_type.into() }
    }
}

/// One row of the month/type count report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTypeCount {
    /// Calendar month, 1-12
    pub month: u32,
    /// Calendar year
    pub year: i32,
    /// Free-text appointment type
    pub appointment_type: String,
    /// Appointments in this bucket
    pub count: usize,
}

impl MonthTypeCount {
    /// Short label such as `"Mar 2024"`
    pub fn month_year_label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).map_or_else(
            || format!("{:02}/{}", self.month, self.year),
            |first| first.format("%b %Y").to_string(),
        )
    }
}

/// Accumulated appointment hours for one customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerHours {
    /// Customer id and name
    pub customer: NamedEntity,
    /// Sum of appointment durations in hours
    pub hours: f64,
}

impl CustomerHours {
    /// `"id: name"` label of the customer
    pub fn label(&self) -> String {
        self.customer.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_year_label() {
        let row = MonthTypeCount { month: 3, year: 2024, appointment_type: "Planning".into(), count: 3 };
        assert_eq!(row.month_year_label(), "Mar 2024");

        let december = MonthTypeCount { month: 12, ..row.clone() };
        assert_eq!(december.month_year_label(), "Dec 2024");

        let bogus = MonthTypeCount { month: 0, ..row };
        assert_eq!(bogus.month_year_label(), "00/2024");
    }

    #[test]
    fn test_keys_order_by_month_then_year_then_type() {
        let mut keys = vec![
            MonthTypeKey::new(4, 2024, "Review"),
            MonthTypeKey::new(3, 2024, "Review"),
            MonthTypeKey::new(3, 2024, "Planning"),
        ];
        keys.sort();

        assert_eq!(keys[0], MonthTypeKey::new(3, 2024, "Planning"));
        assert_eq!(keys[2], MonthTypeKey::new(4, 2024, "Review"));
    }
}
