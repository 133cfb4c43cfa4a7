use serde::Serialize;

/// Availability view over a date window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AvailabilityReport {
    /// Datetime of every non-cancelled booking in the window, in insertion order.
    pub booked_slots: Vec<String>,
    /// `YYYY-MM-DD` dates whose booking count reached the daily limit, ascending.
    pub fully_booked_dates: Vec<String>,
}
