use chrono::{Duration, Local, NaiveDate};
use rusqlite::Connection;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::AvailabilityReport;

/// Length of the reporting window. The window covers `start..=start + 30 days`.
pub const WINDOW_DAYS: i64 = 30;

/// Parses an optional `YYYY-MM-DD` start date, defaulting to today.
pub fn parse_start_date(start: Option<&str>) -> Result<NaiveDate, AppError> {
    match start {
        None => Ok(Local::now().date_naive()),
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
            AppError::Validation(format!(
                "Invalid start date '{raw}', expected format YYYY-MM-DD"
            ))
        }),
    }
}

pub fn window_end(start: NaiveDate) -> NaiveDate {
    start
        .checked_add_signed(Duration::days(WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

pub fn build_report(
    conn: &Connection,
    start: NaiveDate,
    daily_limit: i64,
) -> anyhow::Result<AvailabilityReport> {
    let end = window_end(start);

    let booked_slots = queries::query_slots(conn, start, end)?;
    let fully_booked_dates = queries::query_daily_counts(conn, start, end)?
        .into_iter()
        .filter(|(_, count)| *count >= daily_limit)
        .map(|(date, _)| date.format("%Y-%m-%d").to_string())
        .collect();

    Ok(AvailabilityReport {
        booked_slots,
        fully_booked_dates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;
    use crate::models::NewBooking;

    fn setup_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        schema::create_tables(&conn).unwrap();
        conn
    }

    fn book(conn: &Connection, datetime: &str) {
        let booking = NewBooking {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            phone: None,
            datetime: datetime.to_string(),
            service: "Consult".to_string(),
            location: None,
            notes: None,
        };
        queries::insert_booking(conn, &booking).unwrap();
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_start_date() {
        assert_eq!(parse_start_date(Some("2025-01-01")).unwrap(), date("2025-01-01"));
        assert_eq!(parse_start_date(None).unwrap(), Local::now().date_naive());
    }

    #[test]
    fn test_malformed_start_date_is_validation_error() {
        for raw in ["2025-13-01", "01/02/2025", "tomorrow", ""] {
            let err = parse_start_date(Some(raw)).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_window_is_thirty_days() {
        assert_eq!(window_end(date("2025-01-01")), date("2025-01-31"));
        assert_eq!(window_end(date("2024-02-15")), date("2024-03-16"));
    }

    #[test]
    fn test_empty_window() {
        let conn = setup_db();
        let report = build_report(&conn, date("2025-01-01"), 4).unwrap();
        assert_eq!(report, AvailabilityReport::default());
    }

    #[test]
    fn test_day_at_limit_is_full() {
        let conn = setup_db();
        for time in ["09:00", "10:00", "11:00", "13:00"] {
            book(&conn, &format!("2025-01-10T{time}"));
        }
        for time in ["09:00", "10:00", "11:00"] {
            book(&conn, &format!("2025-01-12T{time}"));
        }

        let report = build_report(&conn, date("2025-01-01"), 4).unwrap();
        assert_eq!(report.fully_booked_dates, vec!["2025-01-10"]);
        assert_eq!(report.booked_slots.len(), 7);
    }

    #[test]
    fn test_full_dates_are_sorted_and_unique() {
        let conn = setup_db();
        for day in ["2025-01-20", "2025-01-05", "2025-01-20", "2025-01-05"] {
            book(&conn, &format!("{day}T09:00"));
        }

        let report = build_report(&conn, date("2025-01-01"), 2).unwrap();
        assert_eq!(report.fully_booked_dates, vec!["2025-01-05", "2025-01-20"]);
    }

    #[test]
    fn test_window_edges() {
        let conn = setup_db();
        book(&conn, "2024-12-31T09:00");
        book(&conn, "2025-01-01T09:00");
        book(&conn, "2025-01-31T23:30");
        book(&conn, "2025-02-01T00:00");

        let report = build_report(&conn, date("2025-01-01"), 4).unwrap();
        assert_eq!(
            report.booked_slots,
            vec!["2025-01-01T09:00", "2025-01-31T23:30"]
        );
    }

    #[test]
    fn test_over_limit_day_still_accepts_bookings() {
        let conn = setup_db();
        for _ in 0..6 {
            book(&conn, "2025-01-10T09:00");
        }
        let report = build_report(&conn, date("2025-01-01"), 4).unwrap();
        assert_eq!(report.fully_booked_dates, vec!["2025-01-10"]);
        assert_eq!(report.booked_slots.len(), 6);
    }
}
