use std::collections::BTreeMap;

use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, NewBooking};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ── Bookings ──

/// Inserts a validated booking and returns its id. Status and created_at come
/// from the column defaults.
pub fn insert_booking(conn: &Connection, booking: &NewBooking) -> Result<i64, AppError> {
    conn.execute(
        "INSERT INTO bookings (name, email, phone, datetime, service, location, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            booking.name,
            booking.email,
            booking.phone,
            booking.datetime,
            booking.service,
            booking.location,
            booking.notes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_booking(conn: &Connection, id: i64) -> anyhow::Result<Option<Booking>> {
    let booking = conn
        .query_row(
            "SELECT id, name, email, phone, datetime, service, location, notes, status, created_at
             FROM bookings WHERE id = ?1",
            params![id],
            |row| Ok(parse_booking_row(row)),
        )
        .optional()?;

    booking.transpose()
}

/// Datetime of every non-cancelled booking whose date falls in `[start, end]`.
pub fn query_slots(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> anyhow::Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT datetime FROM bookings
         WHERE date(datetime) BETWEEN ?1 AND ?2
           AND status IS NOT 'cancelled'
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map(params![format_date(start), format_date(end)], |row| {
        row.get::<_, String>(0)
    })?;

    let mut slots = vec![];
    for row in rows {
        slots.push(row?);
    }
    Ok(slots)
}

/// Number of non-cancelled bookings per date in `[start, end]`. Dates without
/// bookings are absent.
pub fn query_daily_counts(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> anyhow::Result<BTreeMap<NaiveDate, i64>> {
    let mut stmt = conn.prepare(
        "SELECT date(datetime) AS booking_date, COUNT(id) AS booking_count
         FROM bookings
         WHERE date(datetime) BETWEEN ?1 AND ?2
           AND status IS NOT 'cancelled'
         GROUP BY booking_date",
    )?;

    let rows = stmt.query_map(params![format_date(start), format_date(end)], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut counts = BTreeMap::new();
    for row in rows {
        let (date_str, count) = row?;
        let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)?;
        counts.insert(date, count);
    }
    Ok(counts)
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_booking_row(row: &rusqlite::Row) -> anyhow::Result<Booking> {
    let id: i64 = row.get(0)?;
    let status: Option<String> = row.get(8)?;
    let created_at_str: Option<String> = row.get(9)?;

    let created_at_str =
        created_at_str.with_context(|| format!("booking {id} has no created_at"))?;
    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
        .with_context(|| format!("booking {id} has malformed created_at: {created_at_str}"))?;

    Ok(Booking {
        id,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        datetime: row.get(4)?,
        service: row.get(5)?,
        location: row.get(6)?,
        notes: row.get(7)?,
        status: status
            .map(|s| BookingStatus::parse(&s))
            .unwrap_or(BookingStatus::Pending),
        created_at,
    })
}
