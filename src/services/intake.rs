use crate::db::{queries, Database};
use crate::errors::AppError;
use crate::models::BookingRequest;
use crate::services::notifier::Notifier;

/// Validates, persists and announces a booking submission. Returns the new id.
///
/// The connection lives only for the duration of the write. Notification
/// outcomes are logged and never change the result.
pub async fn submit_booking(
    db: &Database,
    notifier: &Notifier,
    request: BookingRequest,
) -> Result<i64, AppError> {
    let new_booking = request.validate()?;

    let id = {
        let conn = db.connect()?;
        queries::insert_booking(&conn, &new_booking)?
    };

    tracing::info!(id, service = %new_booking.service, datetime = %new_booking.datetime, "booking created");

    let report = notifier.notify_new_booking(id, &new_booking).await;
    tracing::debug!(id, ?report, "notification dispatch finished");

    Ok(id)
}
