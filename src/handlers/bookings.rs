use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::BookingRequest;
use crate::services::intake;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CreateBookingResponse {
    success: bool,
    message: String,
    id: i64,
}

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected booking payload");
        AppError::Validation(rejection.body_text())
    })?;

    let id = intake::submit_booking(&state.db, &state.notifier, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            success: true,
            message: "Booking request submitted successfully.".to_string(),
            id,
        }),
    ))
}
