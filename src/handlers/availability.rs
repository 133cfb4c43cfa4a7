use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::AvailabilityReport;
use crate::services::availability;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub start: Option<String>,
}

// GET /api/availability?start=YYYY-MM-DD
pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityReport>, AppError> {
    let start = availability::parse_start_date(query.start.as_deref())?;

    let conn = state.db.connect()?;
    let report = availability::build_report(&conn, start, state.config.daily_booking_limit)?;

    Ok(Json(report))
}
