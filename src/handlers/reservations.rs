use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::db::queries;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ReservationResponse {
    id: i64,
    name: String,
    phone: String,
    email: String,
    guests: String,
    baby_seats: String,
    date: String,
    time: String,
}

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/reservations
pub async fn list_reservations(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let reservations = {
        let db = state.db.lock().unwrap();
        queries::list_reservations(&db)?
    };

    let response: Vec<ReservationResponse> = reservations
        .into_iter()
        .map(|r| ReservationResponse {
            id: r.id,
            name: r.name,
            phone: r.phone,
            email: r.email,
            guests: r.guests,
            baby_seats: r.baby_seats,
            date: r.date,
            time: r.time,
        })
        .collect();

    Ok(Json(response))
}
