//! Reservation API Handlers
//!
//! Creation goes through the admission orchestrator
//! ([`crate::booking::admission`]); reservations are never written directly.

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::booking::{BookingError, CreateReservationRequest, create_reservation};
use crate::core::ServerState;
use crate::db::models::ReservationDetail;
use crate::db::repository::reservation;
use crate::utils::{AppError, AppResult};

/// GET /api/reservations - 获取所有预订
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ReservationDetail>>> {
    let reservations = reservation::find_all(&state.db)
        .await
        .map_err(AppError::from)?;
    Ok(Json(reservations))
}

/// POST /api/reservations - 创建预订 (准入检查序列)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<Json<ReservationDetail>, BookingError> {
    payload.validate()?;

    let created = create_reservation(&state.db, &payload).await?;
    Ok(Json(created))
}

/// DELETE /api/reservations/{id} - 删除预订
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ReservationDetail>> {
    let deleted = reservation::delete(&state.db, id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(deleted))
}
