//! Eater API Handlers

use axum::{Json, extract::State};
use validator::Validate;

use crate::booking::{BookingError, Party, PartyQuery, resolve_party};
use crate::core::ServerState;
use crate::db::models::Eater;
use crate::db::repository::eater;
use crate::utils::{AppError, AppResult};

/// GET /api/eaters - 获取所有食客
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Eater>>> {
    let eaters = eater::find_all(&state.db).await.map_err(AppError::from)?;
    Ok(Json(eaters))
}

/// POST /api/eaters/info - 解析一个聚餐团体 (人数 + 合并饮食限制)
pub async fn party_info(
    State(state): State<ServerState>,
    Json(payload): Json<PartyQuery>,
) -> Result<Json<Party>, BookingError> {
    payload.validate()?;

    let party = resolve_party(
        &state.db,
        payload.owner_id,
        &payload.invitees,
        payload.additional_guests,
    )
    .await?;
    Ok(Json(party))
}
