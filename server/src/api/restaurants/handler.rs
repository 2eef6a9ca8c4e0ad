//! Restaurant API Handlers

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::booking::{BookingError, SearchQuery, find_available_restaurants};
use crate::core::ServerState;
use crate::db::models::RestaurantWithTables;
use crate::db::repository::restaurant;
use crate::utils::{AppError, AppResult, ok_with_message};

/// GET /api/restaurants - 获取所有餐厅及其桌台
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<RestaurantWithTables>>> {
    let restaurants = restaurant::find_all_with_tables(&state.db)
        .await
        .map_err(AppError::from)?;
    Ok(Json(restaurants))
}

/// POST /api/restaurants/search - 按团体约束搜索可预订餐厅
pub async fn search(
    State(state): State<ServerState>,
    Json(payload): Json<SearchQuery>,
) -> Result<Response, BookingError> {
    payload.validate()?;

    let matches = find_available_restaurants(&state.db, &payload).await?;

    // No match is a successful, empty answer
    if matches.is_empty() {
        return Ok(ok_with_message(matches, "No restaurants found").into_response());
    }
    Ok(Json(matches).into_response())
}
