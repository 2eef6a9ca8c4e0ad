//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`eaters`] - 食客查询接口
//! - [`restaurants`] - 餐厅查询和搜索接口
//! - [`reservations`] - 预订管理接口

pub mod health;

// Data models API
pub mod eaters;
pub mod reservations;
pub mod restaurants;

use axum::Router;

use crate::core::ServerState;

/// Assemble the full API router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(eaters::router())
        .merge(restaurants::router())
        .merge(reservations::router())
}

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
