//! Restaurant Model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::DiningTable;

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    /// Dietary-accommodation labels the restaurant claims to support,
    /// e.g. "Vegan-Friendly"
    pub endorsements: Json<Vec<String>>,
}

/// Create restaurant payload (seed / fixtures)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCreate {
    pub name: String,
    #[serde(default)]
    pub endorsements: Vec<String>,
}

/// Restaurant with its tables (list endpoint read shape)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantWithTables {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub tables: Vec<DiningTable>,
}
