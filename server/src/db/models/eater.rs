//! Eater Model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// Eater entity (食客) — a diner who can own or be invited to a reservation
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Eater {
    pub id: Uuid,
    pub name: String,
    /// Dietary restriction labels, e.g. "Gluten-Free"
    pub dietary_restrictions: Json<Vec<String>>,
}

/// Create eater payload (seed / fixtures)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EaterCreate {
    pub name: String,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}
