//! Dining Table Model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{Reservation, Restaurant};

/// Dining table entity (桌台)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: Uuid,
    /// Owning restaurant — a table belongs to exactly one restaurant
    pub restaurant_id: Uuid,
    pub capacity: i64,
}

/// Create dining table payload (seed / fixtures)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableCreate {
    pub restaurant_id: Uuid,
    pub capacity: i64,
}

/// Table with its existing reservations (availability filtering shape)
#[derive(Debug, Clone)]
pub struct TableWithReservations {
    pub table: DiningTable,
    pub reservations: Vec<Reservation>,
}

/// Table with owning restaurant and existing reservations embedded
/// (admission check shape)
#[derive(Debug, Clone)]
pub struct TableDetails {
    pub table: DiningTable,
    pub restaurant: Restaurant,
    pub reservations: Vec<Reservation>,
}
