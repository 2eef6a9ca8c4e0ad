//! Dining Table Repository

use sqlx::SqlitePool;
use uuid::Uuid;

use super::{RepoResult, reservation};
use crate::db::models::{
    DiningTable, DiningTableCreate, Restaurant, TableDetails, TableWithReservations,
};

/// Find a restaurant's tables seating at least `min_capacity`, with their
/// existing reservations embedded
pub async fn find_by_restaurant_min_capacity(
    pool: &SqlitePool,
    restaurant_id: Uuid,
    min_capacity: i64,
) -> RepoResult<Vec<TableWithReservations>> {
    let tables: Vec<DiningTable> = sqlx::query_as(
        "SELECT id, restaurant_id, capacity FROM dining_table \
         WHERE restaurant_id = ? AND capacity >= ? ORDER BY capacity, id",
    )
    .bind(restaurant_id)
    .bind(min_capacity)
    .fetch_all(pool)
    .await?;

    let mut result = Vec::with_capacity(tables.len());
    for table in tables {
        let reservations = reservation::find_by_table(pool, table.id).await?;
        result.push(TableWithReservations {
            table,
            reservations,
        });
    }
    Ok(result)
}

/// Find a table by id with its owning restaurant and existing reservations
/// embedded, or None
pub async fn find_by_id_detailed(
    pool: &SqlitePool,
    id: Uuid,
) -> RepoResult<Option<TableDetails>> {
    let table: Option<DiningTable> =
        sqlx::query_as("SELECT id, restaurant_id, capacity FROM dining_table WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    let Some(table) = table else {
        return Ok(None);
    };

    let restaurant: Restaurant =
        sqlx::query_as("SELECT id, name, endorsements FROM restaurant WHERE id = ?")
            .bind(table.restaurant_id)
            .fetch_one(pool)
            .await?;

    let reservations = reservation::find_by_table(pool, table.id).await?;

    Ok(Some(TableDetails {
        table,
        restaurant,
        reservations,
    }))
}

/// Create a new dining table
pub async fn create(pool: &SqlitePool, data: DiningTableCreate) -> RepoResult<DiningTable> {
    let table = DiningTable {
        id: Uuid::new_v4(),
        restaurant_id: data.restaurant_id,
        capacity: data.capacity,
    };

    sqlx::query("INSERT INTO dining_table (id, restaurant_id, capacity) VALUES (?, ?, ?)")
        .bind(table.id)
        .bind(table.restaurant_id)
        .bind(table.capacity)
        .execute(pool)
        .await?;

    Ok(table)
}
