//! Restaurant Repository

use std::collections::HashMap;

use sqlx::SqlitePool;
use sqlx::types::Json;
use uuid::Uuid;

use super::RepoResult;
use crate::db::models::{DiningTable, Restaurant, RestaurantCreate, RestaurantWithTables};

/// Find all restaurants
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Restaurant>> {
    let restaurants: Vec<Restaurant> =
        sqlx::query_as("SELECT id, name, endorsements FROM restaurant ORDER BY name")
            .fetch_all(pool)
            .await?;
    Ok(restaurants)
}

/// Find all restaurants with their tables attached
pub async fn find_all_with_tables(pool: &SqlitePool) -> RepoResult<Vec<RestaurantWithTables>> {
    let restaurants = find_all(pool).await?;

    let tables: Vec<DiningTable> = sqlx::query_as(
        "SELECT id, restaurant_id, capacity FROM dining_table ORDER BY capacity, id",
    )
    .fetch_all(pool)
    .await?;

    let mut by_restaurant: HashMap<Uuid, Vec<DiningTable>> = HashMap::new();
    for table in tables {
        by_restaurant.entry(table.restaurant_id).or_default().push(table);
    }

    Ok(restaurants
        .into_iter()
        .map(|restaurant| {
            let tables = by_restaurant.remove(&restaurant.id).unwrap_or_default();
            RestaurantWithTables { restaurant, tables }
        })
        .collect())
}

/// Create a new restaurant
pub async fn create(pool: &SqlitePool, data: RestaurantCreate) -> RepoResult<Restaurant> {
    let restaurant = Restaurant {
        id: Uuid::new_v4(),
        name: data.name,
        endorsements: Json(data.endorsements),
    };

    sqlx::query("INSERT INTO restaurant (id, name, endorsements) VALUES (?, ?, ?)")
        .bind(restaurant.id)
        .bind(&restaurant.name)
        .bind(&restaurant.endorsements)
        .execute(pool)
        .await?;

    Ok(restaurant)
}
