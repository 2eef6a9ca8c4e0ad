//! Demo Data Seeder
//!
//! Wipes the database and loads the demo dataset: eaters with dietary
//! restrictions, restaurants with endorsements, and a random spread of
//! 2/4/6-top tables per restaurant.

use rand::Rng;
use sqlx::SqlitePool;

use super::repository::{self, RepoResult};
use crate::db::models::{DiningTableCreate, EaterCreate, RestaurantCreate};

const EATERS: &[(&str, &[&str])] = &[
    ("Alice", &["Vegan", "Gluten-Free"]),
    ("Bob", &["Vegetarian", "Paleo"]),
    ("Charlie", &["Paleo", "Gluten-Free"]),
    ("Diana", &["Gluten-Free"]),
    ("Eve", &[]),
    ("Frank", &["Vegan"]),
    ("Grace", &["Vegetarian"]),
    ("Hank", &["Paleo"]),
];

const RESTAURANTS: &[(&str, &[&str])] = &[
    ("Green Garden", &["Vegan-Friendly", "Gluten-Free-Options"]),
    ("Veggie Delight", &["Vegetarian-Friendly", "Paleo-Friendly"]),
    ("Paleo Palace", &["Paleo-Friendly"]),
    ("Gluten-Free Haven", &["Gluten-Free-Options"]),
    ("Mixed Grill", &[]),
    ("Cuisine Fusion", &["Vegan-Friendly", "Vegetarian-Friendly"]),
];

const TABLE_CAPACITIES: &[i64] = &[2, 4, 6];

/// Reset the database and insert the demo dataset
pub async fn seed_demo_data(pool: &SqlitePool) -> RepoResult<()> {
    // Delete all records from all tables (children first)
    sqlx::query("DELETE FROM reservation_invitee").execute(pool).await?;
    sqlx::query("DELETE FROM reservation").execute(pool).await?;
    sqlx::query("DELETE FROM dining_table").execute(pool).await?;
    sqlx::query("DELETE FROM restaurant").execute(pool).await?;
    sqlx::query("DELETE FROM eater").execute(pool).await?;

    for (name, restrictions) in EATERS {
        repository::eater::create(
            pool,
            EaterCreate {
                name: (*name).to_string(),
                dietary_restrictions: restrictions.iter().map(|s| s.to_string()).collect(),
            },
        )
        .await?;
    }

    let mut rng = rand::thread_rng();
    let mut table_count = 0usize;

    for (name, endorsements) in RESTAURANTS {
        let restaurant = repository::restaurant::create(
            pool,
            RestaurantCreate {
                name: (*name).to_string(),
                endorsements: endorsements.iter().map(|s| s.to_string()).collect(),
            },
        )
        .await?;

        // 0-5 tables of each capacity per restaurant
        for &capacity in TABLE_CAPACITIES {
            let count = rng.gen_range(0..6);
            for _ in 0..count {
                repository::dining_table::create(
                    pool,
                    DiningTableCreate {
                        restaurant_id: restaurant.id,
                        capacity,
                    },
                )
                .await?;
                table_count += 1;
            }
        }
    }

    tracing::info!(
        eaters = EATERS.len(),
        restaurants = RESTAURANTS.len(),
        tables = table_count,
        "Demo data seeded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn reseeding_replaces_instead_of_accumulating() {
        let pool = test_pool().await;
        seed_demo_data(&pool).await.unwrap();
        seed_demo_data(&pool).await.unwrap();

        let eaters = repository::eater::find_all(&pool).await.unwrap();
        assert_eq!(eaters.len(), EATERS.len());

        let restaurants = repository::restaurant::find_all(&pool).await.unwrap();
        assert_eq!(restaurants.len(), RESTAURANTS.len());
    }
}
