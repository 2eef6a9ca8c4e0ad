//! Eater Repository

use sqlx::types::Json;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use super::RepoResult;
use crate::db::models::{Eater, EaterCreate};

/// Find all eaters
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Eater>> {
    let eaters: Vec<Eater> =
        sqlx::query_as("SELECT id, name, dietary_restrictions FROM eater ORDER BY name")
            .fetch_all(pool)
            .await?;
    Ok(eaters)
}

/// Batched lookup by id — returns only the eaters that exist
pub async fn find_by_ids(pool: &SqlitePool, ids: &[Uuid]) -> RepoResult<Vec<Eater>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut qb: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT id, name, dietary_restrictions FROM eater WHERE id IN (");
    let mut sep = qb.separated(", ");
    for id in ids {
        sep.push_bind(*id);
    }
    qb.push(")");

    let eaters: Vec<Eater> = qb.build_query_as().fetch_all(pool).await?;
    Ok(eaters)
}

/// Create a new eater
pub async fn create(pool: &SqlitePool, data: EaterCreate) -> RepoResult<Eater> {
    let eater = Eater {
        id: Uuid::new_v4(),
        name: data.name,
        dietary_restrictions: Json(data.dietary_restrictions),
    };

    sqlx::query("INSERT INTO eater (id, name, dietary_restrictions) VALUES (?, ?, ?)")
        .bind(eater.id)
        .bind(&eater.name)
        .bind(&eater.dietary_restrictions)
        .execute(pool)
        .await?;

    Ok(eater)
}
