//! Restaurant Matcher
//!
//! Given a party's constraints and headcount, find restaurants whose
//! endorsements cover every restriction and which still have a sufficiently
//! large table free at the requested time.

use chrono::{DateTime, Utc};
use futures::future;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use super::error::{BookingError, BookingResult};
use super::party::resolve_party;
use crate::db::models::{DiningTable, Restaurant};
use crate::db::repository::dining_table;
use crate::db::repository::restaurant;

/// Restaurant search request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub owner_id: Uuid,
    #[serde(default)]
    pub invitees: Vec<Uuid>,
    #[validate(range(min = 0))]
    pub additional_guests: i64,
    pub reservation_time: DateTime<Utc>,
}

/// A matched restaurant with the tables that fit the party
/// (reservation detail stripped)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantMatch {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub tables: Vec<DiningTable>,
}

/// Whether a restaurant's endorsements cover every restriction in the set
///
/// An empty restriction set trivially passes.
pub(crate) fn covers(endorsements: &[String], restrictions: &[String]) -> bool {
    restrictions.iter().all(|r| endorsements.contains(r))
}

/// Find restaurants able to host the party at `reservation_time`
///
/// The requested time must be strictly in the future. An empty result is a
/// successful answer, not an error.
///
/// Note the table-availability rule here is *exact start equality* with an
/// existing reservation, intentionally narrower than the admission path's
/// window containment.
pub async fn find_available_restaurants(
    pool: &SqlitePool,
    query: &SearchQuery,
) -> BookingResult<Vec<RestaurantMatch>> {
    if query.reservation_time <= Utc::now() {
        return Err(BookingError::ReservationTime);
    }

    let party = resolve_party(pool, query.owner_id, &query.invitees, query.additional_guests)
        .await?;

    let restaurants = restaurant::find_all(pool).await?;
    let covering: Vec<Restaurant> = restaurants
        .into_iter()
        .filter(|r| covers(&r.endorsements.0, &party.dietary_restrictions))
        .collect();

    // Independent per-restaurant reads, issued concurrently; try_join_all
    // keeps results in restaurant order
    let table_sets = future::try_join_all(covering.iter().map(|r| {
        dining_table::find_by_restaurant_min_capacity(pool, r.id, party.total_guests)
    }))
    .await?;

    let mut matches = Vec::new();
    for (restaurant, tables) in covering.into_iter().zip(table_sets) {
        let free_tables: Vec<DiningTable> = tables
            .into_iter()
            .filter(|t| {
                !t.reservations
                    .iter()
                    .any(|existing| existing.start_time == query.reservation_time)
            })
            .map(|t| t.table)
            .collect();

        if !free_tables.is_empty() {
            matches.push(RestaurantMatch {
                restaurant,
                tables: free_tables,
            });
        }
    }

    tracing::debug!(
        matches = matches.len(),
        total_guests = party.total_guests,
        "Restaurant search evaluated"
    );
    Ok(matches)
}
