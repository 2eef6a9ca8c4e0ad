//! Party Resolver
//!
//! Turns an owner + invitee list into a verified guest list: total headcount
//! and the merged set of dietary restrictions across all members.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use super::error::{BookingError, BookingResult};
use crate::db::repository::eater;

/// Party resolution request (`getEatersInfo`)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PartyQuery {
    pub owner_id: Uuid,
    #[serde(default)]
    pub invitees: Vec<Uuid>,
    #[validate(range(min = 0))]
    pub additional_guests: i64,
}

/// A resolved party: verified member ids, headcount, merged restrictions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    /// Owner first, then invitees, duplicates collapsed
    pub party_ids: Vec<Uuid>,
    /// Member count plus additional (unregistered) guests
    pub total_guests: i64,
    /// Union of every member's restrictions, deduplicated and sorted
    pub dietary_restrictions: Vec<String>,
}

/// Resolve `[owner] ++ invitees` against the eater store
///
/// Fails with [`BookingError::UserNotFound`] listing exactly the missing ids
/// when any member does not exist. Read-only.
pub async fn resolve_party(
    pool: &SqlitePool,
    owner_id: Uuid,
    invitees: &[Uuid],
    additional_guests: i64,
) -> BookingResult<Party> {
    // Owner first; duplicate ids in the request collapse here
    let mut party_ids: Vec<Uuid> = Vec::with_capacity(invitees.len() + 1);
    for id in std::iter::once(owner_id).chain(invitees.iter().copied()) {
        if !party_ids.contains(&id) {
            party_ids.push(id);
        }
    }

    let members = eater::find_by_ids(pool, &party_ids).await?;

    if members.len() < party_ids.len() {
        let found: HashSet<Uuid> = members.iter().map(|e| e.id).collect();
        let missing: Vec<Uuid> = party_ids
            .iter()
            .copied()
            .filter(|id| !found.contains(id))
            .collect();
        return Err(BookingError::UserNotFound(missing));
    }

    let total_guests = members.len() as i64 + additional_guests;

    let dietary_restrictions: Vec<String> = members
        .iter()
        .flat_map(|e| e.dietary_restrictions.0.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    Ok(Party {
        party_ids,
        total_guests,
        dietary_restrictions,
    })
}
