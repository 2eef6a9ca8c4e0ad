//! Reservation Repository
//!
//! Reservations are append-only: created once (with their invitee set, in a
//! single transaction) and deleted by id. No update path exists.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use super::{RepoError, RepoResult, eater};
use crate::db::models::{Eater, Reservation, ReservationCreate, ReservationDetail};

const SELECT_RESERVATION: &str =
    "SELECT id, table_id, owner_id, start_time, end_time, additional_guests FROM reservation";

/// Invitee join row: reservation id + eater columns
#[derive(FromRow)]
struct InviteeRow {
    reservation_id: Uuid,
    id: Uuid,
    name: String,
    dietary_restrictions: Json<Vec<String>>,
}

impl InviteeRow {
    fn into_parts(self) -> (Uuid, Eater) {
        (
            self.reservation_id,
            Eater {
                id: self.id,
                name: self.name,
                dietary_restrictions: self.dietary_restrictions,
            },
        )
    }
}

/// Load invitee eaters for a set of reservations, grouped by reservation id
async fn invitees_for(
    pool: &SqlitePool,
    reservation_ids: &[Uuid],
) -> RepoResult<HashMap<Uuid, Vec<Eater>>> {
    if reservation_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT ri.reservation_id, e.id, e.name, e.dietary_restrictions \
         FROM reservation_invitee ri \
         JOIN eater e ON e.id = ri.eater_id \
         WHERE ri.reservation_id IN (",
    );
    let mut sep = qb.separated(", ");
    for id in reservation_ids {
        sep.push_bind(*id);
    }
    qb.push(") ORDER BY e.name");

    let rows: Vec<InviteeRow> = qb.build_query_as().fetch_all(pool).await?;

    let mut grouped: HashMap<Uuid, Vec<Eater>> = HashMap::new();
    for row in rows {
        let (reservation_id, eater) = row.into_parts();
        grouped.entry(reservation_id).or_default().push(eater);
    }
    Ok(grouped)
}

fn attach_invitees(
    reservations: Vec<Reservation>,
    mut invitees: HashMap<Uuid, Vec<Eater>>,
) -> Vec<ReservationDetail> {
    reservations
        .into_iter()
        .map(|reservation| {
            let invitees = invitees.remove(&reservation.id).unwrap_or_default();
            ReservationDetail {
                reservation,
                invitees,
            }
        })
        .collect()
}

/// Find all reservations with their invitee eater objects
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<ReservationDetail>> {
    let reservations: Vec<Reservation> =
        sqlx::query_as(&format!("{SELECT_RESERVATION} ORDER BY start_time"))
            .fetch_all(pool)
            .await?;

    let ids: Vec<Uuid> = reservations.iter().map(|r| r.id).collect();
    let invitees = invitees_for(pool, &ids).await?;
    Ok(attach_invitees(reservations, invitees))
}

/// Find a reservation by id with invitees, or None
pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> RepoResult<Option<ReservationDetail>> {
    let reservation: Option<Reservation> =
        sqlx::query_as(&format!("{SELECT_RESERVATION} WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;

    let Some(reservation) = reservation else {
        return Ok(None);
    };

    let mut invitees = invitees_for(pool, &[reservation.id]).await?;
    let invitees = invitees.remove(&reservation.id).unwrap_or_default();
    Ok(Some(ReservationDetail {
        reservation,
        invitees,
    }))
}

/// Raw reservations attached to a table (no invitee detail)
pub async fn find_by_table(pool: &SqlitePool, table_id: Uuid) -> RepoResult<Vec<Reservation>> {
    let reservations: Vec<Reservation> =
        sqlx::query_as(&format!("{SELECT_RESERVATION} WHERE table_id = ? ORDER BY start_time"))
            .bind(table_id)
            .fetch_all(pool)
            .await?;
    Ok(reservations)
}

/// Find reservations whose occupancy window contains `time` (inclusive both
/// ends) and whose owner or invitee set intersects `party_ids`, across all
/// tables
pub async fn find_conflicting_for_party(
    pool: &SqlitePool,
    time: DateTime<Utc>,
    party_ids: &[Uuid],
) -> RepoResult<Vec<ReservationDetail>> {
    if party_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT DISTINCT r.id, r.table_id, r.owner_id, r.start_time, r.end_time, \
         r.additional_guests \
         FROM reservation r \
         LEFT JOIN reservation_invitee ri ON ri.reservation_id = r.id \
         WHERE r.start_time <= ",
    );
    qb.push_bind(time);
    qb.push(" AND ");
    qb.push_bind(time);
    qb.push(" <= r.end_time AND (r.owner_id IN (");
    {
        let mut sep = qb.separated(", ");
        for id in party_ids {
            sep.push_bind(*id);
        }
    }
    qb.push(") OR ri.eater_id IN (");
    {
        let mut sep = qb.separated(", ");
        for id in party_ids {
            sep.push_bind(*id);
        }
    }
    qb.push("))");

    let reservations: Vec<Reservation> = qb.build_query_as().fetch_all(pool).await?;

    let ids: Vec<Uuid> = reservations.iter().map(|r| r.id).collect();
    let invitees = invitees_for(pool, &ids).await?;
    Ok(attach_invitees(reservations, invitees))
}

/// Create a reservation with its invitee set in one transaction
pub async fn create(
    pool: &SqlitePool,
    data: ReservationCreate,
    invitee_ids: &[Uuid],
) -> RepoResult<ReservationDetail> {
    let reservation = Reservation {
        id: Uuid::new_v4(),
        table_id: data.table_id,
        owner_id: data.owner_id,
        start_time: data.start_time,
        end_time: data.end_time,
        additional_guests: data.additional_guests,
    };

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO reservation (id, table_id, owner_id, start_time, end_time, additional_guests) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(reservation.id)
    .bind(reservation.table_id)
    .bind(reservation.owner_id)
    .bind(reservation.start_time)
    .bind(reservation.end_time)
    .bind(reservation.additional_guests)
    .execute(&mut *tx)
    .await?;

    for eater_id in invitee_ids {
        sqlx::query("INSERT INTO reservation_invitee (reservation_id, eater_id) VALUES (?, ?)")
            .bind(reservation.id)
            .bind(*eater_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    let invitees = eater::find_by_ids(pool, invitee_ids).await?;
    Ok(ReservationDetail {
        reservation,
        invitees,
    })
}

/// Delete a reservation by id, returning the deleted record
///
/// Invitee rows go with it (ON DELETE CASCADE).
pub async fn delete(pool: &SqlitePool, id: Uuid) -> RepoResult<ReservationDetail> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))?;

    sqlx::query("DELETE FROM reservation WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(existing)
}
