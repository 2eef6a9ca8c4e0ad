//! Reservation Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::Eater;

/// Reservation entity — immutable once created, deleted by id
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub table_id: Uuid,
    pub owner_id: Uuid,
    /// Occupancy window start (UTC)
    pub start_time: DateTime<Utc>,
    /// Occupancy window end (UTC), defaults to start + 2h
    pub end_time: DateTime<Utc>,
    pub additional_guests: i64,
}

/// New reservation record, produced only by the admission orchestrator
#[derive(Debug, Clone)]
pub struct ReservationCreate {
    pub table_id: Uuid,
    pub owner_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub additional_guests: i64,
}

/// Reservation with resolved invitee eater objects
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetail {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub invitees: Vec<Eater>,
}

impl ReservationDetail {
    /// Every party member of this reservation: owner plus invitees
    pub fn party_member_ids(&self) -> Vec<Uuid> {
        let mut ids = vec![self.reservation.owner_id];
        ids.extend(self.invitees.iter().map(|e| e.id));
        ids
    }
}
