//! Availability Checker
//!
//! Temporal conflict detection. Two checks, both over inclusive occupancy
//! windows `[start_time, end_time]`:
//!
//! - party availability: does any member already hold a reservation whose
//!   window contains the candidate start, on any table?
//! - table availability: does the requested table already have a reservation
//!   whose window contains the candidate start?

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::error::{BookingError, BookingResult};
use crate::db::models::Reservation;
use crate::db::repository::reservation;

/// Check that no party member holds a reservation overlapping `start_time`
///
/// On conflict, fails with the deduplicated subset of `party_ids` that is
/// actually booked elsewhere, in party order.
pub async fn check_party_availability(
    pool: &SqlitePool,
    start_time: DateTime<Utc>,
    party_ids: &[Uuid],
) -> BookingResult<()> {
    let conflicts = reservation::find_conflicting_for_party(pool, start_time, party_ids).await?;
    if conflicts.is_empty() {
        return Ok(());
    }

    // Union of members across all conflicting reservations, intersected with
    // the requesting party
    let busy: HashSet<Uuid> = conflicts.iter().flat_map(|r| r.party_member_ids()).collect();
    let conflicting: Vec<Uuid> = party_ids
        .iter()
        .copied()
        .filter(|id| busy.contains(id))
        .collect();

    Err(BookingError::ConflictingReservation(conflicting))
}

/// Check that none of a table's reservations occupies `start_time`
///
/// Pure scan over the table's embedded reservations; the first hit
/// short-circuits.
pub fn check_table_availability(
    start_time: DateTime<Utc>,
    reservations: &[Reservation],
) -> BookingResult<()> {
    for existing in reservations {
        if existing.start_time <= start_time && start_time <= existing.end_time {
            return Err(BookingError::TableAlreadyReserved);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(start: &str, end: &str) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            table_id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            additional_guests: 0,
        }
    }

    #[test]
    fn table_free_when_no_reservations() {
        let t = "2026-07-03T20:30:00Z".parse().unwrap();
        assert!(check_table_availability(t, &[]).is_ok());
    }

    #[test]
    fn table_busy_inside_window() {
        let existing = reservation("2026-07-03T19:30:00Z", "2026-07-03T21:30:00Z");
        let t = "2026-07-03T20:30:00Z".parse().unwrap();
        assert!(matches!(
            check_table_availability(t, &[existing]),
            Err(BookingError::TableAlreadyReserved)
        ));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let existing = reservation("2026-07-03T19:30:00Z", "2026-07-03T21:30:00Z");

        let at_start = "2026-07-03T19:30:00Z".parse().unwrap();
        assert!(check_table_availability(at_start, &[existing.clone()]).is_err());

        let at_end = "2026-07-03T21:30:00Z".parse().unwrap();
        assert!(check_table_availability(at_end, &[existing]).is_err());
    }

    #[test]
    fn table_free_outside_window() {
        let existing = reservation("2026-07-03T19:30:00Z", "2026-07-03T21:30:00Z");

        let before = "2026-07-03T19:29:59Z".parse().unwrap();
        assert!(check_table_availability(before, &[existing.clone()]).is_ok());

        let after = "2026-07-03T21:30:01Z".parse().unwrap();
        assert!(check_table_availability(after, &[existing]).is_ok());
    }

    #[test]
    fn first_violation_short_circuits() {
        let first = reservation("2026-07-03T19:30:00Z", "2026-07-03T21:30:00Z");
        let second = reservation("2026-07-03T20:00:00Z", "2026-07-03T22:00:00Z");
        let t = "2026-07-03T20:30:00Z".parse().unwrap();

        // Both overlap; still a single TableAlreadyReserved, never an aggregate
        let err = check_table_availability(t, &[first, second]).unwrap_err();
        assert!(matches!(err, BookingError::TableAlreadyReserved));
    }
}
