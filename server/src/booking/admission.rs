//! Reservation Admission Orchestrator
//!
//! The linear gate sequence a new booking must pass before being persisted:
//! party resolution → party availability → table capacity → table time
//! availability → dietary coverage → write. The first failing gate aborts the
//! whole operation; nothing before the final write mutates the store, so no
//! compensation is ever needed.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use super::availability::{check_party_availability, check_table_availability};
use super::error::{BookingError, BookingResult};
use super::party::resolve_party;
use crate::db::models::{ReservationCreate, ReservationDetail};
use crate::db::repository::{dining_table, reservation};
use crate::utils::time::default_end_time;

/// Create reservation request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub start_time: DateTime<Utc>,
    /// Defaults to `start_time + 2h` when omitted
    pub end_time: Option<DateTime<Utc>>,
    pub owner_id: Uuid,
    #[serde(default)]
    pub invitees: Vec<Uuid>,
    #[validate(range(min = 0))]
    pub additional_guests: i64,
    pub table_id: Uuid,
}

/// Admit and persist a new reservation
///
/// There is no transaction spanning the checks and the write: two concurrent
/// requests for the same table and time can both pass and both persist.
pub async fn create_reservation(
    pool: &SqlitePool,
    request: &CreateReservationRequest,
) -> BookingResult<ReservationDetail> {
    // 1. Resolve party
    let party = resolve_party(
        pool,
        request.owner_id,
        &request.invitees,
        request.additional_guests,
    )
    .await?;

    // 2. No party member may already be booked at this time, on any table
    check_party_availability(pool, request.start_time, &party.party_ids).await?;

    // 3. The table must exist and seat the whole party
    let details = dining_table::find_by_id_detailed(pool, request.table_id)
        .await?
        .ok_or(BookingError::TableNotFound)?;

    if details.table.capacity < party.total_guests {
        return Err(BookingError::TableCapacityExceeded {
            capacity: details.table.capacity,
            total_guests: party.total_guests,
        });
    }

    // 4. The table itself must be free at this time
    check_table_availability(request.start_time, &details.reservations)?;

    // 5. The restaurant must cover every restriction in the party
    let uncovered: Vec<String> = party
        .dietary_restrictions
        .iter()
        .filter(|r| !details.restaurant.endorsements.0.contains(r))
        .cloned()
        .collect();
    if !uncovered.is_empty() {
        return Err(BookingError::DietaryRestrictionsUncovered {
            uncovered,
            restaurant_name: details.restaurant.name,
        });
    }

    // 6. Persist — reservation plus invitee set in one transaction
    let end_time = request
        .end_time
        .unwrap_or_else(|| default_end_time(request.start_time));

    let invitee_ids: Vec<Uuid> = party
        .party_ids
        .iter()
        .copied()
        .filter(|id| *id != request.owner_id)
        .collect();

    let created = reservation::create(
        pool,
        ReservationCreate {
            table_id: request.table_id,
            owner_id: request.owner_id,
            start_time: request.start_time,
            end_time,
            additional_guests: request.additional_guests,
        },
        &invitee_ids,
    )
    .await?;

    tracing::info!(
        reservation_id = %created.reservation.id,
        table_id = %request.table_id,
        total_guests = party.total_guests,
        "Reservation created"
    );
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{DiningTableCreate, EaterCreate, RestaurantCreate};
    use crate::db::repository::{eater, restaurant};
    use crate::db::test_pool;

    struct Fixture {
        pool: SqlitePool,
        table_id: Uuid,
    }

    /// One restaurant with the given endorsements and a single table
    async fn fixture(endorsements: &[&str], capacity: i64) -> Fixture {
        let pool = test_pool().await;
        let r = restaurant::create(
            &pool,
            RestaurantCreate {
                name: "Paleo Heaven".into(),
                endorsements: endorsements.iter().map(|s| s.to_string()).collect(),
            },
        )
        .await
        .unwrap();
        let table = dining_table::create(
            &pool,
            DiningTableCreate {
                restaurant_id: r.id,
                capacity,
            },
        )
        .await
        .unwrap();
        Fixture {
            pool,
            table_id: table.id,
        }
    }

    async fn insert_eater(pool: &SqlitePool, name: &str, restrictions: &[&str]) -> Uuid {
        eater::create(
            pool,
            EaterCreate {
                name: name.into(),
                dietary_restrictions: restrictions.iter().map(|s| s.to_string()).collect(),
            },
        )
        .await
        .unwrap()
        .id
    }

    fn request(owner: Uuid, invitees: Vec<Uuid>, table_id: Uuid) -> CreateReservationRequest {
        CreateReservationRequest {
            start_time: "2026-10-03T20:30:00Z".parse().unwrap(),
            end_time: None,
            owner_id: owner,
            invitees,
            additional_guests: 0,
            table_id,
        }
    }

    #[tokio::test]
    async fn successful_reservation_returns_invitee_objects() {
        let fx = fixture(&["Paleo"], 6).await;
        let josh = insert_eater(&fx.pool, "Josh", &["Paleo"]).await;
        let drake = insert_eater(&fx.pool, "Drake", &["Paleo"]).await;

        let created = create_reservation(&fx.pool, &request(josh, vec![drake], fx.table_id))
            .await
            .unwrap();

        assert_eq!(created.reservation.table_id, fx.table_id);
        assert_eq!(created.reservation.owner_id, josh);
        assert_eq!(created.invitees.len(), 1);
        assert_eq!(created.invitees[0].id, drake);
        assert_eq!(created.invitees[0].name, "Drake");
    }

    #[tokio::test]
    async fn end_time_defaults_to_two_hours() {
        let fx = fixture(&[], 4).await;
        let eve = insert_eater(&fx.pool, "Eve", &[]).await;

        let created = create_reservation(&fx.pool, &request(eve, vec![], fx.table_id))
            .await
            .unwrap();

        assert_eq!(
            created.reservation.end_time,
            "2026-10-03T22:30:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[tokio::test]
    async fn explicit_end_time_is_kept() {
        let fx = fixture(&[], 4).await;
        let eve = insert_eater(&fx.pool, "Eve", &[]).await;

        let mut req = request(eve, vec![], fx.table_id);
        req.end_time = Some("2026-10-03T21:00:00Z".parse().unwrap());
        let created = create_reservation(&fx.pool, &req).await.unwrap();
        assert_eq!(
            created.reservation.end_time,
            "2026-10-03T21:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[tokio::test]
    async fn uncovered_restriction_is_rejected() {
        let fx = fixture(&["Paleo"], 4).await;
        let bob = insert_eater(&fx.pool, "Bob", &["Gluten-Free"]).await;

        let err = create_reservation(&fx.pool, &request(bob, vec![], fx.table_id))
            .await
            .unwrap_err();
        match err {
            BookingError::DietaryRestrictionsUncovered {
                uncovered,
                restaurant_name,
            } => {
                assert_eq!(uncovered, vec!["Gluten-Free".to_string()]);
                assert_eq!(restaurant_name, "Paleo Heaven");
            }
            other => panic!("expected DietaryRestrictionsUncovered, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn capacity_gate_fails_over_and_passes_at_equality() {
        let fx = fixture(&[], 2).await;
        let a = insert_eater(&fx.pool, "A", &[]).await;
        let b = insert_eater(&fx.pool, "B", &[]).await;
        let c = insert_eater(&fx.pool, "C", &[]).await;

        // Party of 3 on a 2-top
        let err = create_reservation(&fx.pool, &request(a, vec![b, c], fx.table_id))
            .await
            .unwrap_err();
        match err {
            BookingError::TableCapacityExceeded {
                capacity,
                total_guests,
            } => {
                assert_eq!(capacity, 2);
                assert_eq!(total_guests, 3);
            }
            other => panic!("expected TableCapacityExceeded, got {other:?}"),
        }

        // Party of exactly 2 succeeds
        create_reservation(&fx.pool, &request(a, vec![b], fx.table_id))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn additional_guests_count_against_capacity() {
        let fx = fixture(&[], 4).await;
        let eve = insert_eater(&fx.pool, "Eve", &[]).await;

        let mut req = request(eve, vec![], fx.table_id);
        req.additional_guests = 4; // 1 member + 4 = 5 > 4
        let err = create_reservation(&fx.pool, &req).await.unwrap_err();
        assert!(matches!(err, BookingError::TableCapacityExceeded { .. }));
    }

    #[tokio::test]
    async fn unknown_table_is_rejected() {
        let fx = fixture(&[], 4).await;
        let eve = insert_eater(&fx.pool, "Eve", &[]).await;

        let mut req = request(eve, vec![], fx.table_id);
        req.table_id = Uuid::new_v4();
        let err = create_reservation(&fx.pool, &req).await.unwrap_err();
        assert!(matches!(err, BookingError::TableNotFound));
    }

    #[tokio::test]
    async fn table_occupied_at_start_is_rejected() {
        let fx = fixture(&[], 4).await;
        let eve = insert_eater(&fx.pool, "Eve", &[]).await;
        let hank = insert_eater(&fx.pool, "Hank", &[]).await;

        create_reservation(&fx.pool, &request(eve, vec![], fx.table_id))
            .await
            .unwrap();

        // Different party, same table: start falls inside the 2h window
        let mut req = request(hank, vec![], fx.table_id);
        req.start_time = "2026-10-03T21:30:00Z".parse().unwrap();
        let err = create_reservation(&fx.pool, &req).await.unwrap_err();
        assert!(matches!(err, BookingError::TableAlreadyReserved));
    }

    #[tokio::test]
    async fn member_with_overlapping_reservation_conflicts_on_any_table() {
        let fx = fixture(&[], 4).await;
        let other_table = {
            let r = restaurant::create(
                &fx.pool,
                RestaurantCreate {
                    name: "Mixed Grill".into(),
                    endorsements: vec![],
                },
            )
            .await
            .unwrap();
            dining_table::create(
                &fx.pool,
                DiningTableCreate {
                    restaurant_id: r.id,
                    capacity: 4,
                },
            )
            .await
            .unwrap()
            .id
        };

        let bob = insert_eater(&fx.pool, "Bob", &[]).await;
        let grace = insert_eater(&fx.pool, "Grace", &[]).await;

        // Bob owns a 19:30-21:30 reservation on table one
        let mut first = request(bob, vec![], fx.table_id);
        first.start_time = "2026-07-03T19:30:00Z".parse().unwrap();
        create_reservation(&fx.pool, &first).await.unwrap();

        // Grace invites Bob at 20:30 on a different table — Bob conflicts
        let mut second = request(grace, vec![bob], other_table);
        second.start_time = "2026-07-03T20:30:00Z".parse().unwrap();
        let err = create_reservation(&fx.pool, &second).await.unwrap_err();
        match err {
            BookingError::ConflictingReservation(ids) => assert_eq!(ids, vec![bob]),
            other => panic!("expected ConflictingReservation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn conflict_lists_every_busy_member() {
        let fx = fixture(&[], 6).await;
        let a = insert_eater(&fx.pool, "A", &[]).await;
        let b = insert_eater(&fx.pool, "B", &[]).await;
        let c = insert_eater(&fx.pool, "C", &[]).await;

        // A and B share an existing reservation
        create_reservation(&fx.pool, &request(a, vec![b], fx.table_id))
            .await
            .unwrap();

        // C books and invites both — both are reported, C is not
        let second_table = dining_table::create(
            &fx.pool,
            DiningTableCreate {
                restaurant_id: dining_table::find_by_id_detailed(&fx.pool, fx.table_id)
                    .await
                    .unwrap()
                    .unwrap()
                    .restaurant
                    .id,
                capacity: 6,
            },
        )
        .await
        .unwrap()
        .id;

        let err = create_reservation(&fx.pool, &request(c, vec![a, b], second_table))
            .await
            .unwrap_err();
        match err {
            BookingError::ConflictingReservation(ids) => assert_eq!(ids, vec![a, b]),
            other => panic!("expected ConflictingReservation, got {other:?}"),
        }
    }
}
