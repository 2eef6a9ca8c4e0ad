//! Booking Error Types
//!
//! Tagged error kinds for the reservation rule engine. Each kind carries a
//! stable machine-readable code the boundary layer serializes alongside the
//! human message; the HTTP status mapping lives here as well so handlers can
//! return `BookingError` directly.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;
use uuid::Uuid;

use crate::db::repository::RepoError;
use crate::utils::AppResponse;

/// Result type for booking operations
pub type BookingResult<T> = Result<T, BookingError>;

/// Booking rule violations — terminal, non-retryable
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// One or more party member ids not found
    #[error("The following user ids do not exist: {}", join_ids(.0))]
    UserNotFound(Vec<Uuid>),

    /// Requested search time is not strictly in the future
    #[error("Reservation time must be in the future.")]
    ReservationTime,

    /// Restaurant endorsements do not cover the party's merged restrictions
    #[error(
        "The following dietary restrictions are not covered by {restaurant_name}: {}",
        .uncovered.join(", ")
    )]
    DietaryRestrictionsUncovered {
        uncovered: Vec<String>,
        restaurant_name: String,
    },

    /// One or more party members already hold an overlapping reservation
    #[error(
        "The following {} a conflicting reservation: {}",
        user_phrase(.0),
        join_ids(.0)
    )]
    ConflictingReservation(Vec<Uuid>),

    /// Referenced table id does not exist
    #[error("Table not found")]
    TableNotFound,

    /// Party exceeds table capacity
    #[error(
        "This table has a maximum capacity of {capacity} guests and your party is of {total_guests}."
    )]
    TableCapacityExceeded { capacity: i64, total_guests: i64 },

    /// Requested table has a conflicting occupancy window
    #[error("This table is already reserved at this time.")]
    TableAlreadyReserved,

    /// Malformed request payload rejected at the boundary
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Store failure surfaced through a booking operation
    #[error("Database error: {0}")]
    Database(String),
}

fn join_ids(ids: &[Uuid]) -> String {
    ids.iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Singular/plural phrasing for the conflict message
fn user_phrase(ids: &[Uuid]) -> &'static str {
    if ids.len() == 1 { "user has" } else { "users have" }
}

impl BookingError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            BookingError::UserNotFound(_) => "USER_NOT_FOUND",
            BookingError::ReservationTime => "RESERVATION_TIME_ERROR",
            BookingError::DietaryRestrictionsUncovered { .. } => "DIETARY_RESTRICTIONS_ERROR",
            BookingError::ConflictingReservation(_) => "CONFLICTING_RESERVATION_ERROR",
            BookingError::TableNotFound => "TABLE_NOT_FOUND",
            BookingError::TableCapacityExceeded { .. } => "TABLE_CAPACITY_ERROR",
            BookingError::TableAlreadyReserved => "TABLE_ALREADY_RESERVED",
            BookingError::Validation(_) => "E0002",
            BookingError::Database(_) => "E9002",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            BookingError::ReservationTime
            | BookingError::DietaryRestrictionsUncovered { .. }
            | BookingError::TableCapacityExceeded { .. }
            | BookingError::Validation(_) => StatusCode::BAD_REQUEST,

            BookingError::UserNotFound(_) | BookingError::TableNotFound => StatusCode::NOT_FOUND,

            BookingError::ConflictingReservation(_) | BookingError::TableAlreadyReserved => {
                StatusCode::CONFLICT
            }

            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let message = match &self {
            BookingError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                "Database error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(AppResponse::<()> {
            code: self.code().to_string(),
            message,
            data: None,
        });

        (self.status(), body).into_response()
    }
}

impl From<RepoError> for BookingError {
    fn from(err: RepoError) -> Self {
        BookingError::Database(err.to_string())
    }
}

impl From<validator::ValidationErrors> for BookingError {
    fn from(err: validator::ValidationErrors) -> Self {
        BookingError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_message_pluralizes() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let one = BookingError::ConflictingReservation(vec![a]);
        assert_eq!(
            one.to_string(),
            format!("The following user has a conflicting reservation: {a}")
        );

        let two = BookingError::ConflictingReservation(vec![a, b]);
        assert_eq!(
            two.to_string(),
            format!("The following users have a conflicting reservation: {a}, {b}")
        );
    }

    #[test]
    fn dietary_message_lists_uncovered() {
        let err = BookingError::DietaryRestrictionsUncovered {
            uncovered: vec!["Gluten-Free".into()],
            restaurant_name: "Paleo Heaven".into(),
        };
        assert_eq!(
            err.to_string(),
            "The following dietary restrictions are not covered by Paleo Heaven: Gluten-Free"
        );
        assert_eq!(err.code(), "DIETARY_RESTRICTIONS_ERROR");
    }

    #[test]
    fn capacity_message_reports_both_sizes() {
        let err = BookingError::TableCapacityExceeded {
            capacity: 4,
            total_guests: 6,
        };
        assert_eq!(
            err.to_string(),
            "This table has a maximum capacity of 4 guests and your party is of 6."
        );
    }
}
