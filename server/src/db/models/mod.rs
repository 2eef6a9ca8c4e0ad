//! Database Models

// People
pub mod eater;

// Venues
pub mod dining_table;
pub mod restaurant;

// Bookings
pub mod reservation;

// Re-exports
pub use dining_table::{DiningTable, DiningTableCreate, TableDetails, TableWithReservations};
pub use eater::{Eater, EaterCreate};
pub use reservation::{Reservation, ReservationCreate, ReservationDetail};
pub use restaurant::{Restaurant, RestaurantCreate, RestaurantWithTables};
