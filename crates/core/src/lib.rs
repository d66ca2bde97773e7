//! Lodging Core Library
//!
//! Hotel, customer and reservation registries persisted as JSON collections,
//! plus the booking desk that keeps room availability and reservations in step.

pub mod config;
pub mod desk;
pub mod error;
pub mod invariants;
pub mod models;
pub mod registry;
pub mod storage;

pub use config::Config;
pub use desk::BookingDesk;
pub use error::{EntityKind, Error, Result};
pub use models::*;
pub use registry::{CustomerRegistry, HotelRegistry, ReservationRegistry};
pub use storage::{Collection, Record, Storage};
