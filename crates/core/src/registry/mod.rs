//! Registries - one owner per entity collection
//!
//! Each registry holds its collection in memory and writes it back after
//! every change. The reservation registry also coordinates hotel room counts.

mod customers;
mod hotels;
mod reservations;

pub use customers::CustomerRegistry;
pub use hotels::HotelRegistry;
pub use reservations::ReservationRegistry;
