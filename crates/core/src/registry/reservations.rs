//! Reservation registry and the two composite operations
//!
//! Creating or cancelling a reservation changes two collections. Both are
//! changed in memory first, then hotels are written, then reservations. If
//! the hotel write fails, memory is rolled back. If the reservation write
//! fails, memory is rolled back and the hotel file is written again so the
//! two files never disagree about a room.

use tracing::instrument;
use uuid::Uuid;

use super::{CustomerRegistry, HotelRegistry};
use crate::error::{Error, Result};
use crate::models::Reservation;
use crate::storage::{Collection, Storage};

#[derive(Debug)]
pub struct ReservationRegistry {
    reservations: Collection<Reservation>,
}

impl ReservationRegistry {
    pub fn open(storage: &Storage) -> Self {
        Self {
            reservations: Collection::open(storage.clone()),
        }
    }

    /// Book one room of `hotel_id` for `customer_id`.
    ///
    /// Nothing changes, in memory or on disk, unless the whole booking is
    /// stored.
    #[instrument(skip(self, customers, hotels))]
    pub fn create_reservation(
        &mut self,
        customers: &CustomerRegistry,
        hotels: &mut HotelRegistry,
        customer_id: Uuid,
        hotel_id: Uuid,
    ) -> Result<Reservation> {
        customers.require(customer_id)?;
        hotels.require(hotel_id)?;

        if let Err(e) = hotels.hold_room(hotel_id) {
            tracing::info!(%hotel_id, "Reservation refused: no rooms available");
            return Err(e);
        }

        let reservation = Reservation::new(customer_id, hotel_id);
        self.reservations.push(reservation.clone());

        let rollback = |this: &mut Self, hotels: &mut HotelRegistry| {
            this.reservations.remove(reservation.id);
            if let Err(e) = hotels.unhold_room(hotel_id) {
                tracing::error!(%hotel_id, error = %e, "Could not give back held room");
            }
        };
        self.commit(hotels, rollback)?;

        tracing::info!(
            reservation_id = %reservation.id,
            %customer_id,
            %hotel_id,
            "Reservation created"
        );
        Ok(reservation)
    }

    /// Cancel an active reservation and give its room back.
    ///
    /// A reservation whose hotel is no longer on record is still cancelled;
    /// there is no room to give back.
    #[instrument(skip(self, hotels))]
    pub fn cancel_reservation(
        &mut self,
        hotels: &mut HotelRegistry,
        reservation_id: Uuid,
    ) -> Result<Reservation> {
        let reservation = self.reservations.require(reservation_id)?;
        if !reservation.is_active() {
            return Err(Error::AlreadyCancelled(reservation_id));
        }
        let hotel_id = reservation.hotel_id;

        let released = match hotels.unhold_room(hotel_id) {
            Ok(true) => true,
            Ok(false) => {
                tracing::warn!(%hotel_id, "Hotel had no held rooms; availability left unchanged");
                false
            }
            Err(Error::NotFound { .. }) => {
                tracing::warn!(
                    %reservation_id,
                    %hotel_id,
                    "Cancelling reservation for unknown hotel"
                );
                false
            }
            Err(e) => return Err(e),
        };
        self.reservations.require_mut(reservation_id)?.cancel()?;

        let rollback = move |this: &mut Self, hotels: &mut HotelRegistry| {
            if let Ok(reservation) = this.reservations.require_mut(reservation_id) {
                reservation.reactivate();
            }
            if released {
                if let Err(e) = hotels.hold_room(hotel_id) {
                    tracing::error!(%hotel_id, error = %e, "Could not re-hold released room");
                }
            }
        };
        self.commit(hotels, rollback)?;

        tracing::info!(%reservation_id, %hotel_id, "Reservation cancelled");
        self.reservations.require(reservation_id).cloned()
    }

    /// Write hotels then reservations, undoing the in-memory change on failure
    fn commit<F>(&mut self, hotels: &mut HotelRegistry, rollback: F) -> Result<()>
    where
        F: FnOnce(&mut Self, &mut HotelRegistry),
    {
        if let Err(e) = hotels.persist() {
            rollback(self, hotels);
            return Err(e);
        }

        if let Err(e) = self.reservations.persist() {
            rollback(self, hotels);
            if let Err(undo) = hotels.persist() {
                tracing::error!(
                    error = %undo,
                    "Could not restore hotel file after failed reservation write"
                );
            }
            return Err(e);
        }

        Ok(())
    }

    pub fn show(&self, id: Uuid) -> Result<String> {
        Ok(self.reservations.require(id)?.to_string())
    }

    pub fn get(&self, id: Uuid) -> Option<&Reservation> {
        self.reservations.get(id)
    }

    pub fn require(&self, id: Uuid) -> Result<&Reservation> {
        self.reservations.require(id)
    }

    pub fn list(&self) -> &[Reservation] {
        self.reservations.as_slice()
    }

    /// Active reservations holding a room in `hotel_id`
    pub fn active_for_hotel(&self, hotel_id: Uuid) -> impl Iterator<Item = &Reservation> {
        self.reservations
            .iter()
            .filter(move |r| r.is_active() && r.hotel_id == hotel_id)
    }

    /// Active reservations made by `customer_id`
    pub fn active_for_customer(&self, customer_id: Uuid) -> impl Iterator<Item = &Reservation> {
        self.reservations
            .iter()
            .filter(move |r| r.is_active() && r.customer_id == customer_id)
    }
}
