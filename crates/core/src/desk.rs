//! Booking desk - the workflow facade
//!
//! Owns the three registries and sequences them for composite operations.
//! Deleting a hotel or customer that an active reservation still points at
//! is refused; cancelled reservations do not block deletion.

use std::path::Path;

use tracing::instrument;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{EntityKind, Error, Result};
use crate::invariants::{assert_hotel_invariants, find_dangling_references};
use crate::models::{Customer, CustomerUpdate, Hotel, HotelUpdate, Reservation};
use crate::registry::{CustomerRegistry, HotelRegistry, ReservationRegistry};
use crate::storage::{Storage, ALL_COLLECTIONS};

pub struct BookingDesk {
    storage: Storage,
    hotels: HotelRegistry,
    customers: CustomerRegistry,
    reservations: ReservationRegistry,
}

impl BookingDesk {
    /// Open the desk on the configured data directory
    pub fn open(config: &Config) -> Result<Self> {
        Self::open_at(&config.data_dir)
    }

    /// Open the desk on `data_dir`, creating empty collection files as needed
    #[instrument(skip(data_dir), fields(data_dir = %data_dir.as_ref().display()))]
    pub fn open_at<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let storage = Storage::open(data_dir)?;
        storage.ensure_collections(&ALL_COLLECTIONS)?;

        let desk = Self {
            hotels: HotelRegistry::open(&storage),
            customers: CustomerRegistry::open(&storage),
            reservations: ReservationRegistry::open(&storage),
            storage,
        };
        for dangling in
            find_dangling_references(desk.reservations.list(), &desk.hotels, &desk.customers)
        {
            tracing::warn!(
                reservation_id = %dangling.reservation_id,
                kind = %dangling.kind,
                missing_id = %dangling.missing_id,
                "Active reservation references a missing record"
            );
        }
        tracing::info!(
            hotels = desk.hotels.list().len(),
            customers = desk.customers.list().len(),
            reservations = desk.reservations.list().len(),
            "Booking desk opened"
        );
        Ok(desk)
    }

    pub fn data_dir(&self) -> &Path {
        self.storage.root()
    }

    pub fn hotels(&self) -> &HotelRegistry {
        &self.hotels
    }

    pub fn customers(&self) -> &CustomerRegistry {
        &self.customers
    }

    pub fn reservations(&self) -> &ReservationRegistry {
        &self.reservations
    }

    // Hotels

    pub fn create_hotel(&mut self, name: &str, location: &str, total_rooms: i64) -> Result<Hotel> {
        self.hotels.create(name, location, total_rooms)
    }

    pub fn update_hotel(&mut self, id: Uuid, update: HotelUpdate) -> Result<Hotel> {
        self.hotels.update(id, update)
    }

    pub fn show_hotel(&self, id: Uuid) -> Result<String> {
        self.hotels.show(id)
    }

    /// Delete a hotel with no active reservations
    pub fn delete_hotel(&mut self, id: Uuid) -> Result<Hotel> {
        self.hotels.require(id)?;
        let count = self.reservations.active_for_hotel(id).count();
        if count > 0 {
            return Err(Error::Referenced {
                kind: EntityKind::Hotel,
                id,
                count,
            });
        }
        self.hotels.delete(id)
    }

    // Customers

    pub fn create_customer(&mut self, name: &str, email: &str, phone: &str) -> Result<Customer> {
        self.customers.create(name, email, phone)
    }

    pub fn update_customer(&mut self, id: Uuid, update: CustomerUpdate) -> Result<Customer> {
        self.customers.update(id, update)
    }

    pub fn show_customer(&self, id: Uuid) -> Result<String> {
        self.customers.show(id)
    }

    /// Delete a customer with no active reservations
    pub fn delete_customer(&mut self, id: Uuid) -> Result<Customer> {
        self.customers.require(id)?;
        let count = self.reservations.active_for_customer(id).count();
        if count > 0 {
            return Err(Error::Referenced {
                kind: EntityKind::Customer,
                id,
                count,
            });
        }
        self.customers.delete(id)
    }

    // Reservations

    pub fn make_reservation(&mut self, customer_id: Uuid, hotel_id: Uuid) -> Result<Reservation> {
        let reservation = self.reservations.create_reservation(
            &self.customers,
            &mut self.hotels,
            customer_id,
            hotel_id,
        )?;
        self.check_consistency(hotel_id);
        Ok(reservation)
    }

    pub fn cancel_reservation(&mut self, reservation_id: Uuid) -> Result<Reservation> {
        let reservation = self
            .reservations
            .cancel_reservation(&mut self.hotels, reservation_id)?;
        self.check_consistency(reservation.hotel_id);
        Ok(reservation)
    }

    pub fn show_reservation(&self, id: Uuid) -> Result<String> {
        self.reservations.show(id)
    }

    fn check_consistency(&self, hotel_id: Uuid) {
        if let Some(hotel) = self.hotels.get(hotel_id) {
            assert_hotel_invariants(hotel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_collection_files() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("data");
        let desk = BookingDesk::open_at(&data_dir).unwrap();

        assert_eq!(desk.data_dir(), data_dir.as_path());
        for name in ["hotels", "customers", "reservations"] {
            assert!(data_dir.join(format!("{}.json", name)).exists());
        }
    }

    #[test]
    fn test_open_from_config() {
        let dir = tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().join("store"),
            ..Default::default()
        };
        let mut desk = BookingDesk::open(&config).unwrap();
        desk.create_hotel("Plaza", "NYC", 1).unwrap();

        let reopened = BookingDesk::open(&config).unwrap();
        assert_eq!(reopened.hotels().list().len(), 1);
    }

    #[test]
    fn test_delete_hotel_with_active_reservation_is_rejected() {
        let dir = tempdir().unwrap();
        let mut desk = BookingDesk::open_at(dir.path()).unwrap();
        let hotel = desk.create_hotel("Plaza", "NYC", 2).unwrap();
        let customer = desk.create_customer("Ana", "a@x.com", "555").unwrap();
        let reservation = desk.make_reservation(customer.id, hotel.id).unwrap();

        let result = desk.delete_hotel(hotel.id);
        assert!(matches!(
            result,
            Err(Error::Referenced { kind: EntityKind::Hotel, count: 1, .. })
        ));
        assert!(desk.hotels().get(hotel.id).is_some());

        desk.cancel_reservation(reservation.id).unwrap();
        desk.delete_hotel(hotel.id).unwrap();
        assert!(desk.hotels().get(hotel.id).is_none());
    }

    #[test]
    fn test_delete_customer_with_active_reservation_is_rejected() {
        let dir = tempdir().unwrap();
        let mut desk = BookingDesk::open_at(dir.path()).unwrap();
        let hotel = desk.create_hotel("Plaza", "NYC", 2).unwrap();
        let customer = desk.create_customer("Ana", "a@x.com", "555").unwrap();
        let reservation = desk.make_reservation(customer.id, hotel.id).unwrap();

        assert!(matches!(
            desk.delete_customer(customer.id),
            Err(Error::Referenced { kind: EntityKind::Customer, .. })
        ));

        desk.cancel_reservation(reservation.id).unwrap();
        desk.delete_customer(customer.id).unwrap();
        assert!(matches!(
            desk.delete_customer(customer.id),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_show_delegates() {
        let dir = tempdir().unwrap();
        let mut desk = BookingDesk::open_at(dir.path()).unwrap();
        let hotel = desk.create_hotel("Plaza", "NYC", 2).unwrap();
        let customer = desk.create_customer("Ana", "a@x.com", "555").unwrap();
        let reservation = desk.make_reservation(customer.id, hotel.id).unwrap();

        assert!(desk.show_hotel(hotel.id).unwrap().contains("Available Rooms: 1"));
        assert!(desk.show_customer(customer.id).unwrap().contains("Name: Ana"));
        assert!(desk
            .show_reservation(reservation.id)
            .unwrap()
            .contains("Status: active"));
    }
}
