//! Hotel registry

use tracing::instrument;
use uuid::Uuid;

use crate::error::Result;
use crate::invariants::{assert_hotel_invariants, check_hotel};
use crate::models::{Hotel, HotelUpdate};
use crate::storage::{Collection, Storage};

/// Owner of the hotel collection and its room arithmetic
#[derive(Debug)]
pub struct HotelRegistry {
    hotels: Collection<Hotel>,
}

impl HotelRegistry {
    pub fn open(storage: &Storage) -> Self {
        let mut hotels: Collection<Hotel> = Collection::open(storage.clone());
        hotels.retain_mut(|hotel| {
            let Some(problem) = check_hotel(hotel) else {
                return true;
            };
            if hotel.total_rooms < 0 {
                tracing::warn!(hotel_id = %hotel.id, %problem, "Dropping malformed stored hotel");
                return false;
            }
            tracing::warn!(hotel_id = %hotel.id, %problem, "Clamping stored room counts");
            hotel.available_rooms = hotel.available_rooms.clamp(0, hotel.total_rooms);
            true
        });
        Self { hotels }
    }

    /// Register a new hotel with every room available
    #[instrument(skip(self, location))]
    pub fn create(&mut self, name: &str, location: &str, total_rooms: i64) -> Result<Hotel> {
        let hotel = Hotel::new(name.to_string(), location.to_string(), total_rooms)?;
        self.hotels.insert_persisted(hotel.clone())?;
        tracing::info!(hotel_id = %hotel.id, "Hotel created");
        Ok(hotel)
    }

    #[instrument(skip(self))]
    pub fn delete(&mut self, id: Uuid) -> Result<Hotel> {
        let hotel = self.hotels.remove_persisted(id)?;
        tracing::info!(hotel_id = %id, "Hotel deleted");
        Ok(hotel)
    }

    /// Apply field changes; a new room count shifts availability by the same delta
    #[instrument(skip(self, update))]
    pub fn update(&mut self, id: Uuid, update: HotelUpdate) -> Result<Hotel> {
        let hotel = self.hotels.modify_persisted(id, |hotel| {
            hotel.apply(update)?;
            Ok(hotel.clone())
        })?;
        assert_hotel_invariants(&hotel);
        tracing::info!(hotel_id = %id, total_rooms = hotel.total_rooms, "Hotel updated");
        Ok(hotel)
    }

    /// Take one room and persist
    #[instrument(skip(self))]
    pub fn reserve_room(&mut self, id: Uuid) -> Result<()> {
        self.hotels.modify_persisted(id, Hotel::take_room)
    }

    /// Give one room back and persist.
    ///
    /// Returns `false` if every room was already available.
    #[instrument(skip(self))]
    pub fn release_room(&mut self, id: Uuid) -> Result<bool> {
        let released = self
            .hotels
            .modify_persisted(id, |hotel| Ok(hotel.give_back_room()))?;
        if !released {
            tracing::warn!(hotel_id = %id, "All rooms already available");
        }
        Ok(released)
    }

    /// Human-readable description of a hotel
    pub fn show(&self, id: Uuid) -> Result<String> {
        Ok(self.hotels.require(id)?.to_string())
    }

    pub fn get(&self, id: Uuid) -> Option<&Hotel> {
        self.hotels.get(id)
    }

    pub fn require(&self, id: Uuid) -> Result<&Hotel> {
        self.hotels.require(id)
    }

    pub fn list(&self) -> &[Hotel] {
        self.hotels.as_slice()
    }

    /// Take a room in memory only; pair with [`HotelRegistry::persist`]
    pub(crate) fn hold_room(&mut self, id: Uuid) -> Result<()> {
        self.hotels.require_mut(id)?.take_room()
    }

    /// Give a room back in memory only; pair with [`HotelRegistry::persist`]
    pub(crate) fn unhold_room(&mut self, id: Uuid) -> Result<bool> {
        Ok(self.hotels.require_mut(id)?.give_back_room())
    }

    pub(crate) fn persist(&self) -> Result<()> {
        self.hotels.persist()
    }
}
