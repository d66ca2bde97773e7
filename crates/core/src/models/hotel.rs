//! Hotel model and room-availability arithmetic

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::require_non_blank;
use crate::error::{Error, Result};

/// A hotel with a fixed pool of rooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub total_rooms: i64,
    /// Rooms not held by an active reservation
    pub available_rooms: i64,
}

/// Field changes for [`Hotel`]; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct HotelUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub total_rooms: Option<i64>,
}

impl Hotel {
    pub fn new(name: String, location: String, total_rooms: i64) -> Result<Self> {
        require_non_blank("hotel name", &name)?;
        if total_rooms < 0 {
            return Err(Error::Validation(format!(
                "total_rooms must not be negative (got {})",
                total_rooms
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            location,
            total_rooms,
            available_rooms: total_rooms,
        })
    }

    /// Rooms currently held by active reservations
    pub fn held_rooms(&self) -> i64 {
        self.total_rooms - self.available_rooms
    }

    pub fn has_availability(&self) -> bool {
        self.available_rooms > 0
    }

    /// Take one room out of the available pool
    pub fn take_room(&mut self) -> Result<()> {
        if !self.has_availability() {
            return Err(Error::NoAvailability(self.id));
        }
        self.available_rooms -= 1;
        Ok(())
    }

    /// Return one room to the pool, never above `total_rooms`.
    ///
    /// Returns `false` when every room was already available.
    pub fn give_back_room(&mut self) -> bool {
        if self.available_rooms >= self.total_rooms {
            return false;
        }
        self.available_rooms += 1;
        true
    }

    /// Change the room count, shifting availability by the same delta
    pub fn resize(&mut self, new_total: i64) -> Result<()> {
        if new_total < 0 {
            return Err(Error::Validation(format!(
                "total_rooms must not be negative (got {})",
                new_total
            )));
        }

        let available = self.available_rooms + (new_total - self.total_rooms);
        if available < 0 {
            return Err(Error::Validation(format!(
                "hotel {} has {} room(s) reserved; cannot shrink to {}",
                self.id,
                self.held_rooms(),
                new_total
            )));
        }

        self.total_rooms = new_total;
        self.available_rooms = available.min(new_total);
        Ok(())
    }

    /// Validate and apply an update. On error `self` is left unchanged.
    pub fn apply(&mut self, update: HotelUpdate) -> Result<()> {
        if let Some(name) = &update.name {
            require_non_blank("hotel name", name)?;
        }

        let mut next = self.clone();
        if let Some(total) = update.total_rooms {
            next.resize(total)?;
        }
        if let Some(name) = update.name {
            next.name = name;
        }
        if let Some(location) = update.location {
            next.location = location;
        }

        *self = next;
        Ok(())
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hotel ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Total Rooms: {}", self.total_rooms)?;
        write!(f, "Available Rooms: {}", self.available_rooms)
    }
}
