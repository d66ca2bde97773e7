//! Storage record trait
//!
//! Ties each model to the collection file it lives in, so one generic
//! [`Collection`](super::Collection) can back every registry.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::EntityKind;
use crate::models::{Customer, Hotel, Reservation};

/// A model that is stored as one entry of a named collection
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Collection (file stem) holding records of this type
    const COLLECTION: &'static str;
    /// Kind reported in lookup errors
    const KIND: EntityKind;

    fn id(&self) -> Uuid;
}

impl Record for Hotel {
    const COLLECTION: &'static str = super::HOTELS;
    const KIND: EntityKind = EntityKind::Hotel;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Customer {
    const COLLECTION: &'static str = super::CUSTOMERS;
    const KIND: EntityKind = EntityKind::Customer;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Reservation {
    const COLLECTION: &'static str = super::RESERVATIONS;
    const KIND: EntityKind = EntityKind::Reservation;

    fn id(&self) -> Uuid {
        self.id
    }
}
