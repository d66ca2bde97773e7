//! Reservation model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Reservation lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Active,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Active => "active",
            ReservationStatus::Cancelled => "cancelled",
        }
    }
}

/// A customer's hold on one room in one hotel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub hotel_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub status: ReservationStatus,
    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn new(customer_id: Uuid, hotel_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            hotel_id,
            created_at: Utc::now(),
            status: ReservationStatus::Active,
            cancelled_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    /// Flip to cancelled. Fails if this already happened.
    pub fn cancel(&mut self) -> Result<()> {
        if !self.is_active() {
            return Err(Error::AlreadyCancelled(self.id));
        }
        self.status = ReservationStatus::Cancelled;
        self.cancelled_at = Some(Utc::now());
        Ok(())
    }

    /// Undo [`Reservation::cancel`] when the cancellation could not be stored
    pub(crate) fn reactivate(&mut self) {
        self.status = ReservationStatus::Active;
        self.cancelled_at = None;
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reservation ID: {}", self.id)?;
        writeln!(f, "Customer ID: {}", self.customer_id)?;
        writeln!(f, "Hotel ID: {}", self.hotel_id)?;
        writeln!(f, "Date: {}", self.created_at.format("%Y-%m-%d %H:%M:%S"))?;
        write!(f, "Status: {}", self.status.as_str())?;
        if let Some(at) = self.cancelled_at {
            write!(f, "\nCancelled: {}", at.format("%Y-%m-%d %H:%M:%S"))?;
        }
        Ok(())
    }
}
