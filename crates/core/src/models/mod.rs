//! Data models for Lodging

mod customer;
mod hotel;
mod reservation;

pub use customer::*;
pub use hotel::*;
pub use reservation::*;

use crate::error::{Error, Result};

/// Reject empty or whitespace-only required fields
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}
