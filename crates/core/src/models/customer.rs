//! Customer model

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::require_non_blank;
use crate::error::{Error, Result};

/// A guest who can hold reservations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Field changes for [`Customer`]; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

fn validate_email(email: &str) -> Result<()> {
    require_non_blank("email", email)?;
    if !email.contains('@') {
        return Err(Error::Validation(format!("email '{}' is missing '@'", email)));
    }
    Ok(())
}

impl Customer {
    pub fn new(name: String, email: String, phone: String) -> Result<Self> {
        require_non_blank("customer name", &name)?;
        validate_email(&email)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
        })
    }

    /// Validate and apply an update. On error `self` is left unchanged.
    pub fn apply(&mut self, update: CustomerUpdate) -> Result<()> {
        if let Some(name) = &update.name {
            require_non_blank("customer name", name)?;
        }
        if let Some(email) = &update.email {
            validate_email(email)?;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        Ok(())
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Email: {}", self.email)?;
        write!(f, "Phone: {}", self.phone)
    }
}
