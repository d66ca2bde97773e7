//! Customer registry

use tracing::instrument;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Customer, CustomerUpdate};
use crate::storage::{Collection, Storage};

#[derive(Debug)]
pub struct CustomerRegistry {
    customers: Collection<Customer>,
}

impl CustomerRegistry {
    pub fn open(storage: &Storage) -> Self {
        Self {
            customers: Collection::open(storage.clone()),
        }
    }

    #[instrument(skip(self, email, phone))]
    pub fn create(&mut self, name: &str, email: &str, phone: &str) -> Result<Customer> {
        let customer = Customer::new(name.to_string(), email.to_string(), phone.to_string())?;
        self.customers.insert_persisted(customer.clone())?;
        tracing::info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }

    #[instrument(skip(self))]
    pub fn delete(&mut self, id: Uuid) -> Result<Customer> {
        let customer = self.customers.remove_persisted(id)?;
        tracing::info!(customer_id = %id, "Customer deleted");
        Ok(customer)
    }

    #[instrument(skip(self, update))]
    pub fn update(&mut self, id: Uuid, update: CustomerUpdate) -> Result<Customer> {
        self.customers.modify_persisted(id, |customer| {
            customer.apply(update)?;
            Ok(customer.clone())
        })
    }

    pub fn show(&self, id: Uuid) -> Result<String> {
        Ok(self.customers.require(id)?.to_string())
    }

    pub fn get(&self, id: Uuid) -> Option<&Customer> {
        self.customers.get(id)
    }

    pub fn require(&self, id: Uuid) -> Result<&Customer> {
        self.customers.require(id)
    }

    pub fn list(&self) -> &[Customer] {
        self.customers.as_slice()
    }
}
