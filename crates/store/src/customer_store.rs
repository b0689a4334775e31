use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use shoplite_core::{CustomerId, DomainError, DomainResult};
use shoplite_customers::Customer;

/// In-memory customer registry. Duplicate ids are conflicts here; email
/// uniqueness is the customer service's check, built on `find_by_email`.
#[derive(Debug, Default)]
pub struct CustomerStore {
    customers: RwLock<HashMap<CustomerId, Arc<Customer>>>,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, customer: Customer) -> DomainResult<()> {
        let mut customers = self.write()?;
        if customers.contains_key(&customer.id()) {
            return Err(DomainError::conflict(format!(
                "customer {} already exists",
                customer.id()
            )));
        }
        customers.insert(customer.id(), Arc::new(customer));
        Ok(())
    }

    pub fn get(&self, id: CustomerId) -> Option<Arc<Customer>> {
        let customers = self.customers.read().ok()?;
        customers.get(&id).cloned()
    }

    pub fn find_by_email(&self, email: &str) -> Option<Arc<Customer>> {
        let customers = self.customers.read().ok()?;
        customers
            .values()
            .find(|customer| customer.email() == email)
            .cloned()
    }

    pub fn all(&self) -> Vec<Arc<Customer>> {
        let customers = match self.customers.read() {
            Ok(map) => map,
            Err(_) => return vec![],
        };
        let mut all: Vec<Arc<Customer>> = customers.values().cloned().collect();
        all.sort_by_key(|customer| customer.id());
        all
    }

    pub fn update(&self, customer: Customer) -> DomainResult<()> {
        let mut customers = self.write()?;
        match customers.get_mut(&customer.id()) {
            Some(entry) => {
                *entry = Arc::new(customer);
                Ok(())
            }
            None => Err(DomainError::not_found(format!(
                "customer {} not found",
                customer.id()
            ))),
        }
    }

    pub fn remove(&self, id: CustomerId) -> DomainResult<()> {
        let mut customers = self.write()?;
        match customers.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found(format!("customer {id} not found"))),
        }
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, HashMap<CustomerId, Arc<Customer>>>> {
        self.customers
            .write()
            .map_err(|_| DomainError::conflict("customer store lock poisoned"))
    }
}
