use std::sync::Arc;

use tracing::info;

use shoplite_core::{CustomerId, DomainError, DomainResult};
use shoplite_store::CustomerStore;

use crate::dto::{AddressDto, CustomerDto};

/// Customer registry operations. Email uniqueness is enforced here, on
/// top of the store's `find_by_email`; the store itself only rejects
/// duplicate ids.
#[derive(Debug, Clone)]
pub struct CustomerService {
    customers: Arc<CustomerStore>,
}

impl CustomerService {
    pub fn new(customers: Arc<CustomerStore>) -> Self {
        Self { customers }
    }

    pub fn create(&self, dto: CustomerDto) -> DomainResult<CustomerDto> {
        if self.customers.find_by_email(&dto.email).is_some() {
            return Err(DomainError::conflict(format!(
                "customer with email {} already exists",
                dto.email
            )));
        }

        let customer = dto.into_customer()?;
        let created = CustomerDto::from_customer(&customer);
        self.customers.insert(customer)?;
        info!(customer_id = created.id, email = %created.email, "customer created");
        Ok(created)
    }

    pub fn get(&self, id: CustomerId) -> Option<CustomerDto> {
        self.customers
            .get(id)
            .map(|customer| CustomerDto::from_customer(&customer))
    }

    pub fn find_by_email(&self, email: &str) -> Option<CustomerDto> {
        self.customers
            .find_by_email(email)
            .map(|customer| CustomerDto::from_customer(&customer))
    }

    pub fn add_address(&self, id: CustomerId, address: AddressDto) -> DomainResult<CustomerDto> {
        let current = self
            .customers
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("customer {id} not found")))?;

        let mut updated = (*current).clone();
        updated.add_address(address.into_address());
        let dto = CustomerDto::from_customer(&updated);
        self.customers.update(updated)?;
        info!(customer_id = %id, addresses = dto.addresses.len(), "address added");
        Ok(dto)
    }

    /// Change a customer's email, keeping emails unique across the
    /// registry. Re-submitting the customer's own email is a no-op.
    pub fn update_email(&self, id: CustomerId, new_email: &str) -> DomainResult<CustomerDto> {
        let current = self
            .customers
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("customer {id} not found")))?;

        if let Some(existing) = self.customers.find_by_email(new_email) {
            if existing.id() != id {
                return Err(DomainError::conflict(format!(
                    "email {new_email} is already in use"
                )));
            }
        }

        let mut updated = (*current).clone();
        updated.set_email(new_email);
        let dto = CustomerDto::from_customer(&updated);
        self.customers.update(updated)?;
        info!(customer_id = %id, email = %new_email, "customer email updated");
        Ok(dto)
    }

    pub fn list(&self) -> Vec<CustomerDto> {
        self.customers
            .all()
            .iter()
            .map(|customer| CustomerDto::from_customer(customer))
            .collect()
    }

    pub fn delete(&self, id: CustomerId) -> DomainResult<()> {
        self.customers.remove(id)?;
        info!(customer_id = %id, "customer deleted");
        Ok(())
    }
}
