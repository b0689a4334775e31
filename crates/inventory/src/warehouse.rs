use std::collections::HashMap;

use shoplite_core::{DomainError, DomainResult, ProductId};

/// Stock levels keyed by product id.
#[derive(Debug, Clone, Default)]
pub struct Warehouse {
    stock: HashMap<ProductId, i64>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stock(&mut self, product_id: ProductId, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::validation(format!(
                "quantity must be positive, got {quantity}"
            )));
        }
        *self.stock.entry(product_id).or_insert(0) += quantity;
        Ok(())
    }

    /// Fails when fewer units are on hand than requested; products never
    /// stocked count as zero.
    pub fn remove_stock(&mut self, product_id: ProductId, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::validation(format!(
                "quantity must be positive, got {quantity}"
            )));
        }
        let available = self.stock_of(product_id);
        if available < quantity {
            return Err(DomainError::precondition(format!(
                "insufficient stock: {available} available, {quantity} requested"
            )));
        }
        if let Some(level) = self.stock.get_mut(&product_id) {
            *level -= quantity;
        }
        Ok(())
    }

    pub fn stock_of(&self, product_id: ProductId) -> i64 {
        self.stock.get(&product_id).copied().unwrap_or(0)
    }

    pub fn is_available(&self, product_id: ProductId, quantity: i64) -> bool {
        self.stock_of(product_id) >= quantity
    }
}
