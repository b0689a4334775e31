use std::sync::{RwLock, RwLockWriteGuard};

use shoplite_core::{DomainError, DomainResult, ProductId};
use shoplite_inventory::Warehouse;

/// Shared handle over one warehouse ledger.
#[derive(Debug, Default)]
pub struct WarehouseStore {
    warehouse: RwLock<Warehouse>,
}

impl WarehouseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stock(&self, product_id: ProductId, quantity: i64) -> DomainResult<()> {
        self.write()?.add_stock(product_id, quantity)
    }

    pub fn remove_stock(&self, product_id: ProductId, quantity: i64) -> DomainResult<()> {
        self.write()?.remove_stock(product_id, quantity)
    }

    pub fn stock_of(&self, product_id: ProductId) -> i64 {
        match self.warehouse.read() {
            Ok(warehouse) => warehouse.stock_of(product_id),
            Err(_) => 0,
        }
    }

    pub fn is_available(&self, product_id: ProductId, quantity: i64) -> bool {
        match self.warehouse.read() {
            Ok(warehouse) => warehouse.is_available(product_id, quantity),
            Err(_) => false,
        }
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Warehouse>> {
        self.warehouse
            .write()
            .map_err(|_| DomainError::conflict("warehouse store lock poisoned"))
    }
}
