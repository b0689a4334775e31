use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use shoplite_catalog::Product;
use shoplite_core::{DomainError, DomainResult, ProductId};

/// In-memory product catalog.
///
/// Products are handed out as `Arc` clones. An update swaps the stored
/// entry, so order lines priced earlier keep the product exactly as it
/// was when they were added.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: RwLock<HashMap<ProductId, Arc<Product>>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; a second insert with the same id overwrites.
    pub fn insert(&self, product: Product) -> DomainResult<()> {
        let mut products = self.write()?;
        products.insert(product.id(), Arc::new(product));
        Ok(())
    }

    pub fn get(&self, id: ProductId) -> Option<Arc<Product>> {
        let products = self.products.read().ok()?;
        products.get(&id).cloned()
    }

    /// All products, ordered by id for stable listings.
    pub fn all(&self) -> Vec<Arc<Product>> {
        let products = match self.products.read() {
            Ok(map) => map,
            Err(_) => return vec![],
        };
        let mut all: Vec<Arc<Product>> = products.values().cloned().collect();
        all.sort_by_key(|product| product.id());
        all
    }

    pub fn update(&self, product: Product) -> DomainResult<()> {
        let mut products = self.write()?;
        match products.get_mut(&product.id()) {
            Some(entry) => {
                *entry = Arc::new(product);
                Ok(())
            }
            None => Err(DomainError::not_found(format!(
                "product {} not found",
                product.id()
            ))),
        }
    }

    pub fn remove(&self, id: ProductId) -> DomainResult<()> {
        let mut products = self.write()?;
        match products.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found(format!("product {id} not found"))),
        }
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, HashMap<ProductId, Arc<Product>>>> {
        self.products
            .write()
            .map_err(|_| DomainError::conflict("product store lock poisoned"))
    }
}
