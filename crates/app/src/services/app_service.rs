use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use shoplite_core::DomainError;
use shoplite_orders::OrderStatus;
use shoplite_store::{CustomerStore, OrderStore, ProductStore, WarehouseStore};

use crate::loader::{DataLoader, LoadError};

use super::{CartService, CustomerService, OrderService, ProductService};

/// Seeding can fail on the files or on the records inside them.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// What a seeding run brought in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub products: usize,
    pub customers: usize,
}

/// Point-in-time counters over every store.
///
/// Revenue sums the total of every order, cancelled ones included;
/// cancellation does not refund in this model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_products: usize,
    pub total_customers: usize,
    pub total_orders: usize,
    pub active_orders: usize,
    pub cancelled_orders: usize,
    pub total_revenue: f64,
}

/// Owns the stores and the services wired over them; the single setup
/// path for the demo binary and for tests.
#[derive(Debug)]
pub struct AppService {
    warehouse: Arc<WarehouseStore>,
    product_service: ProductService,
    customer_service: CustomerService,
    cart_service: CartService,
    order_service: OrderService,
}

impl AppService {
    pub fn new() -> Self {
        let products = Arc::new(ProductStore::new());
        let customers = Arc::new(CustomerStore::new());
        let orders = Arc::new(OrderStore::new());

        Self {
            warehouse: Arc::new(WarehouseStore::new()),
            product_service: ProductService::new(Arc::clone(&products)),
            customer_service: CustomerService::new(Arc::clone(&customers)),
            cart_service: CartService::new(Arc::clone(&products)),
            order_service: OrderService::new(orders, products, customers),
        }
    }

    pub fn products(&self) -> &ProductService {
        &self.product_service
    }

    pub fn customers(&self) -> &CustomerService {
        &self.customer_service
    }

    pub fn cart(&self) -> &CartService {
        &self.cart_service
    }

    pub fn cart_mut(&mut self) -> &mut CartService {
        &mut self.cart_service
    }

    pub fn orders(&self) -> &OrderService {
        &self.order_service
    }

    pub fn warehouse(&self) -> &WarehouseStore {
        &self.warehouse
    }

    /// Load the sample catalog and customer registry through the
    /// services, so seeded records pass the same validation as live
    /// ones.
    pub fn seed(&self, data_dir: impl AsRef<Path>) -> Result<SeedSummary, SeedError> {
        let loader = DataLoader::new(data_dir.as_ref())?;

        let mut summary = SeedSummary::default();
        for product in loader.load_products()? {
            self.product_service.create(product)?;
            summary.products += 1;
        }
        for customer in loader.load_customers()? {
            self.customer_service.create(customer)?;
            summary.customers += 1;
        }

        info!(
            products = summary.products,
            customers = summary.customers,
            "sample data loaded"
        );
        Ok(summary)
    }

    pub fn statistics(&self) -> Statistics {
        let orders = self.order_service.all_orders();
        let cancelled = orders
            .iter()
            .filter(|order| order.status == OrderStatus::Cancelled)
            .count();

        Statistics {
            total_products: self.product_service.list().len(),
            total_customers: self.customer_service.list().len(),
            total_orders: orders.len(),
            active_orders: orders.len() - cancelled,
            cancelled_orders: cancelled,
            total_revenue: orders.iter().map(|order| order.total_amount).sum(),
        }
    }

    /// Drop every store and start over with fresh ones.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for AppService {
    fn default() -> Self {
        Self::new()
    }
}
