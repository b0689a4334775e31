use std::sync::Arc;

use shoplite_core::{DomainError, DomainResult, Entity, ProductId};

/// Catalog entry: something that can be put in a cart and ordered.
///
/// The only invariant is the price: it is non-negative at construction
/// and stays non-negative through every update.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
}

impl Product {
    /// Create a product. Fails if `price` is negative.
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> DomainResult<Self> {
        Self::check_price(price)?;
        Ok(Self {
            id,
            name: name.into(),
            price,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price. Non-negative by invariant.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Re-price the product. Fails if `price` is negative; on failure the
    /// previous price is kept.
    pub fn set_price(&mut self, price: f64) -> DomainResult<()> {
        Self::check_price(price)?;
        self.price = price;
        Ok(())
    }

    fn check_price(price: f64) -> DomainResult<()> {
        if price < 0.0 {
            return Err(DomainError::validation(format!(
                "price cannot be negative, got {price}"
            )));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Named grouping of products.
///
/// Membership is by product id: adding a product twice is a no-op, and
/// removal matches on id rather than full equality.
#[derive(Debug, Clone, Default)]
pub struct Category {
    name: String,
    products: Vec<Arc<Product>>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn add_product(&mut self, product: Arc<Product>) {
        if !self.products.iter().any(|p| p.id() == product.id()) {
            self.products.push(product);
        }
    }

    pub fn remove_product(&mut self, product_id: ProductId) {
        self.products.retain(|p| p.id() != product_id);
    }
}
