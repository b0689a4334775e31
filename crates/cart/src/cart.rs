use std::sync::Arc;

use shoplite_catalog::Product;
use shoplite_core::{DomainError, DomainResult, ProductId};

/// One cart line: a shared product and a positive quantity.
///
/// Unlike an order line the quantity is mutable while the cart is open.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    product: Arc<Product>,
    quantity: i64,
}

impl CartItem {
    pub fn new(product: Arc<Product>, quantity: i64) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::validation(format!(
                "quantity must be positive, got {quantity}"
            )));
        }
        Ok(Self { product, quantity })
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn line_total(&self) -> f64 {
        self.product.price() * self.quantity as f64
    }
}

/// A customer's working cart. Adding a product already in the cart merges
/// quantities instead of creating a second line.
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: Vec<CartItem>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the affected line: the merged one when the product is
    /// already in the cart, the new one otherwise.
    pub fn add_item(&mut self, product: Arc<Product>, quantity: i64) -> DomainResult<&CartItem> {
        let item = CartItem::new(product, quantity)?;
        let product_id = item.product.id();
        if let Some(index) = self
            .items
            .iter()
            .position(|line| line.product.id() == product_id)
        {
            self.items[index].quantity += item.quantity;
            return Ok(&self.items[index]);
        }
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Replace the quantity of an existing line.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> DomainResult<&CartItem> {
        if quantity <= 0 {
            return Err(DomainError::validation(format!(
                "quantity must be positive, got {quantity}"
            )));
        }
        match self
            .items
            .iter_mut()
            .find(|line| line.product.id() == product_id)
        {
            Some(line) => {
                line.quantity = quantity;
                Ok(line)
            }
            None => Err(DomainError::not_found(format!(
                "product {product_id} not in cart"
            ))),
        }
    }

    /// Removing a product that is not in the cart is a no-op.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.items.retain(|line| line.product.id() != product_id);
    }

    pub fn item(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|line| line.product.id() == product_id)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
