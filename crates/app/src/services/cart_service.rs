use std::sync::Arc;

use shoplite_cart::ShoppingCart;
use shoplite_core::{DomainError, DomainResult, ProductId};
use shoplite_store::ProductStore;

use crate::dto::CartItemDto;

/// One working cart over the shared catalog. The cart itself lives in
/// this service instance, so each caller session gets its own.
#[derive(Debug)]
pub struct CartService {
    products: Arc<ProductStore>,
    cart: ShoppingCart,
}

impl CartService {
    pub fn new(products: Arc<ProductStore>) -> Self {
        Self {
            products,
            cart: ShoppingCart::new(),
        }
    }

    /// Add a catalog product to the cart; adding one already in the
    /// cart merges quantities.
    pub fn add_item(&mut self, product_id: ProductId, quantity: i64) -> DomainResult<CartItemDto> {
        let product = self
            .products
            .get(product_id)
            .ok_or_else(|| DomainError::not_found(format!("product {product_id} not found")))?;

        let line = self.cart.add_item(product, quantity)?;
        Ok(CartItemDto::from_cart_item(line))
    }

    pub fn remove_item(&mut self, product_id: ProductId) {
        self.cart.remove_item(product_id);
    }

    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> DomainResult<CartItemDto> {
        let line = self.cart.update_quantity(product_id, quantity)?;
        Ok(CartItemDto::from_cart_item(line))
    }

    pub fn items(&self) -> Vec<CartItemDto> {
        self.cart
            .items()
            .iter()
            .map(CartItemDto::from_cart_item)
            .collect()
    }

    /// `(product_id, quantity)` pairs in cart order, the shape an order
    /// draft wants.
    pub fn draft_lines(&self) -> Vec<(i64, i64)> {
        self.cart
            .items()
            .iter()
            .map(|line| (line.product().id().get(), line.quantity()))
            .collect()
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    pub fn clear(&mut self) {
        self.cart.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }
}
