use std::sync::Arc;

use tracing::info;

use shoplite_core::{CustomerId, DomainError, DomainResult, OrderId, ProductId};
use shoplite_orders::{Order, OrderItem};
use shoplite_store::{CustomerStore, OrderStore, ProductStore};

use crate::dto::{OrderDraftDto, OrderReceiptDto};

/// Order placement and lifecycle over the shared stores.
///
/// This is the one caller that enforces the non-empty-items rule; the
/// `Order` constructor itself accepts whatever it is given.
#[derive(Debug, Clone)]
pub struct OrderService {
    orders: Arc<OrderStore>,
    products: Arc<ProductStore>,
    customers: Arc<CustomerStore>,
}

impl OrderService {
    pub fn new(
        orders: Arc<OrderStore>,
        products: Arc<ProductStore>,
        customers: Arc<CustomerStore>,
    ) -> Self {
        Self {
            orders,
            products,
            customers,
        }
    }

    /// Resolve a draft against the stores, build the order, attach the
    /// selected strategies, and store it. The receipt carries the
    /// assigned id and the full pricing breakdown.
    pub fn place_order(&self, draft: OrderDraftDto) -> DomainResult<OrderReceiptDto> {
        let customer_id = CustomerId::new(draft.customer_id)?;
        let customer = self
            .customers
            .get(customer_id)
            .ok_or_else(|| DomainError::not_found(format!("customer {customer_id} not found")))?;

        if draft.items.is_empty() {
            return Err(DomainError::validation(
                "order must contain at least one item",
            ));
        }

        let mut items = Vec::with_capacity(draft.items.len());
        for (raw_product_id, quantity) in &draft.items {
            let product_id = ProductId::new(*raw_product_id)?;
            let product = self.products.get(product_id).ok_or_else(|| {
                DomainError::not_found(format!("product {product_id} not found"))
            })?;
            items.push(OrderItem::new(product, *quantity)?);
        }

        let mut order = Order::new(customer, items);
        if let Some(discount) = draft.discount {
            order.set_discount(discount);
        }
        if let Some(delivery) = draft.delivery {
            order.set_delivery(delivery);
        }
        if let Some(payment) = draft.payment {
            order.set_payment(payment);
        }

        let stored = self.orders.add(order)?;
        let receipt = OrderReceiptDto::from_order(&stored)?;
        info!(
            order_id = receipt.order_id,
            customer = %receipt.customer_name,
            total = receipt.total_amount,
            "order placed"
        );
        Ok(receipt)
    }

    pub fn get_order(&self, id: OrderId) -> Option<OrderReceiptDto> {
        let order = self.orders.get(id)?;
        OrderReceiptDto::from_order(&order).ok()
    }

    pub fn orders_for_customer(&self, customer_id: CustomerId) -> Vec<OrderReceiptDto> {
        self.orders
            .by_customer(customer_id)
            .iter()
            .filter_map(|order| OrderReceiptDto::from_order(order).ok())
            .collect()
    }

    pub fn all_orders(&self) -> Vec<OrderReceiptDto> {
        self.orders
            .all()
            .iter()
            .filter_map(|order| OrderReceiptDto::from_order(order).ok())
            .collect()
    }

    /// Unconditionally cancel, matching the aggregate's own rule.
    pub fn cancel_order(&self, id: OrderId) -> DomainResult<OrderReceiptDto> {
        let mut order = self
            .orders
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("order {id} not found")))?;

        order.cancel();
        self.orders.update(order.clone())?;
        info!(order_id = %id, "order cancelled");
        OrderReceiptDto::from_order(&order)
    }

    /// Execute the order's attached payment for its computed total.
    /// Fails when the order is unknown or no payment method is set.
    pub fn process_payment(&self, id: OrderId) -> DomainResult<()> {
        let order = self
            .orders
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("order {id} not found")))?;

        order.process_payment()
    }
}
