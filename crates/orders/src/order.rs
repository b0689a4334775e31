use std::sync::Arc;

use serde::{Deserialize, Serialize};

use shoplite_catalog::Product;
use shoplite_core::{DomainError, DomainResult, OrderId};
use shoplite_customers::Customer;
use shoplite_pricing::{Delivery, Discount, Payment};

/// Order lifecycle status.
///
/// Orders start pending. Cancellation is explicit; the other stages are
/// reached through `Order::set_status` by the service layer, never as a
/// side effect of payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_cancelled(self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Immutable order line: a shared product and a positive quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    product: Arc<Product>,
    quantity: i64,
}

impl OrderItem {
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

    pub fn total_price(&self) -> f64 {
        self.product.price() * self.quantity as f64
    }
}

/// Price breakdown of an order, computed in one pass so the parts always
/// belong to the same pricing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub delivery_cost: f64,
    pub total: f64,
}

/// The central aggregate: a customer's priced order.
///
/// Line items are fixed at construction. Discount, delivery, and payment
/// are attached afterwards through setters, at most one each. Pricing is
/// a pure read: it never mutates the order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    customer: Arc<Customer>,
    items: Vec<OrderItem>,
    status: OrderStatus,
    id: Option<OrderId>,
    discount: Option<Discount>,
    delivery: Option<Delivery>,
    payment: Option<Payment>,
}

impl Order {
    /// Items are expected non-empty by convention; the service layer
    /// rejects empty drafts before constructing one.
    pub fn new(customer: Arc<Customer>, items: Vec<OrderItem>) -> Self {
        Self {
            customer,
            items,
            status: OrderStatus::Pending,
            id: None,
            discount: None,
            delivery: None,
            payment: None,
        }
    }

    pub fn id(&self) -> Option<OrderId> {
        self.id
    }

    /// Attach the store-issued identifier. An order is identified once;
    /// a second assignment is a conflict.
    pub fn assign_id(&mut self, id: OrderId) -> DomainResult<()> {
        if let Some(existing) = self.id {
            return Err(DomainError::conflict(format!(
                "order already has id {existing}"
            )));
        }
        self.id = Some(id);
        Ok(())
    }

    pub fn customer(&self) -> &Arc<Customer> {
        &self.customer
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    pub fn discount(&self) -> Option<Discount> {
        self.discount
    }

    pub fn set_discount(&mut self, discount: Discount) {
        self.discount = Some(discount);
    }

    pub fn delivery(&self) -> Option<Delivery> {
        self.delivery
    }

    pub fn set_delivery(&mut self, delivery: Delivery) {
        self.delivery = Some(delivery);
    }

    pub fn payment(&self) -> Option<&Payment> {
        self.payment.as_ref()
    }

    pub fn set_payment(&mut self, payment: Payment) {
        self.payment = Some(payment);
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(OrderItem::total_price).sum()
    }

    /// Price the order: subtotal, minus the discount amount, plus the
    /// delivery cost. Unset selections contribute zero. No floor is
    /// applied; an oversized percentage discount drives the total
    /// negative.
    pub fn totals(&self) -> OrderTotals {
        let subtotal = self.subtotal();
        let discount_amount = self.discount.map_or(0.0, |d| d.apply(subtotal));
        let delivery_cost = self.delivery.map_or(0.0, Delivery::cost);
        OrderTotals {
            subtotal,
            discount_amount,
            delivery_cost,
            total: subtotal - discount_amount + delivery_cost,
        }
    }

    pub fn total(&self) -> f64 {
        self.totals().total
    }

    /// Unconditional: cancelling an already cancelled or delivered order
    /// leaves it cancelled.
    pub fn cancel(&mut self) {
        self.status = OrderStatus::Cancelled;
    }

    /// Execute the attached payment for the computed total. Fails when
    /// no payment method is set; does not change the status.
    pub fn process_payment(&self) -> DomainResult<()> {
        match &self.payment {
            Some(payment) => payment.pay(self.total()),
            None => Err(DomainError::precondition("payment method not set")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shoplite_core::{CustomerId, ProductId};

    fn test_customer() -> Arc<Customer> {
        Arc::new(Customer::new(
            CustomerId::new(1).unwrap(),
            "John Doe",
            "john.doe@example.com",
        ))
    }

    fn test_product(id: i64, price: f64) -> Arc<Product> {
        Arc::new(
            Product::new(ProductId::new(id).unwrap(), format!("product-{id}"), price).unwrap(),
        )
    }

    /// Two lines, 1000 x1 and 25 x2: subtotal 1050.
    fn test_order() -> Order {
        let items = vec![
            OrderItem::new(test_product(1, 1000.0), 1).unwrap(),
            OrderItem::new(test_product(2, 25.0), 2).unwrap(),
        ];
        Order::new(test_customer(), items)
    }

    #[test]
    fn order_item_rejects_non_positive_quantity() {
        for quantity in [0, -1, -100] {
            let err = OrderItem::new(test_product(1, 10.0), quantity).unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                _ => panic!("Expected validation error for quantity {quantity}"),
            }
        }
    }

    #[test]
    fn order_item_total_price_is_price_times_quantity() {
        let item = OrderItem::new(test_product(1, 25.0), 2).unwrap();
        assert_eq!(item.total_price(), 50.0);
    }

    #[test]
    fn new_orders_are_pending_with_nothing_attached() {
        let order = test_order();
        assert_eq!(order.status(), OrderStatus::Pending);
        assert!(order.id().is_none());
        assert!(order.discount().is_none());
        assert!(order.delivery().is_none());
        assert!(order.payment().is_none());
    }

    #[test]
    fn subtotal_sums_line_totals() {
        assert_eq!(test_order().subtotal(), 1050.0);
    }

    #[test]
    fn total_without_selections_is_the_subtotal() {
        assert_eq!(test_order().total(), 1050.0);
    }

    #[test]
    fn percentage_discount_reduces_the_total() {
        let mut order = test_order();
        order.set_discount(Discount::Percentage(10.0));
        assert_eq!(order.total(), 945.0);
    }

    #[test]
    fn fixed_discount_with_standard_delivery() {
        let mut order = test_order();
        order.set_discount(Discount::Fixed(50.0));
        order.set_delivery(Delivery::Standard);
        assert_eq!(order.total(), 1005.0);
    }

    #[test]
    fn percentage_discount_with_express_delivery() {
        let mut order = test_order();
        order.set_discount(Discount::Percentage(10.0));
        order.set_delivery(Delivery::Express);
        assert_eq!(order.total(), 960.0);
    }

    #[test]
    fn totals_expose_the_full_breakdown() {
        let mut order = test_order();
        order.set_discount(Discount::Percentage(10.0));
        order.set_delivery(Delivery::Express);

        let totals = order.totals();
        assert_eq!(totals.subtotal, 1050.0);
        assert_eq!(totals.discount_amount, 105.0);
        assert_eq!(totals.delivery_cost, 15.0);
        assert_eq!(totals.total, 960.0);
    }

    #[test]
    fn negative_totals_are_not_clamped() {
        let mut order = test_order();
        order.set_discount(Discount::Percentage(150.0));
        assert_eq!(order.total(), -525.0);
    }

    #[test]
    fn pricing_does_not_mutate_the_order() {
        let mut order = test_order();
        order.set_discount(Discount::Percentage(10.0));
        order.set_delivery(Delivery::Standard);
        let before = order.clone();

        let _ = order.subtotal();
        let _ = order.totals();
        let _ = order.total();

        assert_eq!(order, before);
    }

    #[test]
    fn assign_id_accepts_one_id_and_rejects_a_second() {
        let mut order = test_order();
        order.assign_id(OrderId::new(7).unwrap()).unwrap();
        assert_eq!(order.id(), Some(OrderId::new(7).unwrap()));

        let err = order.assign_id(OrderId::new(8).unwrap()).unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            _ => panic!("Expected conflict on id re-assignment"),
        }
        assert_eq!(order.id(), Some(OrderId::new(7).unwrap()));
    }

    #[test]
    fn cancel_is_unconditional() {
        let mut order = test_order();
        order.cancel();
        assert_eq!(order.status(), OrderStatus::Cancelled);

        order.cancel();
        assert_eq!(order.status(), OrderStatus::Cancelled);

        let mut delivered = test_order();
        delivered.set_status(OrderStatus::Delivered);
        delivered.cancel();
        assert_eq!(delivered.status(), OrderStatus::Cancelled);
    }

    #[test]
    fn process_payment_requires_a_payment_method() {
        let order = test_order();
        let err = order.process_payment().unwrap_err();
        match err {
            DomainError::PreconditionNotMet(msg) if msg.contains("payment method not set") => {}
            _ => panic!("Expected precondition error without a payment method"),
        }
    }

    #[test]
    fn process_payment_succeeds_and_leaves_the_status_alone() {
        let mut order = test_order();
        order.set_payment(Payment::CreditCard {
            card_number: "4111111111111111".to_string(),
        });

        assert!(order.process_payment().is_ok());
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn status_roundtrips_through_display_and_serde() {
        assert_eq!(OrderStatus::Cancelled.to_string(), "cancelled");
        assert!(OrderStatus::Cancelled.is_cancelled());
        assert!(!OrderStatus::Pending.is_cancelled());

        let parsed: OrderStatus = serde_json::from_str(r#""shipped""#).unwrap();
        assert_eq!(parsed, OrderStatus::Shipped);
    }

    fn any_discount() -> impl Strategy<Value = Discount> {
        prop_oneof![
            (0.0f64..=100.0).prop_map(Discount::Percentage),
            (0.0f64..10_000.0).prop_map(Discount::Fixed),
        ]
    }

    fn any_delivery() -> impl Strategy<Value = Delivery> {
        prop_oneof![Just(Delivery::Standard), Just(Delivery::Express)]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the breakdown is internally consistent, whatever the
        /// selections: total = subtotal - discount_amount + delivery_cost.
        #[test]
        fn totals_breakdown_is_internally_consistent(
            price in 0.0f64..10_000.0,
            quantity in 1i64..100,
            discount in any_discount(),
            delivery in any_delivery(),
        ) {
            let mut order = Order::new(
                test_customer(),
                vec![OrderItem::new(test_product(1, price), quantity).unwrap()],
            );
            order.set_discount(discount);
            order.set_delivery(delivery);

            let totals = order.totals();
            prop_assert_eq!(totals.subtotal, order.subtotal());
            prop_assert_eq!(totals.discount_amount, discount.apply(totals.subtotal));
            prop_assert_eq!(totals.delivery_cost, delivery.cost());
            prop_assert_eq!(
                totals.total,
                totals.subtotal - totals.discount_amount + totals.delivery_cost
            );
        }

        /// Property: discounts with in-range parameters never push the
        /// total below the delivery cost.
        #[test]
        fn in_range_discounts_keep_total_at_least_delivery(
            price in 0.0f64..10_000.0,
            quantity in 1i64..100,
            discount in any_discount(),
            delivery in any_delivery(),
        ) {
            let mut order = Order::new(
                test_customer(),
                vec![OrderItem::new(test_product(1, price), quantity).unwrap()],
            );
            order.set_discount(discount);
            order.set_delivery(delivery);

            prop_assert!(order.total() >= delivery.cost());
        }
    }
}
