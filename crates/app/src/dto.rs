//! Wire shapes exchanged with the service layer.
//!
//! Domain aggregates hold `Arc` references and are never serialized
//! directly; these flat structs are what crosses the boundary (and what
//! the sample-data files contain). Identifiers travel as raw integers
//! and get validated when a DTO is turned into a domain value.

use serde::{Deserialize, Serialize};

use shoplite_cart::CartItem;
use shoplite_catalog::Product;
use shoplite_core::{CustomerId, DomainError, DomainResult, ProductId};
use shoplite_customers::{Address, Customer};
use shoplite_orders::{Order, OrderItem, OrderStatus};
use shoplite_pricing::{Delivery, Discount, Payment};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
}

impl ProductDto {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id().get(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }

    /// Validates the id and the price on the way into the domain.
    pub fn into_product(self) -> DomainResult<Product> {
        Product::new(ProductId::new(self.product_id)?, self.name, self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDto {
    pub street: String,
    pub city: String,
    pub country: String,
}

impl AddressDto {
    pub fn from_address(address: &Address) -> Self {
        Self {
            street: address.street.clone(),
            city: address.city.clone(),
            country: address.country.clone(),
        }
    }

    pub fn into_address(self) -> Address {
        Address::new(self.street, self.city, self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub addresses: Vec<AddressDto>,
}

impl CustomerDto {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            id: customer.id().get(),
            name: customer.name().to_string(),
            email: customer.email().to_string(),
            addresses: customer
                .addresses()
                .iter()
                .map(AddressDto::from_address)
                .collect(),
        }
    }

    pub fn into_customer(self) -> DomainResult<Customer> {
        let mut customer = Customer::new(CustomerId::new(self.id)?, self.name, self.email);
        for address in self.addresses {
            customer.add_address(address.into_address());
        }
        Ok(customer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemDto {
    pub product: ProductDto,
    pub quantity: i64,
}

impl CartItemDto {
    pub fn from_cart_item(item: &CartItem) -> Self {
        Self {
            product: ProductDto::from_product(item.product()),
            quantity: item.quantity(),
        }
    }

    pub fn from_order_item(item: &OrderItem) -> Self {
        Self {
            product: ProductDto::from_product(item.product()),
            quantity: item.quantity(),
        }
    }
}

/// Everything needed to place an order: who buys, what, and which
/// strategies apply. The strategy enums are serde-ready domain values,
/// so the draft embeds them directly instead of mirroring each variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraftDto {
    pub customer_id: i64,
    /// `(product_id, quantity)` pairs, one per line.
    pub items: Vec<(i64, i64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
}

/// What the caller gets back for a stored order: the lines plus the
/// full pricing breakdown of `Order::totals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceiptDto {
    pub order_id: i64,
    pub customer_name: String,
    pub items: Vec<CartItemDto>,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub delivery_cost: f64,
    pub total_amount: f64,
    pub status: OrderStatus,
}

impl OrderReceiptDto {
    /// Receipts only exist for stored orders; an order that was never
    /// assigned an id fails validation here.
    pub fn from_order(order: &Order) -> DomainResult<Self> {
        let order_id = order
            .id()
            .ok_or_else(|| DomainError::validation("order has no id"))?;
        let totals = order.totals();
        Ok(Self {
            order_id: order_id.get(),
            customer_name: order.customer().name().to_string(),
            items: order.items().iter().map(CartItemDto::from_order_item).collect(),
            subtotal: totals.subtotal,
            discount_amount: totals.discount_amount,
            delivery_cost: totals.delivery_cost,
            total_amount: totals.total,
            status: order.status(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn product(id: i64, price: f64) -> Product {
        Product::new(ProductId::new(id).unwrap(), format!("product-{id}"), price).unwrap()
    }

    #[test]
    fn product_dto_roundtrips_through_the_domain() {
        let dto = ProductDto {
            product_id: 1,
            name: "Laptop".to_string(),
            price: 1500.0,
        };

        let product = dto.clone().into_product().unwrap();
        assert_eq!(ProductDto::from_product(&product), dto);
    }

    #[test]
    fn product_dto_with_bad_id_fails_validation() {
        let dto = ProductDto {
            product_id: 0,
            name: "Laptop".to_string(),
            price: 1500.0,
        };
        match dto.into_product().unwrap_err() {
            DomainError::InvalidId(_) => {}
            _ => panic!("Expected InvalidId for product id 0"),
        }
    }

    #[test]
    fn customer_dto_carries_addresses_both_ways() {
        let dto = CustomerDto {
            id: 1,
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            addresses: vec![AddressDto {
                street: "123 Main St".to_string(),
                city: "New York".to_string(),
                country: "USA".to_string(),
            }],
        };

        let customer = dto.clone().into_customer().unwrap();
        assert_eq!(customer.addresses().len(), 1);
        assert_eq!(CustomerDto::from_customer(&customer), dto);
    }

    #[test]
    fn customer_dto_addresses_default_to_empty() {
        let parsed: CustomerDto =
            serde_json::from_str(r#"{"id":1,"name":"John","email":"j@example.com"}"#).unwrap();
        assert!(parsed.addresses.is_empty());
    }

    #[test]
    fn draft_parses_with_embedded_strategies() {
        let json = r#"{
            "customer_id": 1,
            "items": [[1, 1], [2, 2]],
            "discount": {"kind": "percentage", "value": 10.0},
            "delivery": "express",
            "payment": {"method": "credit_card", "card_number": "4111111111111111"}
        }"#;

        let draft: OrderDraftDto = serde_json::from_str(json).unwrap();
        assert_eq!(draft.items, vec![(1, 1), (2, 2)]);
        assert_eq!(draft.discount, Some(Discount::Percentage(10.0)));
        assert_eq!(draft.delivery, Some(Delivery::Express));
        assert!(matches!(draft.payment, Some(Payment::CreditCard { .. })));
    }

    #[test]
    fn draft_strategies_are_optional() {
        let draft: OrderDraftDto =
            serde_json::from_str(r#"{"customer_id":1,"items":[[1,1]]}"#).unwrap();
        assert!(draft.discount.is_none());
        assert!(draft.delivery.is_none());
        assert!(draft.payment.is_none());
    }

    #[test]
    fn receipt_reports_the_totals_breakdown() {
        let customer = Arc::new(Customer::new(
            CustomerId::new(1).unwrap(),
            "John Doe",
            "john.doe@example.com",
        ));
        let items = vec![
            OrderItem::new(Arc::new(product(1, 1000.0)), 1).unwrap(),
            OrderItem::new(Arc::new(product(2, 25.0)), 2).unwrap(),
        ];
        let mut order = Order::new(customer, items);
        order.set_discount(Discount::Percentage(10.0));
        order.set_delivery(Delivery::Express);
        order
            .assign_id(shoplite_core::OrderId::new(7).unwrap())
            .unwrap();

        let receipt = OrderReceiptDto::from_order(&order).unwrap();
        assert_eq!(receipt.order_id, 7);
        assert_eq!(receipt.customer_name, "John Doe");
        assert_eq!(receipt.items.len(), 2);
        assert_eq!(receipt.subtotal, 1050.0);
        assert_eq!(receipt.discount_amount, 105.0);
        assert_eq!(receipt.delivery_cost, 15.0);
        assert_eq!(receipt.total_amount, 960.0);
        assert_eq!(receipt.status, OrderStatus::Pending);
    }

    #[test]
    fn receipt_requires_a_stored_order() {
        let customer = Arc::new(Customer::new(
            CustomerId::new(1).unwrap(),
            "John Doe",
            "john.doe@example.com",
        ));
        let order = Order::new(
            customer,
            vec![OrderItem::new(Arc::new(product(1, 10.0)), 1).unwrap()],
        );

        match OrderReceiptDto::from_order(&order).unwrap_err() {
            DomainError::Validation(_) => {}
            _ => panic!("Expected validation error for an order without id"),
        }
    }
}
