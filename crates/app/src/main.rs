//! Console demo: seeds the sample data and walks one full shop flow —
//! carts, two orders with different strategy selections, a payment, a
//! cancellation, and the closing statistics.

use tracing::info;

use shoplite_app::dto::{AddressDto, OrderDraftDto};
use shoplite_app::{loader, AppService};
use shoplite_core::{CustomerId, OrderId, ProductId};
use shoplite_pricing::{Delivery, Discount, Payment};

fn main() -> anyhow::Result<()> {
    shoplite_observability::init();

    let mut app = AppService::new();
    let data_dir = loader::default_data_dir();
    app.seed(&data_dir)?;

    for product in app.products().list() {
        info!(
            product_id = product.product_id,
            name = %product.name,
            price = product.price,
            "catalog"
        );
    }

    // John fills a cart and orders with a percentage discount.
    let laptop = ProductId::new(1)?;
    let mouse = ProductId::new(2)?;
    let keyboard = ProductId::new(3)?;

    let cart = app.cart_mut();
    cart.add_item(laptop, 1)?;
    cart.add_item(mouse, 2)?;
    cart.add_item(keyboard, 1)?;
    info!(items = cart.items().len(), total = cart.total(), "cart ready");

    let first_order = app.orders().place_order(OrderDraftDto {
        customer_id: 1,
        items: app.cart().draft_lines(),
        discount: Some(Discount::Percentage(15.0)),
        delivery: Some(Delivery::Express),
        payment: Some(Payment::CreditCard {
            card_number: "4111-1111-1111-1111".to_string(),
        }),
    })?;
    info!(
        order_id = first_order.order_id,
        subtotal = first_order.subtotal,
        discount = first_order.discount_amount,
        delivery = first_order.delivery_cost,
        total = first_order.total_amount,
        "first order priced"
    );

    app.orders()
        .process_payment(OrderId::new(first_order.order_id)?)?;
    app.cart_mut().clear();

    // Jane orders with a fixed discount and standard delivery.
    let monitor = ProductId::new(4)?;
    let headphones = ProductId::new(5)?;

    let cart = app.cart_mut();
    cart.add_item(monitor, 2)?;
    cart.add_item(headphones, 1)?;
    cart.add_item(keyboard, 2)?;
    info!(items = cart.items().len(), total = cart.total(), "cart ready");

    let second_order = app.orders().place_order(OrderDraftDto {
        customer_id: 2,
        items: app.cart().draft_lines(),
        discount: Some(Discount::Fixed(100.0)),
        delivery: Some(Delivery::Standard),
        payment: Some(Payment::PayPal {
            email: "jane.smith@paypal.com".to_string(),
        }),
    })?;
    info!(
        order_id = second_order.order_id,
        subtotal = second_order.subtotal,
        discount = second_order.discount_amount,
        delivery = second_order.delivery_cost,
        total = second_order.total_amount,
        "second order priced"
    );
    app.cart_mut().clear();

    for receipt in app.orders().all_orders() {
        info!(
            order_id = receipt.order_id,
            customer = %receipt.customer_name,
            total = receipt.total_amount,
            status = %receipt.status,
            "order on file"
        );
    }
    let johns = app.orders().orders_for_customer(CustomerId::new(1)?);
    info!(customer_id = 1, orders = johns.len(), "orders for customer");

    // Catalog and registry maintenance.
    let repriced = app.products().update_price(laptop, 1350.0)?;
    info!(product_id = repriced.product_id, price = repriced.price, "laptop repriced");

    let john = app.customers().add_address(
        CustomerId::new(1)?,
        AddressDto {
            street: "999 Elm Street".to_string(),
            city: "Chicago".to_string(),
            country: "USA".to_string(),
        },
    )?;
    info!(customer_id = john.id, addresses = john.addresses.len(), "address added");

    let cancelled = app
        .orders()
        .cancel_order(OrderId::new(first_order.order_id)?)?;
    info!(order_id = cancelled.order_id, status = %cancelled.status, "order cancelled");

    let jane = app
        .customers()
        .update_email(CustomerId::new(2)?, "jane.new@example.com")?;
    info!(customer_id = jane.id, email = %jane.email, "email updated");

    let stats = app.statistics();
    info!(
        products = stats.total_products,
        customers = stats.total_customers,
        orders = stats.total_orders,
        active = stats.active_orders,
        cancelled = stats.cancelled_orders,
        revenue = stats.total_revenue,
        "final statistics"
    );

    Ok(())
}
