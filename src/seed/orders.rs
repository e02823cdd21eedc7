use chrono::{DateTime, Utc};
use tracing::info;

use crate::{
    error::SeedResult,
    models::{
        NewOrder, Order, OrderItem, OrderStatus, PaymentInfo, PaymentStatus, PostalAddress,
        Product, User,
    },
    store::SeedStore,
};

pub const MAX_PRODUCTS: u64 = 2;
pub const TRANSACTION_PREFIX: &str = "SEED_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderSeedOutcome {
    Seeded(Order),
    MissingCustomer,
    MissingProducts,
}

impl OrderSeedOutcome {
    pub fn order(&self) -> Option<&Order> {
        match self {
            OrderSeedOutcome::Seeded(order) => Some(order),
            _ => None,
        }
    }
}

pub fn demo_shipping_address() -> PostalAddress {
    PostalAddress {
        street: "221B Baker Street".into(),
        city: "London".into(),
        state: "London".into(),
        postal_code: "NW16XE".into(),
        country: "UK".into(),
    }
}

/// Unique per run as long as runs are at least a millisecond apart.
pub fn transaction_id(now: DateTime<Utc>) -> String {
    format!("{TRANSACTION_PREFIX}{}", now.timestamp_millis())
}

/// One line item per product, quantity 1, paid by card and already shipped.
pub fn build_demo_order(
    customer: &User,
    products: &[Product],
    now: DateTime<Utc>,
) -> SeedResult<NewOrder> {
    let payment = PaymentInfo {
        method: "Credit Card".into(),
        status: PaymentStatus::Paid,
        transaction_id: transaction_id(now),
    };

    let items = products
        .iter()
        .map(|product| OrderItem::snapshot(product, 1))
        .collect::<SeedResult<Vec<_>>>()?;

    NewOrder::builder(customer.id, demo_shipping_address(), payment)
        .items(items)
        .status(OrderStatus::Shipped)
        .build()
}

/// Inserts one demo order for the first customer using up to two products.
///
/// Missing customers or products are a no-op, not an error.
pub async fn seed_orders<S: SeedStore>(
    store: &S,
    now: DateTime<Utc>,
) -> SeedResult<OrderSeedOutcome> {
    let customer = store.find_first_customer().await?;
    let products = store.find_products(MAX_PRODUCTS).await?;

    let Some(customer) = customer else {
        info!(reason = "no customer", "Need at least 1 customer and products to seed orders");
        return Ok(OrderSeedOutcome::MissingCustomer);
    };
    if products.is_empty() {
        info!(reason = "no products", "Need at least 1 customer and products to seed orders");
        return Ok(OrderSeedOutcome::MissingProducts);
    }

    let order = build_demo_order(&customer, &products, now)?;
    let order = store.insert_order(order).await?;
    info!(
        order_id = %order.id,
        user = %customer.email,
        total_amount = order.total_amount,
        "Seeded order"
    );

    Ok(OrderSeedOutcome::Seeded(order))
}
