use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SeedError, SeedResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "admin" => Ok(Role::Admin),
            other => Err(SeedError::InvalidValue {
                field: "role",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Processing" => Ok(OrderStatus::Processing),
            "Shipped" => Ok(OrderStatus::Shipped),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(SeedError::InvalidValue {
                field: "order_status",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(PaymentStatus::Pending),
            "Paid" => Ok(PaymentStatus::Paid),
            "Failed" => Ok(PaymentStatus::Failed),
            "Refunded" => Ok(PaymentStatus::Refunded),
            other => Err(SeedError::InvalidValue {
                field: "payment_status",
                value: other.to_string(),
            }),
        }
    }
}

/// Street address embedded by value in orders and user address books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub label: String,
    #[serde(flatten)]
    pub postal: PostalAddress,
    pub is_default: bool,
}

/// A user ready for insertion. `password_hash` must already be hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: String,
    pub addresses: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: String,
    pub addresses: Vec<Address>,
    pub created_at: DateTime<Utc>,
}

/// Prices are integer minor units (cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price: i64,
    pub total: i64,
}

impl OrderItem {
    /// Copies the product's current name and price into a line item.
    pub fn snapshot(product: &Product, quantity: i32) -> SeedResult<Self> {
        let total = product
            .price
            .checked_mul(i64::from(quantity))
            .ok_or(SeedError::AmountOverflow { field: "total" })?;
        Ok(Self {
            product_id: product.id,
            name: product.name.clone(),
            quantity,
            price: product.price,
            total,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub method: String,
    pub status: PaymentStatus,
    pub transaction_id: String,
}

/// An order ready for insertion. Built through [`NewOrder::builder`] so that
/// `total_amount` always equals the sum of the item totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    user_id: Uuid,
    items: Vec<OrderItem>,
    shipping_address: PostalAddress,
    payment: PaymentInfo,
    order_status: OrderStatus,
    total_amount: i64,
}

impl NewOrder {
    pub fn builder(
        user_id: Uuid,
        shipping_address: PostalAddress,
        payment: PaymentInfo,
    ) -> NewOrderBuilder {
        NewOrderBuilder {
            user_id,
            items: Vec::new(),
            shipping_address,
            payment,
            order_status: OrderStatus::Pending,
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn shipping_address(&self) -> &PostalAddress {
        &self.shipping_address
    }

    pub fn payment(&self) -> &PaymentInfo {
        &self.payment
    }

    pub fn order_status(&self) -> OrderStatus {
        self.order_status
    }

    pub fn total_amount(&self) -> i64 {
        self.total_amount
    }
}

#[derive(Debug, Clone)]
pub struct NewOrderBuilder {
    user_id: Uuid,
    items: Vec<OrderItem>,
    shipping_address: PostalAddress,
    payment: PaymentInfo,
    order_status: OrderStatus,
}

impl NewOrderBuilder {
    pub fn item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = OrderItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.order_status = status;
        self
    }

    pub fn build(self) -> SeedResult<NewOrder> {
        if self.items.is_empty() {
            return Err(SeedError::EmptyOrder);
        }
        let total_amount = self
            .items
            .iter()
            .try_fold(0i64, |sum, item| sum.checked_add(item.total))
            .ok_or(SeedError::AmountOverflow {
                field: "total_amount",
            })?;
        Ok(NewOrder {
            user_id: self.user_id,
            items: self.items,
            shipping_address: self.shipping_address,
            payment: self.payment,
            order_status: self.order_status,
            total_amount,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<OrderItem>,
    pub shipping_address: PostalAddress,
    pub payment: PaymentInfo,
    pub order_status: OrderStatus,
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Attaches a storage-assigned identity to a constructed order.
    pub fn from_new(id: Uuid, order: NewOrder, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: order.user_id,
            items: order.items,
            shipping_address: order.shipping_address,
            payment: order.payment,
            order_status: order.order_status,
            total_amount: order.total_amount,
            created_at,
        }
    }
}
