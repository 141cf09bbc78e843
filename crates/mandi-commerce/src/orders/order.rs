//! Order types.

use crate::ids::{OrderId, ProductId, UserId};
use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation.
    #[default]
    Pending,
    /// Order confirmed by the shop.
    Confirmed,
    /// Order being packed.
    Preparing,
    /// Order handed to the delivery rider.
    OutForDelivery,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "confirmed" => Some(OrderStatus::Confirmed),
            "preparing" => Some(OrderStatus::Preparing),
            "out_for_delivery" => Some(OrderStatus::OutForDelivery),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::Preparing
        )
    }
}

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Delivery,
    Takeaway,
}

/// How the order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery.
    #[default]
    Cod,
    Online,
}

/// A line item in an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name at time of order.
    pub product_name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at time of order.
    pub price: Rupees,
    /// Sale unit, e.g. "kg".
    pub unit: String,
}

impl OrderItem {
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: i64,
        price: Rupees,
    ) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            quantity,
            price,
            unit: "kg".to_string(),
        }
    }

    /// Line total for this item.
    pub fn line_total(&self) -> Rupees {
        self.price.times(self.quantity)
    }
}

/// A customer order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Customer user ID.
    pub user_id: UserId,
    /// Delivery address as entered by the customer.
    pub location: String,
    /// Items in the order.
    pub items: Vec<OrderItem>,
    /// Total charged.
    pub total_cost: Rupees,
    /// Delivery lifecycle status.
    pub status: OrderStatus,
    /// Delivery or takeaway.
    pub order_type: OrderType,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Order {
    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line totals.
    pub fn compute_total(&self) -> Rupees {
        self.items
            .iter()
            .fold(Rupees::default(), |acc, item| acc + item.line_total())
    }

    /// Update order status. Last write wins; no transition checks beyond
    /// terminal states.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = current_timestamp();
    }

    /// Cancel the order if it has not progressed too far.
    pub fn cancel(&mut self) -> bool {
        if !self.status.can_cancel() {
            return false;
        }
        self.set_status(OrderStatus::Cancelled);
        true
    }
}

/// Fields for placing an order; the store assigns id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub user_id: UserId,
    pub location: String,
    pub items: Vec<OrderItem>,
    pub total_cost: Rupees,
    pub status: OrderStatus,
    pub order_type: OrderType,
    pub payment_method: PaymentMethod,
}

impl NewOrder {
    /// Materialize into a full order record.
    pub fn into_order(self) -> Order {
        let now = current_timestamp();
        Order {
            id: OrderId::generate(),
            user_id: self.user_id,
            location: self.location,
            items: self.items,
            total_cost: self.total_cost,
            status: self.status,
            order_type: self.order_type,
            payment_method: self.payment_method,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
