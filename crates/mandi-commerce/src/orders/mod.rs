//! Orders and their delivery status lifecycle.

mod order;

pub use order::{NewOrder, Order, OrderItem, OrderStatus, OrderType, PaymentMethod};
