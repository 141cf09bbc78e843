//! Store contracts consumed by the domain layer.
//!
//! Backing implementation may be an in-memory collection (development) or
//! a remote relational table (production), selected by configuration; the
//! contract is identical either way.

use crate::error::StoreError;
use crate::subscription::Subscription;
use async_trait::async_trait;
use mandi_commerce::catalog::{NewProduct, Product, ProductPatch};
use mandi_commerce::ids::{OrderId, ProductId};
use mandi_commerce::orders::{NewOrder, Order, OrderStatus};

/// Callback receiving the full current dataset on each poll.
pub type Callback<T> = Box<dyn Fn(Vec<T>) + Send + Sync + 'static>;

/// Product catalog store.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// List all products.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Create a product; the store assigns the id and timestamps.
    async fn create(&self, data: NewProduct) -> Result<Product, StoreError>;

    /// Apply a partial update. Last write wins; no conflict detection.
    async fn update(&self, id: &ProductId, patch: ProductPatch) -> Result<Product, StoreError>;

    /// Delete a product.
    async fn delete(&self, id: &ProductId) -> Result<(), StoreError>;

    /// Subscribe to polled snapshots of the full catalog.
    fn subscribe(&self, callback: Callback<Product>) -> Subscription;
}

/// Order store.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// List all orders, newest first.
    async fn list(&self) -> Result<Vec<Order>, StoreError>;

    /// Place an order; the store assigns the id and timestamps.
    async fn create(&self, data: NewOrder) -> Result<Order, StoreError>;

    /// Update an order's delivery status.
    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), StoreError>;

    /// Subscribe to polled snapshots of all orders.
    fn subscribe(&self, callback: Callback<Order>) -> Subscription;
}
