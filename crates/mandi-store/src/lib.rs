//! Async data-access layer for MandiKharidari.
//!
//! Exposes the narrow CRUD contract the domain logic consumes:
//!
//! - [`ProductStore`] / [`OrderStore`] traits with list/create/update/delete
//!   and polling [`Subscription`]s
//! - An in-memory backend for development, seeded with fixture data
//! - [`StoreConfig`] to select the backend from the environment
//! - A bounded [`RetryPolicy`] for transient backend failures
//!
//! The backing implementation may be in-memory or a remote table; the
//! contract is identical either way, so consumers never know which is
//! active.
//!
//! # Example
//!
//! ```rust,ignore
//! use mandi_store::prelude::*;
//!
//! let store = MemoryProductStore::seeded();
//! let products = store.list().await?;
//!
//! let sub = store.subscribe(Box::new(|products| {
//!     println!("catalog now has {} products", products.len());
//! }));
//! // ... later
//! sub.unsubscribe();
//! ```

mod config;
mod error;
mod memory;
mod retry;
pub mod seed;
mod stores;
mod subscription;

pub use config::{open_order_store, open_product_store, Backend, StoreConfig};
pub use error::StoreError;
pub use memory::{MemoryOrderStore, MemoryProductStore, MemoryVendorStore};
pub use retry::{with_retry, BackoffStrategy, RetryPolicy};
pub use stores::{Callback, OrderStore, ProductStore};
pub use subscription::Subscription;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Backend, Callback, MemoryOrderStore, MemoryProductStore, MemoryVendorStore, OrderStore,
        ProductStore, RetryPolicy, StoreConfig, StoreError, Subscription,
    };
}
