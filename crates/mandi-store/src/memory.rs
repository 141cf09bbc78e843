//! In-memory store backend for development and tests.
//!
//! State lives behind an explicit repository instance with injected
//! storage; the backing collection is never exposed. Updates are
//! last-write-wins with no conflict detection.

use crate::error::StoreError;
use crate::seed;
use crate::stores::{Callback, OrderStore, ProductStore};
use crate::subscription::Subscription;
use async_trait::async_trait;
use mandi_commerce::catalog::{NewProduct, Product, ProductPatch};
use mandi_commerce::error::CommerceError;
use mandi_commerce::ids::{OrderId, ProductId, VendorId};
use mandi_commerce::orders::{NewOrder, Order, OrderStatus};
use mandi_commerce::vendors::{Vendor, VendorListing, VendorSource};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Default poll interval for product subscriptions.
const PRODUCT_POLL_INTERVAL: Duration = Duration::from_secs(30);
/// Default poll interval for order subscriptions.
const ORDER_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Spawn a timer task pushing full snapshots to the callback.
fn spawn_poller<T: Clone + Send + Sync + 'static>(
    data: Arc<RwLock<Vec<T>>>,
    interval: Duration,
    callback: Callback<T>,
) -> Subscription {
    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately; skip it so the callback
        // fires on the interval like a plain timer.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let snapshot = data.read().await.clone();
            callback(snapshot);
        }
    });
    Subscription::new(handle)
}

/// In-memory product catalog.
#[derive(Clone)]
pub struct MemoryProductStore {
    products: Arc<RwLock<Vec<Product>>>,
    poll_interval: Duration,
}

impl MemoryProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Create a store seeded with the development fixtures.
    pub fn seeded() -> Self {
        Self::with_products(seed::products())
    }

    /// Create a store over the given products.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
            poll_interval: PRODUCT_POLL_INTERVAL,
        }
    }

    /// Override the subscription poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn create(&self, data: NewProduct) -> Result<Product, StoreError> {
        let product = data.into_product();
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: &ProductId, patch: ProductPatch) -> Result<Product, StoreError> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("product {id}")))?;
        product.apply(patch);
        Ok(product.clone())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), StoreError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| &p.id != id);
        if products.len() == before {
            return Err(StoreError::NotFound(format!("product {id}")));
        }
        Ok(())
    }

    fn subscribe(&self, callback: Callback<Product>) -> Subscription {
        spawn_poller(self.products.clone(), self.poll_interval, callback)
    }
}

/// In-memory order store.
#[derive(Clone)]
pub struct MemoryOrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
    poll_interval: Duration,
}

impl MemoryOrderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_orders(Vec::new())
    }

    /// Create a store seeded with the development fixtures.
    pub fn seeded() -> Self {
        Self::with_orders(seed::orders())
    }

    /// Create a store over the given orders.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: Arc::new(RwLock::new(orders)),
            poll_interval: ORDER_POLL_INTERVAL,
        }
    }

    /// Override the subscription poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let mut orders = self.orders.read().await.clone();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    async fn create(&self, data: NewOrder) -> Result<Order, StoreError> {
        let order = data.into_order();
        self.orders.write().await.push(order.clone());
        Ok(order)
    }

    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), StoreError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("order {id}")))?;
        order.set_status(status);
        Ok(())
    }

    fn subscribe(&self, callback: Callback<Order>) -> Subscription {
        spawn_poller(self.orders.clone(), self.poll_interval, callback)
    }
}

/// In-memory vendor dataset, read-only to the matcher.
#[derive(Clone)]
pub struct MemoryVendorStore {
    vendors: Arc<RwLock<Vec<Vendor>>>,
    listings: Arc<RwLock<Vec<VendorListing>>>,
}

impl MemoryVendorStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }

    /// Create a store seeded with the development fixtures.
    pub fn seeded() -> Self {
        Self::with_data(seed::vendors(), seed::vendor_listings())
    }

    /// Create a store over the given vendors and listings.
    pub fn with_data(vendors: Vec<Vendor>, listings: Vec<VendorListing>) -> Self {
        Self {
            vendors: Arc::new(RwLock::new(vendors)),
            listings: Arc::new(RwLock::new(listings)),
        }
    }
}

impl Default for MemoryVendorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VendorSource for MemoryVendorStore {
    async fn list_vendors(&self) -> Result<Vec<Vendor>, CommerceError> {
        Ok(self.vendors.read().await.clone())
    }

    async fn listings_for(
        &self,
        vendor_ids: &[VendorId],
    ) -> Result<Vec<VendorListing>, CommerceError> {
        Ok(self
            .listings
            .read()
            .await
            .iter()
            .filter(|l| vendor_ids.contains(&l.vendor_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandi_commerce::catalog::Category;
    use mandi_commerce::money::Rupees;
    use mandi_commerce::orders::{OrderItem, OrderType, PaymentMethod};
    use mandi_commerce::vendors::PriceMatcher;
    use mandi_commerce::UserId;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_product_crud() {
        let store = MemoryProductStore::new();
        let created = store
            .create(NewProduct::new("Carrots", Category::Vegetable, Rupees(35), 35))
            .await
            .unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);

        let updated = store
            .update(&created.id, ProductPatch::price(Rupees(38)))
            .await
            .unwrap();
        assert_eq!(updated.price, Rupees(38));
        assert!(updated.updated_at >= updated.created_at);

        store.delete(&created.id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let store = MemoryProductStore::new();
        let missing = ProductId::new("nope");
        assert!(matches!(
            store.update(&missing, ProductPatch::stock(1)).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.delete(&missing).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_orders_listed_newest_first() {
        let mut first = seed::orders().remove(0);
        first.created_at = 100;
        let mut second = first.clone();
        second.id = OrderId::new("order_2");
        second.created_at = 200;
        let store = MemoryOrderStore::with_orders(vec![first, second]);

        let orders = store.list().await.unwrap();
        assert_eq!(orders[0].id, OrderId::new("order_2"));
    }

    #[tokio::test]
    async fn test_order_status_update() {
        let store = MemoryOrderStore::new();
        let order = store
            .create(NewOrder {
                user_id: UserId::new("user_1"),
                location: "Amritsar".to_string(),
                items: vec![OrderItem::new(
                    ProductId::new("1"),
                    "Fresh Tomatoes",
                    2,
                    Rupees(40),
                )],
                total_cost: Rupees(80),
                status: OrderStatus::Pending,
                order_type: OrderType::Delivery,
                payment_method: PaymentMethod::Cod,
            })
            .await
            .unwrap();

        store
            .update_status(&order.id, OrderStatus::Confirmed)
            .await
            .unwrap();
        let orders = store.list().await.unwrap();
        assert_eq!(orders[0].status, OrderStatus::Confirmed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscription_pushes_full_snapshots() {
        let store =
            MemoryProductStore::seeded().with_poll_interval(Duration::from_millis(100));
        let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let sub = store.subscribe(Box::new(move |products| {
            sink.lock().unwrap().push(products.len());
        }));

        tokio::time::sleep(Duration::from_millis(250)).await;
        sub.unsubscribe();

        let counts = seen.lock().unwrap().clone();
        assert!(!counts.is_empty());
        assert!(counts.iter().all(|&n| n == seed::products().len()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unsubscribe_stops_timer() {
        let store =
            MemoryProductStore::seeded().with_poll_interval(Duration::from_millis(100));
        let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let sub = store.subscribe(Box::new(move |products| {
            sink.lock().unwrap().push(products.len());
        }));
        tokio::time::sleep(Duration::from_millis(150)).await;
        sub.unsubscribe();
        let count_at_stop = seen.lock().unwrap().len();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(seen.lock().unwrap().len(), count_at_stop);
    }

    #[tokio::test]
    async fn test_seeded_price_comparison_matches_onions() {
        let matcher = PriceMatcher::new(MemoryVendorStore::seeded());
        let matched = matcher.matched_prices("amritsar", &seed::products()).await;
        // Amritsar listings quote onions at 20 and 24; mean 22.
        let onions = matched
            .iter()
            .find(|c| c.product.name == "Onions")
            .expect("onions missing from seeded comparison");
        assert_eq!(onions.vendor_price, Some(Rupees(22)));
    }

    #[tokio::test]
    async fn test_vendor_store_filters_by_vendor_id() {
        let store = MemoryVendorStore::seeded();
        let vendors = store.list_vendors().await.unwrap();
        assert!(!vendors.is_empty());

        let amritsar_ids: Vec<VendorId> = vendors
            .iter()
            .filter(|v| v.city().as_deref() == Some("amritsar"))
            .map(|v| v.id.clone())
            .collect();
        let listings = store.listings_for(&amritsar_ids).await.unwrap();
        assert!(listings.iter().all(|l| amritsar_ids.contains(&l.vendor_id)));
        assert!(!listings.is_empty());
    }
}
