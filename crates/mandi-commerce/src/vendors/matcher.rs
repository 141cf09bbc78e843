//! Proximity-based vendor price matching.

use crate::catalog::Product;
use crate::geo::{city_coordinates, distance_km};
use crate::money::Rupees;
use crate::vendors::{normalize_name, VendorSource};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Default proximity radius for vendor matching.
const DEFAULT_MAX_DISTANCE_KM: f64 = 100.0;

/// A catalog product aligned with the average nearby vendor price.
/// Ephemeral; recomputed on each load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceComparison {
    pub product: Product,
    pub vendor_price: Option<Rupees>,
}

impl PriceComparison {
    /// How much more the retail price charges over the vendor average.
    /// Negative means the catalog is cheaper.
    pub fn premium(&self) -> Option<i64> {
        self.vendor_price
            .map(|vp| self.product.price.amount() - vp.amount())
    }
}

/// Joins catalog products against vendor listings filtered by geographic
/// proximity.
///
/// Every failure here degrades to an empty result: an unknown location, an
/// empty proximity set, or an upstream fetch error are all logged and
/// reported as "no comparison available" rather than surfaced to the UI.
pub struct PriceMatcher<S> {
    source: S,
    max_distance_km: f64,
}

impl<S: VendorSource> PriceMatcher<S> {
    /// Create a matcher with the default 100 km radius.
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
        }
    }

    /// Override the proximity radius.
    pub fn with_max_distance(mut self, km: f64) -> Self {
        self.max_distance_km = km;
        self
    }

    /// Average in-stock vendor price per normalized product name, from
    /// vendors within range of the named location.
    pub async fn vendor_prices_near(&self, location: &str) -> HashMap<String, Rupees> {
        let Some(user) = city_coordinates(location) else {
            warn!(location, "unknown location for vendor matching");
            return HashMap::new();
        };

        let vendors = match self.source.list_vendors().await {
            Ok(vendors) => vendors,
            Err(e) => {
                warn!(error = %e, "vendor fetch failed; treating as no vendors");
                return HashMap::new();
            }
        };

        let nearby: Vec<_> = vendors
            .iter()
            .filter(|vendor| {
                let Some(city) = vendor.city() else {
                    debug!(vendor = %vendor.id, "vendor has no resolvable city; excluded");
                    return false;
                };
                let Some(coords) = city_coordinates(&city) else {
                    debug!(vendor = %vendor.id, %city, "no coordinates for vendor city; excluded");
                    return false;
                };
                let d = distance_km(user, coords);
                d.is_finite() && d <= self.max_distance_km
            })
            .map(|vendor| vendor.id.clone())
            .collect();

        if nearby.is_empty() {
            debug!(location, "no vendors within range");
            return HashMap::new();
        }

        let listings = match self.source.listings_for(&nearby).await {
            Ok(listings) => listings,
            Err(e) => {
                warn!(error = %e, "listing fetch failed; treating as no vendors");
                return HashMap::new();
            }
        };

        // Group in-stock listing prices by normalized name.
        let mut grouped: HashMap<String, Vec<i64>> = HashMap::new();
        for listing in listings {
            if !listing.stock_status.is_in_stock() {
                continue;
            }
            let key = normalize_name(&listing.name);
            if key.is_empty() {
                continue;
            }
            grouped.entry(key).or_default().push(listing.price.amount());
        }

        grouped
            .into_iter()
            .map(|(key, prices)| {
                let mean = prices.iter().sum::<i64>() as f64 / prices.len() as f64;
                (key, Rupees::from_f64(mean))
            })
            .collect()
    }

    /// Align catalog products with nearby vendor averages.
    ///
    /// Output preserves catalog iteration order and omits products with no
    /// matching vendor listing; this is a filter, not a left-join.
    pub async fn matched_prices(
        &self,
        location: &str,
        products: &[Product],
    ) -> Vec<PriceComparison> {
        let averages = self.vendor_prices_near(location).await;
        if averages.is_empty() {
            return Vec::new();
        }

        products
            .iter()
            .filter_map(|product| {
                averages
                    .get(&normalize_name(&product.name))
                    .map(|&avg| PriceComparison {
                        product: product.clone(),
                        vendor_price: Some(avg),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::error::CommerceError;
    use crate::ids::VendorId;
    use crate::vendors::{StockStatus, Vendor, VendorListing, VendorSource};
    use async_trait::async_trait;

    struct FakeSource {
        vendors: Vec<Vendor>,
        listings: Vec<VendorListing>,
        fail: bool,
    }

    #[async_trait]
    impl VendorSource for FakeSource {
        async fn list_vendors(&self) -> Result<Vec<Vendor>, CommerceError> {
            if self.fail {
                return Err(CommerceError::Store("connection refused".into()));
            }
            Ok(self.vendors.clone())
        }

        async fn listings_for(
            &self,
            vendor_ids: &[VendorId],
        ) -> Result<Vec<VendorListing>, CommerceError> {
            if self.fail {
                return Err(CommerceError::Store("connection refused".into()));
            }
            Ok(self
                .listings
                .iter()
                .filter(|l| vendor_ids.contains(&l.vendor_id))
                .cloned()
                .collect())
        }
    }

    fn amritsar_source() -> FakeSource {
        FakeSource {
            vendors: vec![
                Vendor::legacy("amritsarvendor1"),
                Vendor::legacy("amritsarvendor2"),
                // Jaipur is far outside the 100 km radius of Amritsar.
                Vendor::new("jaipurvendor1", "Jaipur"),
            ],
            listings: vec![
                VendorListing::new("amritsarvendor1", "Fresh Onion", Rupees(20)),
                VendorListing::new("amritsarvendor2", "Fresh Onion", Rupees(24)),
                VendorListing::new("jaipurvendor1", "Fresh Onion", Rupees(99)),
            ],
            fail: false,
        }
    }

    #[tokio::test]
    async fn test_averages_nearby_vendor_prices() {
        let matcher = PriceMatcher::new(amritsar_source());
        let prices = matcher.vendor_prices_near("amritsar").await;
        // (20 + 24) / 2 = 22; the Jaipur listing is out of range.
        assert_eq!(prices.get("onion"), Some(&Rupees(22)));
    }

    #[tokio::test]
    async fn test_unknown_location_yields_empty() {
        let matcher = PriceMatcher::new(amritsar_source());
        assert!(matcher.vendor_prices_near("atlantis").await.is_empty());
    }

    #[tokio::test]
    async fn test_no_vendors_in_range_yields_empty() {
        // Mumbai has no vendors within 100 km in this fixture.
        let matcher = PriceMatcher::new(amritsar_source());
        assert!(matcher.vendor_prices_near("mumbai").await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty() {
        let mut source = amritsar_source();
        source.fail = true;
        let matcher = PriceMatcher::new(source);
        assert!(matcher.vendor_prices_near("amritsar").await.is_empty());

        let products = vec![Product::new("Onions", Category::Vegetable, Rupees(30), 45)];
        assert!(matcher.matched_prices("amritsar", &products).await.is_empty());
    }

    #[tokio::test]
    async fn test_out_of_stock_listings_ignored() {
        let mut source = amritsar_source();
        source.listings[1].stock_status = StockStatus::OutOfStock;
        let matcher = PriceMatcher::new(source);
        let prices = matcher.vendor_prices_near("amritsar").await;
        assert_eq!(prices.get("onion"), Some(&Rupees(20)));
    }

    #[tokio::test]
    async fn test_matched_prices_filters_and_preserves_order() {
        let matcher = PriceMatcher::new(amritsar_source());
        let products = vec![
            Product::new("Fresh Tomatoes", Category::Vegetable, Rupees(40), 50),
            Product::new("Onion", Category::Vegetable, Rupees(30), 45),
        ];
        let matched = matcher.matched_prices("amritsar", &products).await;
        // Tomatoes have no vendor listing and are omitted, not padded.
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].product.name, "Onion");
        assert_eq!(matched[0].vendor_price, Some(Rupees(22)));
        assert_eq!(matched[0].premium(), Some(8));
    }
}
