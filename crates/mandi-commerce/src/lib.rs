//! Grocery domain types and mandi rate logic for MandiKharidari.
//!
//! This crate provides the core types and logic for the grocery-ordering
//! platform:
//!
//! - **Catalog**: Products, categories, stock, client-side filtering
//! - **Orders**: Orders with a delivery status lifecycle
//! - **Geo**: Coordinates and great-circle distance
//! - **Vendors**: External vendor listings and proximity price matching
//! - **Rates**: The state → city → mandi → products drill-down and
//!   rate statistics
//!
//! # Example
//!
//! ```rust,ignore
//! use mandi_commerce::prelude::*;
//!
//! // Drill down to a mandi's live rates
//! let mut nav = RateNavigator::new();
//! nav.select_state("Punjab")?;
//! nav.select_city("Amritsar")?;
//! let ticket = nav.select_mandi("Amritsar Main Mandi")?;
//!
//! // Compare catalog prices against nearby vendors
//! let matcher = PriceMatcher::new(vendor_store);
//! let comparisons = matcher.matched_prices("amritsar", &products).await;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod geo;
pub mod orders;
pub mod rates;
pub mod vendors;

pub use error::CommerceError;
pub use ids::*;
pub use money::Rupees;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Rupees;

    // Catalog
    pub use crate::catalog::{filter_products, Category, CategoryFilter, NewProduct, Product, ProductPatch};

    // Orders
    pub use crate::orders::{NewOrder, Order, OrderItem, OrderStatus, OrderType, PaymentMethod};

    // Geo
    pub use crate::geo::{city_coordinates, distance_km, Coordinates};

    // Vendors
    pub use crate::vendors::{
        normalize_name, PriceComparison, PriceMatcher, StockStatus, Vendor, VendorListing,
        VendorSource,
    };

    // Rates
    pub use crate::rates::{
        filter_listings, BackStep, FetchTicket, MandiInfo, MandiListing, Quality, RateHistory,
        RateNavigator, RateStats, RateTrend, View,
    };
}
