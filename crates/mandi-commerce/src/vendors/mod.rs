//! External vendor listings and proximity price matching.
//!
//! Vendors are independent price sources used only for comparison; their
//! listings never enter the catalog.

mod listing;
mod matcher;
mod source;

pub use listing::{normalize_name, StockStatus, Vendor, VendorListing};
pub use matcher::{PriceComparison, PriceMatcher};
pub use source::VendorSource;
