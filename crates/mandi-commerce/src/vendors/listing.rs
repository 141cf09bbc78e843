//! Vendor and vendor listing types.

use crate::ids::{ListingId, VendorId};
use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// Listing availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn is_in_stock(&self) -> bool {
        matches!(self, StockStatus::InStock)
    }
}

/// An external price vendor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vendor {
    /// Unique vendor identifier.
    pub id: VendorId,
    /// Home city. Older records leave this unset and encode the city in
    /// the id as `<city>vendor<n>`; see [`Vendor::city`].
    pub city: Option<String>,
}

impl Vendor {
    pub fn new(id: impl Into<VendorId>, city: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            city: Some(city.into()),
        }
    }

    /// A vendor with no structured city field (legacy id convention).
    pub fn legacy(id: impl Into<VendorId>) -> Self {
        Self {
            id: id.into(),
            city: None,
        }
    }

    /// The vendor's city, lowercased. Falls back to stripping the trailing
    /// `vendor<n>` suffix from the id for legacy records; vendors whose id
    /// does not follow the convention resolve to `None` and are excluded
    /// from matching.
    pub fn city(&self) -> Option<String> {
        if let Some(city) = &self.city {
            let city = city.trim().to_lowercase();
            if !city.is_empty() {
                return Some(city);
            }
        }
        derive_city_from_id(self.id.as_str())
    }
}

/// Recover a city name from a `<city>vendor<n>` id.
fn derive_city_from_id(id: &str) -> Option<String> {
    let lower = id.trim().to_lowercase();
    let pos = lower.rfind("vendor")?;
    let digits = &lower[pos + "vendor".len()..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let city = &lower[..pos];
    if city.is_empty() {
        None
    } else {
        Some(city.to_string())
    }
}

/// A single vendor price listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VendorListing {
    /// Unique listing identifier.
    pub id: ListingId,
    /// Owning vendor.
    pub vendor_id: VendorId,
    /// Listing name as entered by the vendor.
    pub name: String,
    /// Quoted price per kg.
    pub price: Rupees,
    /// Availability.
    pub stock_status: StockStatus,
}

impl VendorListing {
    pub fn new(
        vendor_id: impl Into<VendorId>,
        name: impl Into<String>,
        price: Rupees,
    ) -> Self {
        Self {
            id: ListingId::generate(),
            vendor_id: vendor_id.into(),
            name: name.into(),
            price,
            stock_status: StockStatus::InStock,
        }
    }
}

/// Normalize a product name into a fuzzy join key.
///
/// Lowercases, strips leading "fresh" and "green" qualifier tokens, and
/// collapses whitespace. Differently-branded listings for the same produce
/// should normalize to the same key; false merges of genuinely distinct
/// items are an accepted risk of the heuristic.
pub fn normalize_name(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut words: Vec<&str> = lower.split_whitespace().collect();
    while let Some(first) = words.first() {
        if *first == "fresh" || *first == "green" {
            words.remove(0);
        } else {
            break;
        }
    }
    words.join(" ")
}
