//! Per-mandi product rate listings.

use crate::catalog::Category;
use crate::ids::ListingId;
use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// Produce quality grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Quality {
    Premium,
    #[default]
    Standard,
    Economy,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Premium => "Premium",
            Quality::Standard => "Standard",
            Quality::Economy => "Economy",
        }
    }
}

/// A product rate as quoted at a mandi.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MandiListing {
    /// Unique listing identifier.
    pub id: ListingId,
    /// Product name.
    pub name: String,
    /// Fruit or vegetable.
    pub category: Category,
    /// Current quoted rate per kg.
    pub current_price: Rupees,
    /// Quality grade.
    pub quality: Quality,
    /// Unix timestamp of the last rate update.
    pub updated_at: i64,
}

impl MandiListing {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        current_price: Rupees,
        quality: Quality,
    ) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        Self {
            id: ListingId::generate(),
            name: name.into(),
            category,
            current_price,
            quality,
            updated_at: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() as i64)
                .unwrap_or(0),
        }
    }
}
