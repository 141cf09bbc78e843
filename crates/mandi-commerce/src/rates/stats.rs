//! Rate trends and summary statistics for the products view.

use crate::catalog::CategoryFilter;
use crate::ids::ListingId;
use crate::money::Rupees;
use crate::rates::MandiListing;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Direction of the most recent rate movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RateTrend {
    Up,
    Down,
    #[default]
    NoChange,
}

/// Recorded rate history per listing, oldest first.
///
/// Only the two most recent entries matter for trend derivation; listings
/// with no history, or a single recorded price, show no change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateHistory {
    entries: HashMap<ListingId, Vec<Rupees>>,
}

impl RateHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recorded price for a listing.
    pub fn record(&mut self, listing_id: ListingId, price: Rupees) {
        self.entries.entry(listing_id).or_default().push(price);
    }

    /// Trend from the two most recent recorded prices.
    pub fn trend(&self, listing_id: &ListingId) -> RateTrend {
        let Some(prices) = self.entries.get(listing_id) else {
            return RateTrend::NoChange;
        };
        let n = prices.len();
        if n < 2 {
            return RateTrend::NoChange;
        }
        let (previous, latest) = (prices[n - 2], prices[n - 1]);
        if latest > previous {
            RateTrend::Up
        } else if latest < previous {
            RateTrend::Down
        } else {
            RateTrend::NoChange
        }
    }

    /// Signed change between the two most recent recorded prices.
    pub fn change(&self, listing_id: &ListingId) -> i64 {
        let Some(prices) = self.entries.get(listing_id) else {
            return 0;
        };
        let n = prices.len();
        if n < 2 {
            return 0;
        }
        prices[n - 1].amount() - prices[n - 2].amount()
    }
}

/// Summary counters shown above the rate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RateStats {
    pub total: usize,
    pub price_up: usize,
    pub price_down: usize,
}

impl RateStats {
    /// Compute stats over a listing set joined with its rate history.
    pub fn compute(listings: &[&MandiListing], history: &RateHistory) -> Self {
        let mut stats = RateStats {
            total: listings.len(),
            ..Default::default()
        };
        for listing in listings {
            match history.trend(&listing.id) {
                RateTrend::Up => stats.price_up += 1,
                RateTrend::Down => stats.price_down += 1,
                RateTrend::NoChange => {}
            }
        }
        stats
    }
}

/// Filter mandi listings by search substring and category, preserving
/// input order.
pub fn filter_listings<'a>(
    listings: &'a [MandiListing],
    search: &str,
    category: CategoryFilter,
) -> Vec<&'a MandiListing> {
    let query = search.trim().to_lowercase();
    listings
        .iter()
        .filter(|l| category.allows(l.category))
        .filter(|l| query.is_empty() || l.name.to_lowercase().contains(&query))
        .collect()
}
