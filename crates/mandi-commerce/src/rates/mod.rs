//! Live mandi rates: the state → city → mandi → products drill-down and
//! per-mandi rate statistics.

pub mod directory;
mod listing;
mod navigation;
mod stats;

pub use directory::{cities_in, mandis_in, MandiInfo, INDIAN_STATES};
pub use listing::{MandiListing, Quality};
pub use navigation::{BackStep, FetchTicket, RateNavigator, View};
pub use stats::{filter_listings, RateHistory, RateStats, RateTrend};
