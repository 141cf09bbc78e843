//! Async seam for fetching vendor data.

use crate::error::CommerceError;
use crate::ids::VendorId;
use crate::vendors::{Vendor, VendorListing};
use async_trait::async_trait;

/// Read-only access to the external vendor dataset.
///
/// Backed by an in-memory store in development and a remote table in
/// production; the matcher never needs to know which.
#[async_trait]
pub trait VendorSource: Send + Sync {
    /// Fetch all known vendors.
    async fn list_vendors(&self) -> Result<Vec<Vendor>, CommerceError>;

    /// Fetch listings belonging to the given vendors.
    async fn listings_for(
        &self,
        vendor_ids: &[VendorId],
    ) -> Result<Vec<VendorListing>, CommerceError>;
}
