use crate::component_hierarchy::domain::Component;
use crate::shared::Result;
use async_trait::async_trait;

/// ComponentRepository port for obtaining a vessel's flat component list
///
/// The engine treats the call as an opaque async boundary: it either yields
/// the complete record list or fails. Retrying, auth and transport details
/// belong to the implementation.
#[async_trait]
pub trait ComponentRepository: Send + Sync {
    /// Fetches every component record of a vessel, mounted and unmounted
    ///
    /// # Errors
    /// Returns an error if the source cannot be reached or its payload
    /// cannot be decoded.
    async fn fetch_by_vessel(&self, vessel_id: &str) -> Result<Vec<Component>>;
}
