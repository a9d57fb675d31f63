use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{ItineraryDetail, ItinerarySaveRequest};

// ============================================================================
// Itinerary Repository - Boundary Contract
// ============================================================================

/// Fetch/save contract with the persistence collaborator.
///
/// Save is a full overwrite of the itinerary's day/activity structure: the
/// core always emits the complete, invariant-satisfying list and never
/// computes a diff. Retries are the implementor's concern.
#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    /// Fetch the full itinerary; the hydration source for
    /// `ItineraryAggregate::replace_from_server`.
    async fn fetch(&self, itinerary_id: Uuid) -> Result<ItineraryDetail>;

    /// Overwrite the itinerary's day/activity structure server-side.
    async fn save(&self, itinerary_id: Uuid, request: ItinerarySaveRequest) -> Result<()>;
}
