use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{ItineraryDetail, ItinerarySaveRequest};

use super::repository::ItineraryRepository;

// ============================================================================
// In-Memory Itinerary Store
// ============================================================================
//
// Map-backed repository used by the demo binary and the integration tests.
// Mimics the backend's behavior at the boundary: fetch returns the full
// itinerary, save overwrites the day/activity structure wholesale.
//
// ============================================================================

#[derive(Default)]
pub struct InMemoryItineraryStore {
    itineraries: RwLock<HashMap<Uuid, ItineraryDetail>>,
}

impl InMemoryItineraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an itinerary into the store, as if another screen had created it.
    pub async fn seed(&self, detail: ItineraryDetail) {
        self.itineraries.write().await.insert(detail.id, detail);
    }
}

#[async_trait]
impl ItineraryRepository for InMemoryItineraryStore {
    async fn fetch(&self, itinerary_id: Uuid) -> Result<ItineraryDetail> {
        let itineraries = self.itineraries.read().await;
        let Some(detail) = itineraries.get(&itinerary_id) else {
            bail!("Itinerary not found: {}", itinerary_id);
        };

        tracing::debug!(
            itinerary_id = %itinerary_id,
            day_count = detail.days.len(),
            "fetched itinerary"
        );
        Ok(detail.clone())
    }

    async fn save(&self, itinerary_id: Uuid, request: ItinerarySaveRequest) -> Result<()> {
        let mut itineraries = self.itineraries.write().await;
        let Some(detail) = itineraries.get_mut(&itinerary_id) else {
            bail!("Itinerary not found: {}", itinerary_id);
        };

        detail.status = request.status;
        detail.currency = request.currency;
        detail.days = request.days;

        tracing::info!(
            itinerary_id = %itinerary_id,
            day_count = detail.days.len(),
            "✅ Saved itinerary"
        );
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::itinerary::{Day, ItineraryStatus};
    use chrono::NaiveDate;

    fn detail() -> ItineraryDetail {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        ItineraryDetail {
            id: Uuid::new_v4(),
            status: ItineraryStatus::Draft,
            currency: "EUR".to_string(),
            start_date: start,
            end_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            days: vec![
                Day::new(1, start),
                Day::new(2, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()),
            ],
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_seeded_itinerary() {
        let store = InMemoryItineraryStore::new();
        let seeded = detail();
        store.seed(seeded.clone()).await;

        let fetched = store.fetch(seeded.id).await.unwrap();
        assert_eq!(fetched, seeded);
    }

    #[tokio::test]
    async fn test_fetch_unknown_id_fails() {
        let store = InMemoryItineraryStore::new();
        let err = store.fetch(Uuid::new_v4()).await.unwrap_err();
        assert!(err.to_string().contains("Itinerary not found"));
    }

    #[tokio::test]
    async fn test_save_overwrites_structure() {
        let store = InMemoryItineraryStore::new();
        let seeded = detail();
        store.seed(seeded.clone()).await;

        let mut days = seeded.days.clone();
        days.swap(0, 1);
        store
            .save(
                seeded.id,
                ItinerarySaveRequest {
                    status: ItineraryStatus::Quoted,
                    currency: "USD".to_string(),
                    days: days.clone(),
                },
            )
            .await
            .unwrap();

        let fetched = store.fetch(seeded.id).await.unwrap();
        assert_eq!(fetched.status, ItineraryStatus::Quoted);
        assert_eq!(fetched.currency, "USD");
        assert_eq!(fetched.days, days);
    }

    #[tokio::test]
    async fn test_save_unknown_id_fails() {
        let store = InMemoryItineraryStore::new();
        let err = store
            .save(
                Uuid::new_v4(),
                ItinerarySaveRequest {
                    status: ItineraryStatus::Draft,
                    currency: "EUR".to_string(),
                    days: vec![],
                },
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Itinerary not found"));
    }
}
