use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::itinerary::{Day, ItineraryStatus};

// ============================================================================
// Boundary Models - Persistence Collaborator Payloads
// ============================================================================
//
// The wire shapes exchanged with the out-of-scope persistence collaborator.
// Fetch supplies an ItineraryDetail; save receives an ItinerarySaveRequest
// containing the complete day list (full overwrite, no diffing).
//
// ============================================================================

/// Full itinerary as hydrated by the fetch collaborator.
///
/// The day list is expected to already satisfy the ordering invariants,
/// including `days.len() == (end_date - start_date).days + 1`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ItineraryDetail {
    pub id: Uuid,
    pub status: ItineraryStatus,
    pub currency: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<Day>,
}

/// Complete snapshot handed to the save collaborator: every day with every
/// positional field, plus status and currency.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ItinerarySaveRequest {
    pub status: ItineraryStatus,
    pub currency: String,
    pub days: Vec<Day>,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_round_trip() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let detail = ItineraryDetail {
            id: Uuid::new_v4(),
            status: ItineraryStatus::Quoted,
            currency: "USD".to_string(),
            start_date: start,
            end_date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            days: vec![Day::new(1, start)],
        };

        let json = serde_json::to_string(&detail).unwrap();
        let back: ItineraryDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(detail, back);
    }

    #[test]
    fn test_save_request_serializes_positions() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut day = Day::new(2, start);
        day.title = Some("Day 2".to_string());

        let request = ItinerarySaveRequest {
            status: ItineraryStatus::Draft,
            currency: "EUR".to_string(),
            days: vec![day],
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"day_number\":2"));
        assert!(json.contains("\"currency\":\"EUR\""));
    }
}
