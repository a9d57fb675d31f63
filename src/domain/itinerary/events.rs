use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Itinerary Events - Applied-change notifications
// ============================================================================
//
// A successful dispatch returns the event describing what was applied, so the
// UI layer can react (scroll the moved row into view, announce the change)
// without diffing the aggregate. Events are not replayed; the aggregate
// mutates directly and these are purely outbound.
//
// ============================================================================

/// Itinerary Event - Union type for all applied changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ItineraryEvent {
    ActivityAdded(ActivityAdded),
    ActivityRemoved(ActivityRemoved),
    ActivityReordered(ActivityReordered),
    ActivityTransferred(ActivityTransferred),
    DaysReordered(DaysReordered),
    DayTitleSet(DayTitleSet),
    DayNotesSet(DayNotesSet),
}

// ============================================================================
// Individual Event Types
// ============================================================================

/// Activity appended to the end of a day.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActivityAdded {
    pub day: usize,
    pub index: usize,
    pub item_id: Uuid,
}

/// Activity removed from a day; the remainder was renumbered.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActivityRemoved {
    pub day: usize,
    pub index: usize,
    pub item_id: Uuid,
}

/// Activity moved within one day (nudge or drag-reorder).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActivityReordered {
    pub day: usize,
    pub from: usize,
    pub to: usize,
}

/// Activity moved between two days; both were renumbered.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActivityTransferred {
    pub from_day: usize,
    pub from_index: usize,
    pub to_day: usize,
    pub to_index: usize,
}

/// Day moved within the trip; numbers, dates, and default titles refreshed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DaysReordered {
    pub from: usize,
    pub to: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DayTitleSet {
    pub day: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DayNotesSet {
    pub day: usize,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tagged_encoding() {
        let event = ItineraryEvent::DaysReordered(DaysReordered { from: 2, to: 0 });

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"DaysReordered\""));
        assert!(json.contains("\"data\""));

        let back: ItineraryEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_transfer_event_round_trip() {
        let event = ItineraryEvent::ActivityTransferred(ActivityTransferred {
            from_day: 0,
            from_index: 2,
            to_day: 1,
            to_index: 0,
        });

        let json = serde_json::to_string(&event).unwrap();
        let back: ItineraryEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
