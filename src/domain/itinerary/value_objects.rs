use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sequence::Positioned;

// ============================================================================
// Itinerary Value Objects
// ============================================================================

/// Lifecycle status of an itinerary. Carried opaquely by the core and echoed
/// back to the backend on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItineraryStatus {
    Draft,
    Quoted,
    Booked,
    Completed,
    Cancelled,
}

/// Discriminant for what kind of entry a scheduled item is. Wire names match
/// the backend's discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    LibraryActivity,
    CustomActivity,
    Logistics,
    Note,
}

/// Direction for a one-step nudge within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Payload for non-library entries (custom activities, logistics, notes).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CustomActivity {
    pub title: String,
    pub icon: Option<String>,
    pub description: Option<String>,
}

/// Optional scheduled time window within the day.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    pub start_time: NaiveTime,
    pub end_time: Option<NaiveTime>,
}

/// One scheduled entry within a day.
///
/// `display_order` is 0-based and must equal the item's index within its day
/// after every mutation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActivityItem {
    pub id: Uuid,
    pub item_type: ItemType,
    pub library_activity_id: Option<Uuid>,
    pub custom: Option<CustomActivity>,
    pub display_order: usize,
    pub time_window: Option<TimeWindow>,
    pub price_per_person: Option<f64>,
    pub price_locked: bool,
}

impl ActivityItem {
    /// Entry referencing an activity from the agency's shared library.
    pub fn library(library_activity_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_type: ItemType::LibraryActivity,
            library_activity_id: Some(library_activity_id),
            custom: None,
            display_order: 0,
            time_window: None,
            price_per_person: None,
            price_locked: false,
        }
    }

    /// One-off entry (custom activity, logistics, or note) with its own payload.
    pub fn custom(item_type: ItemType, payload: CustomActivity) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_type,
            library_activity_id: None,
            custom: Some(payload),
            display_order: 0,
            time_window: None,
            price_per_person: None,
            price_locked: false,
        }
    }
}

impl Positioned for ActivityItem {
    fn position(&self) -> usize {
        self.display_order
    }

    fn set_position(&mut self, position: usize) {
        self.display_order = position;
    }
}

/// One calendar day of an itinerary.
///
/// `day_number` is 1-based and must equal index+1 at all times; `actual_date`
/// is derived from the trip start date and the day's index.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Day {
    pub id: Uuid,
    pub day_number: usize,
    pub actual_date: NaiveDate,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub activities: Vec<ActivityItem>,
}

impl Day {
    pub fn new(day_number: usize, actual_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            day_number,
            actual_date,
            title: None,
            notes: None,
            activities: Vec::new(),
        }
    }

    /// The auto-generated label for a day at the given 1-based number.
    pub fn default_title(day_number: usize) -> String {
        format!("Day {}", day_number)
    }

    /// True if the stored title is exactly the auto-generated label for
    /// `day_number`. A `None` title is not "default"; it was never generated.
    pub fn has_default_title(&self, day_number: usize) -> bool {
        self.title.as_deref() == Some(Self::default_title(day_number).as_str())
    }
}

impl Positioned for Day {
    // day_number is 1-based; the sequence primitive works in indices.
    fn position(&self) -> usize {
        self.day_number.saturating_sub(1)
    }

    fn set_position(&mut self, position: usize) {
        self.day_number = position + 1;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ItemType::LibraryActivity).unwrap(),
            "\"LIBRARY_ACTIVITY\""
        );
        assert_eq!(
            serde_json::to_string(&ItemType::CustomActivity).unwrap(),
            "\"CUSTOM_ACTIVITY\""
        );
        assert_eq!(
            serde_json::to_string(&ItemType::Logistics).unwrap(),
            "\"LOGISTICS\""
        );
        assert_eq!(serde_json::to_string(&ItemType::Note).unwrap(), "\"NOTE\"");
    }

    #[test]
    fn test_item_type_round_trip() {
        for item_type in [
            ItemType::LibraryActivity,
            ItemType::CustomActivity,
            ItemType::Logistics,
            ItemType::Note,
        ] {
            let json = serde_json::to_string(&item_type).unwrap();
            let back: ItemType = serde_json::from_str(&json).unwrap();
            assert_eq!(item_type, back);
        }
    }

    #[test]
    fn test_library_item_carries_reference() {
        let library_id = Uuid::new_v4();
        let item = ActivityItem::library(library_id);

        assert_eq!(item.item_type, ItemType::LibraryActivity);
        assert_eq!(item.library_activity_id, Some(library_id));
        assert!(item.custom.is_none());
    }

    #[test]
    fn test_custom_item_carries_payload() {
        let item = ActivityItem::custom(
            ItemType::Logistics,
            CustomActivity {
                title: "Airport transfer".to_string(),
                icon: Some("bus".to_string()),
                description: None,
            },
        );

        assert_eq!(item.item_type, ItemType::Logistics);
        assert!(item.library_activity_id.is_none());
        assert_eq!(item.custom.as_ref().unwrap().title, "Airport transfer");
    }

    #[test]
    fn test_day_position_maps_one_based_number() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut day = Day::new(3, date);

        assert_eq!(day.position(), 2);
        day.set_position(0);
        assert_eq!(day.day_number, 1);
    }

    #[test]
    fn test_default_title_detection() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut day = Day::new(2, date);

        assert!(!day.has_default_title(2)); // no title stored at all

        day.title = Some("Day 2".to_string());
        assert!(day.has_default_title(2));
        assert!(!day.has_default_title(1));

        day.title = Some("Sunset Excursion".to_string());
        assert!(!day.has_default_title(2));
    }

    #[test]
    fn test_activity_item_serialization() {
        let item = ActivityItem {
            id: Uuid::new_v4(),
            item_type: ItemType::CustomActivity,
            library_activity_id: None,
            custom: Some(CustomActivity {
                title: "Snorkeling".to_string(),
                icon: None,
                description: Some("Reef tour".to_string()),
            }),
            display_order: 1,
            time_window: Some(TimeWindow {
                start_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
                end_time: Some(NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
            }),
            price_per_person: Some(75.0),
            price_locked: true,
        };

        let json = serde_json::to_string(&item).unwrap();
        let back: ActivityItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }
}
