use crate::sequence::{self, OutOfRange};

use super::errors::ItineraryError;
use super::ordering;
use super::value_objects::Day;

// ============================================================================
// Cross-Day Move Engine
// ============================================================================
//
// Moves one activity between two days as a single atomic transfer: the item
// is removed from the source (which renumbers), inserted into the target, and
// the target renumbers. Both bounds are validated before anything is removed,
// so a failed transfer leaves both days untouched.
//
// ============================================================================

/// Move the activity at `days[from_day][from_index]` into `days[to_day]`.
///
/// `to_index = None` means "dropped on the day header": append to the end.
/// `from_day == to_day` is a within-day reorder and delegates to the
/// single-day engine. Returns the index the item landed on in the target day.
pub fn transfer_activity(
    days: &mut [Day],
    from_day: usize,
    from_index: usize,
    to_day: usize,
    to_index: Option<usize>,
) -> Result<usize, ItineraryError> {
    let len = days.len();
    if from_day >= len {
        return Err(ItineraryError::DayOutOfRange { day: from_day, len });
    }
    if to_day >= len {
        return Err(ItineraryError::InvalidCrossDayTarget { day: to_day, len });
    }

    if from_day == to_day {
        let day = &mut days[from_day];
        let last = day.activities.len().saturating_sub(1);
        let to = to_index.unwrap_or(last);
        ordering::reorder_by_drag(day, from_index, to)?;
        return Ok(to);
    }

    // Split so both days can be borrowed mutably at once.
    let (source, target) = if from_day < to_day {
        let (left, right) = days.split_at_mut(to_day);
        (&mut left[from_day], &mut right[0])
    } else {
        let (left, right) = days.split_at_mut(from_day);
        (&mut right[0], &mut left[to_day])
    };

    // Validate the insert slot before removing anything, so the transfer
    // either fully completes or does nothing.
    let at = to_index.unwrap_or(target.activities.len());
    if at > target.activities.len() {
        return Err(OutOfRange {
            index: at,
            len: target.activities.len(),
        }
        .into());
    }

    let item = sequence::remove_at(&mut source.activities, from_index)?;
    sequence::insert(&mut target.activities, item, at)?;
    Ok(at)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::itinerary::value_objects::{ActivityItem, CustomActivity, ItemType};
    use chrono::NaiveDate;

    fn note(title: &str) -> ActivityItem {
        ActivityItem::custom(
            ItemType::Note,
            CustomActivity {
                title: title.to_string(),
                icon: None,
                description: None,
            },
        )
    }

    fn day(number: usize, titles: &[&str]) -> Day {
        let date = NaiveDate::from_ymd_opt(2025, 6, number as u32).unwrap();
        let mut day = Day::new(number, date);
        for title in titles {
            ordering::add_activity(&mut day, note(title));
        }
        day
    }

    fn titles(day: &Day) -> Vec<String> {
        day.activities
            .iter()
            .map(|a| a.custom.as_ref().unwrap().title.clone())
            .collect()
    }

    fn orders(day: &Day) -> Vec<usize> {
        day.activities.iter().map(|a| a.display_order).collect()
    }

    #[test]
    fn test_transfer_into_middle_of_target() {
        // day1[0] -> day2 at index 1, where day2 = [X,Y].
        let mut days = vec![day(1, &["A", "B"]), day(2, &["X", "Y"])];

        let landed = transfer_activity(&mut days, 0, 0, 1, Some(1)).unwrap();

        assert_eq!(landed, 1);
        assert_eq!(titles(&days[0]), vec!["B"]);
        assert_eq!(orders(&days[0]), vec![0]);
        assert_eq!(titles(&days[1]), vec!["X", "A", "Y"]);
        assert_eq!(orders(&days[1]), vec![0, 1, 2]);
    }

    #[test]
    fn test_transfer_onto_day_header_appends() {
        let mut days = vec![day(1, &["A", "B"]), day(2, &["X"])];

        let landed = transfer_activity(&mut days, 0, 1, 1, None).unwrap();

        assert_eq!(landed, 1);
        assert_eq!(titles(&days[0]), vec!["A"]);
        assert_eq!(titles(&days[1]), vec!["X", "B"]);
        assert_eq!(orders(&days[1]), vec![0, 1]);
    }

    #[test]
    fn test_transfer_backwards_between_days() {
        let mut days = vec![day(1, &["A"]), day(2, &["X", "Y", "Z"])];

        let landed = transfer_activity(&mut days, 1, 2, 0, Some(0)).unwrap();

        assert_eq!(landed, 0);
        assert_eq!(titles(&days[0]), vec!["Z", "A"]);
        assert_eq!(orders(&days[0]), vec![0, 1]);
        assert_eq!(titles(&days[1]), vec!["X", "Y"]);
        assert_eq!(orders(&days[1]), vec![0, 1]);
    }

    #[test]
    fn test_same_day_delegates_to_reorder() {
        let mut days = vec![day(1, &["A", "B", "C"])];

        transfer_activity(&mut days, 0, 0, 0, Some(2)).unwrap();

        assert_eq!(titles(&days[0]), vec!["B", "C", "A"]);
        assert_eq!(orders(&days[0]), vec![0, 1, 2]);
    }

    #[test]
    fn test_same_day_header_drop_moves_to_end() {
        let mut days = vec![day(1, &["A", "B", "C"])];

        transfer_activity(&mut days, 0, 0, 0, None).unwrap();

        assert_eq!(titles(&days[0]), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_missing_target_day_is_invalid_cross_day_target() {
        let mut days = vec![day(1, &["A"]), day(2, &[])];

        let err = transfer_activity(&mut days, 0, 0, 5, None).unwrap_err();

        assert_eq!(err, ItineraryError::InvalidCrossDayTarget { day: 5, len: 2 });
        assert_eq!(titles(&days[0]), vec!["A"]);
    }

    #[test]
    fn test_failed_transfer_leaves_both_days_untouched() {
        let mut days = vec![day(1, &["A", "B"]), day(2, &["X"])];

        // Target slot past the end of day 2.
        let err = transfer_activity(&mut days, 0, 0, 1, Some(5)).unwrap_err();
        assert!(matches!(err, ItineraryError::OutOfRangeIndex(_)));

        // Source index past the end of day 1.
        let err = transfer_activity(&mut days, 0, 7, 1, Some(0)).unwrap_err();
        assert!(matches!(err, ItineraryError::OutOfRangeIndex(_)));

        assert_eq!(titles(&days[0]), vec!["A", "B"]);
        assert_eq!(titles(&days[1]), vec!["X"]);
    }

    #[test]
    fn test_round_trip_restores_both_days() {
        // Move A from day 1 into day 2, then back to its original slot.
        let mut days = vec![day(1, &["A", "B", "C"]), day(2, &["X", "Y"])];
        let before = days.clone();

        transfer_activity(&mut days, 0, 0, 1, Some(1)).unwrap();
        transfer_activity(&mut days, 1, 1, 0, Some(0)).unwrap();

        assert_eq!(days, before);
    }
}
