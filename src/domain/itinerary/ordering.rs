use crate::sequence::{self, OutOfRange};

use super::errors::ItineraryError;
use super::value_objects::{ActivityItem, Day, MoveDirection};

// ============================================================================
// Activity Ordering Engine - Single-Day Operations
// ============================================================================
//
// All operations keep the day's `display_order` values exactly 0..n-1 in list
// order. Indexed operations reject out-of-range indices; only the boundary
// nudge is a deliberate no-op.
//
// ============================================================================

/// Append an activity to the end of the day. Returns the index it landed on.
pub fn add_activity(day: &mut Day, mut item: ActivityItem) -> usize {
    item.display_order = day.activities.len();
    day.activities.push(item);
    day.activities.len() - 1
}

/// Remove the activity at `index` and renumber the remainder to 0..n-1.
pub fn remove_activity(day: &mut Day, index: usize) -> Result<ActivityItem, ItineraryError> {
    Ok(sequence::remove_at(&mut day.activities, index)?)
}

/// Swap the activity at `index` with its neighbor in the given direction.
///
/// Returns the neighbor index the item moved to, or `None` for a nudge
/// against the list boundary (legacy no-op, not an error). Only the two
/// touched items are renumbered.
pub fn nudge_activity(
    day: &mut Day,
    index: usize,
    direction: MoveDirection,
) -> Result<Option<usize>, ItineraryError> {
    let len = day.activities.len();
    if index >= len {
        return Err(OutOfRange { index, len }.into());
    }

    let target = match direction {
        MoveDirection::Up => {
            if index == 0 {
                return Ok(None);
            }
            index - 1
        }
        MoveDirection::Down => {
            if index + 1 == len {
                return Ok(None);
            }
            index + 1
        }
    };

    day.activities.swap(index, target);
    day.activities[index].display_order = index;
    day.activities[target].display_order = target;
    Ok(Some(target))
}

/// Drag-reorder: the item at `from` is removed and reinserted so it ends up
/// at `to`, then the whole list is renumbered.
///
/// Applied exactly once, on drag end. Drag-over only moves the transient
/// drop-target hint and must never reach this function.
pub fn reorder_by_drag(day: &mut Day, from: usize, to: usize) -> Result<(), ItineraryError> {
    Ok(sequence::move_within(&mut day.activities, from, to)?)
}

// ============================================================================
// Unit Tests
// ============================================================================
