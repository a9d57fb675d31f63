use super::value_objects::{ActivityItem, MoveDirection};

// ============================================================================
// Itinerary Commands - Represent user intent
// ============================================================================
//
// One variant per discrete UI intent (button click, drag commit). All indices
// are 0-based positions in the current day/activity lists.
//
// ============================================================================

#[derive(Debug, Clone)]
pub enum ItineraryCommand {
    /// Append an activity to the end of a day.
    AddActivity {
        day: usize,
        item: ActivityItem,
    },
    /// Remove the activity at `index` from a day.
    RemoveActivity {
        day: usize,
        index: usize,
    },
    /// Swap the activity at `index` with its neighbor. Nudging against the
    /// list boundary is a no-op, not an error.
    NudgeActivity {
        day: usize,
        index: usize,
        direction: MoveDirection,
    },
    /// Drag-reorder within one day: the item at `from` ends up at `to`.
    ReorderActivities {
        day: usize,
        from: usize,
        to: usize,
    },
    /// Move an activity between days. `to_index = None` means it was dropped
    /// on the day header and appends. `from_day == to_day` reorders within
    /// the day.
    TransferActivity {
        from_day: usize,
        from_index: usize,
        to_day: usize,
        to_index: Option<usize>,
    },
    /// Move the day at `from` so it ends up at `to`, renumbering and
    /// re-dating the whole sequence.
    ReorderDays {
        from: usize,
        to: usize,
    },
    SetDayTitle {
        day: usize,
        title: Option<String>,
    },
    SetDayNotes {
        day: usize,
        notes: Option<String>,
    },
}
