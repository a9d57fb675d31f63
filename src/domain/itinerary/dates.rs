use chrono::{Duration, NaiveDate};

use super::value_objects::Day;

// ============================================================================
// Date Sequencer
// ============================================================================
//
// Each day's calendar date is derived from the trip start date and the day's
// index, never from the day's previous date. Runs after every day-order
// change; activity-only mutations never touch it.
//
// ============================================================================

/// Set `actual_date = start_date + index` days for every day in the list.
pub fn resequence_dates(days: &mut [Day], start_date: NaiveDate) {
    for (index, day) in days.iter_mut().enumerate() {
        day.actual_date = start_date + Duration::days(index as i64);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
