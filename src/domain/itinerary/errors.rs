use crate::sequence::OutOfRange;

// ============================================================================
// Itinerary Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ItineraryError {
    #[error("activity {0}")]
    OutOfRangeIndex(#[from] OutOfRange),

    #[error("day index {day} out of range (len {len})")]
    DayOutOfRange { day: usize, len: usize },

    #[error("cross-day move target day {day} does not exist (len {len})")]
    InvalidCrossDayTarget { day: usize, len: usize },

    #[error("drag began on epoch {drag_epoch} but aggregate is at epoch {current_epoch}")]
    StaleAggregate {
        drag_epoch: u64,
        current_epoch: u64,
    },

    #[error("no drag in progress")]
    NoActiveDrag,

    #[error("a drag is already in progress")]
    DragInProgress,
}
