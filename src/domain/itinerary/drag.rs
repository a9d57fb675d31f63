use serde::{Deserialize, Serialize};

use crate::sequence::OutOfRange;

use super::aggregate::ItineraryAggregate;
use super::commands::ItineraryCommand;
use super::errors::ItineraryError;
use super::events::ItineraryEvent;

// ============================================================================
// Drag Reducer - Discrete Drag-and-Drop Action Set
// ============================================================================
//
// Pointer events are reduced to three actions. BeginDrag and HoverTarget only
// touch the controller's transient state; CommitMove is the single action
// allowed to reach the aggregate, so each logical move reindexes exactly
// once. Hovering during drag-over never reorders anything.
//
// A drag records the aggregate epoch it began on. replace_from_server bumps
// the epoch, so a drag that survived a wholesale reset fails its commit with
// StaleAggregate instead of applying indices into the old day list.
//
// ============================================================================

/// Where the pointer is currently hovering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropTarget {
    /// An activity row: commit inserts at this position in that day.
    Activity { day: usize, index: usize },
    /// A day's tab/header: commit appends to the end of that day.
    DayHeader { day: usize },
}

/// Discrete drag intents dispatched by the UI layer.
#[derive(Debug, Clone)]
pub enum DragAction {
    BeginDrag { day: usize, index: usize },
    HoverTarget { target: DropTarget },
    CommitMove,
    CancelDrag,
}

/// Transient state of one in-flight drag. Never part of the aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub source_day: usize,
    pub source_index: usize,
    pub hover: Option<DropTarget>,
    epoch: u64,
}

/// Reducer for drag actions over one aggregate.
#[derive(Debug, Default)]
pub struct DragController {
    state: Option<DragState>,
}

impl DragController {
    pub fn new() -> Self {
        Self { state: None }
    }

    /// The in-flight drag, if any. The UI reads this to paint the drop hint.
    pub fn state(&self) -> Option<&DragState> {
        self.state.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_some()
    }

    /// Single entry point for drag actions.
    ///
    /// Only CommitMove mutates the aggregate; it dispatches exactly one
    /// command. A commit with nowhere to drop resolves to `Ok(None)`; the
    /// drag simply ends.
    pub fn reduce(
        &mut self,
        itinerary: &mut ItineraryAggregate,
        action: DragAction,
    ) -> Result<Option<ItineraryEvent>, ItineraryError> {
        match action {
            DragAction::BeginDrag { day, index } => {
                if self.state.is_some() {
                    return Err(ItineraryError::DragInProgress);
                }

                let day_count = itinerary.days.len();
                let source = itinerary.days.get(day).ok_or(ItineraryError::DayOutOfRange {
                    day,
                    len: day_count,
                })?;
                if index >= source.activities.len() {
                    return Err(OutOfRange {
                        index,
                        len: source.activities.len(),
                    }
                    .into());
                }

                self.state = Some(DragState {
                    source_day: day,
                    source_index: index,
                    hover: None,
                    epoch: itinerary.epoch,
                });
                Ok(None)
            }

            DragAction::HoverTarget { target } => {
                let state = self.state.as_mut().ok_or(ItineraryError::NoActiveDrag)?;
                state.hover = Some(target);
                Ok(None)
            }

            DragAction::CommitMove => {
                let state = self.state.take().ok_or(ItineraryError::NoActiveDrag)?;

                if state.epoch != itinerary.epoch {
                    return Err(ItineraryError::StaleAggregate {
                        drag_epoch: state.epoch,
                        current_epoch: itinerary.epoch,
                    });
                }

                let Some(target) = state.hover else {
                    // Dropped without ever hovering a target: clean cancel.
                    return Ok(None);
                };

                let command = match target {
                    DropTarget::Activity { day, index } => ItineraryCommand::TransferActivity {
                        from_day: state.source_day,
                        from_index: state.source_index,
                        to_day: day,
                        to_index: Some(index),
                    },
                    DropTarget::DayHeader { day } => ItineraryCommand::TransferActivity {
                        from_day: state.source_day,
                        from_index: state.source_index,
                        to_day: day,
                        to_index: None,
                    },
                };

                itinerary.handle_command(command)
            }

            DragAction::CancelDrag => {
                self.state = None;
                Ok(None)
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
