use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ItineraryDetail, ItinerarySaveRequest};
use crate::sequence;

use super::commands::ItineraryCommand;
use super::cross_day;
use super::dates;
use super::errors::ItineraryError;
use super::events::*;
use super::ordering;
use super::value_objects::{Day, ItineraryStatus};

// ============================================================================
// Itinerary Aggregate - Domain Logic
// ============================================================================
//
// Single source of truth for a trip's day and activity ordering. Exclusively
// owned by its caller; every mutation goes through handle_command so the
// ordering invariants hold after each dispatch:
//
// - day_number values are exactly 1..n in list order
// - each day's display_order values are exactly 0..n-1 in list order
// - actual_date of day i equals start_date + i days
//
// The aggregate has two states, clean and dirty. Every applied mutation is a
// clean->dirty or dirty->dirty transition; mark_saved (the save
// collaborator's acknowledgement) is the only dirty->clean transition.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryAggregate {
    // Identity
    pub id: Uuid,

    // Trip frame
    pub status: ItineraryStatus,
    pub currency: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<Day>,

    // Editor state
    pub focused_day: usize,
    pub dirty: bool,

    // Bumped only by replace_from_server; in-flight drags check it on commit.
    pub epoch: u64,

    // Audit Trail
    pub updated_at: DateTime<Utc>,
}

impl ItineraryAggregate {
    /// Build an aggregate from the fetch collaborator's payload.
    ///
    /// The payload is trusted to satisfy the ordering invariants; the fetch
    /// collaborator pre-establishes them and the core only maintains them.
    pub fn hydrate(detail: ItineraryDetail) -> Self {
        Self {
            id: detail.id,
            status: detail.status,
            currency: detail.currency,
            start_date: detail.start_date,
            end_date: detail.end_date,
            days: detail.days,
            focused_day: 0,
            dirty: false,
            epoch: 0,
            updated_at: Utc::now(),
        }
    }

    /// Wholesale reset from a fresh server copy. Clears the dirty flag and
    /// bumps the epoch so any in-flight drag fails its commit.
    pub fn replace_from_server(&mut self, detail: ItineraryDetail) {
        let epoch = self.epoch + 1;
        *self = Self::hydrate(detail);
        self.epoch = epoch;

        tracing::debug!(
            itinerary_id = %self.id,
            epoch = self.epoch,
            day_count = self.days.len(),
            "replaced itinerary from server"
        );
    }

    /// The save collaborator acknowledged a successful save.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Point the editor at a day. Not a mutation; never dirties.
    pub fn focus_day(&mut self, day: usize) -> Result<(), ItineraryError> {
        if day >= self.days.len() {
            return Err(ItineraryError::DayOutOfRange {
                day,
                len: self.days.len(),
            });
        }
        self.focused_day = day;
        Ok(())
    }

    /// Complete snapshot for the save collaborator: full day list with every
    /// positional field, plus status and currency. No diffing.
    pub fn save_request(&self) -> ItinerarySaveRequest {
        ItinerarySaveRequest {
            status: self.status.clone(),
            currency: self.currency.clone(),
            days: self.days.clone(),
        }
    }

    /// Handle a command and apply it (business logic).
    ///
    /// Returns the applied-change event, or `None` for the two deliberate
    /// no-ops (boundary nudge, move-to-same-position), which leave the
    /// aggregate untouched, including the dirty flag.
    pub fn handle_command(
        &mut self,
        command: ItineraryCommand,
    ) -> Result<Option<ItineraryEvent>, ItineraryError> {
        let event = match command {
            ItineraryCommand::AddActivity { day, item } => {
                let item_id = item.id;
                let target = self.day_mut(day)?;
                let index = ordering::add_activity(target, item);
                Some(ItineraryEvent::ActivityAdded(ActivityAdded {
                    day,
                    index,
                    item_id,
                }))
            }

            ItineraryCommand::RemoveActivity { day, index } => {
                let target = self.day_mut(day)?;
                let removed = ordering::remove_activity(target, index)?;
                Some(ItineraryEvent::ActivityRemoved(ActivityRemoved {
                    day,
                    index,
                    item_id: removed.id,
                }))
            }

            ItineraryCommand::NudgeActivity {
                day,
                index,
                direction,
            } => {
                let target = self.day_mut(day)?;
                ordering::nudge_activity(target, index, direction)?.map(|to| {
                    ItineraryEvent::ActivityReordered(ActivityReordered {
                        day,
                        from: index,
                        to,
                    })
                })
            }

            ItineraryCommand::ReorderActivities { day, from, to } => {
                let target = self.day_mut(day)?;
                ordering::reorder_by_drag(target, from, to)?;
                if from == to {
                    None
                } else {
                    Some(ItineraryEvent::ActivityReordered(ActivityReordered {
                        day,
                        from,
                        to,
                    }))
                }
            }

            ItineraryCommand::TransferActivity {
                from_day,
                from_index,
                to_day,
                to_index,
            } => {
                let landed = cross_day::transfer_activity(
                    &mut self.days,
                    from_day,
                    from_index,
                    to_day,
                    to_index,
                )?;
                if from_day == to_day {
                    if landed == from_index {
                        None
                    } else {
                        Some(ItineraryEvent::ActivityReordered(ActivityReordered {
                            day: from_day,
                            from: from_index,
                            to: landed,
                        }))
                    }
                } else {
                    Some(ItineraryEvent::ActivityTransferred(ActivityTransferred {
                        from_day,
                        from_index,
                        to_day,
                        to_index: landed,
                    }))
                }
            }

            ItineraryCommand::ReorderDays { from, to } => self.reorder_days(from, to)?,

            ItineraryCommand::SetDayTitle { day, title } => {
                let target = self.day_mut(day)?;
                if target.title == title {
                    None
                } else {
                    target.title = title;
                    Some(ItineraryEvent::DayTitleSet(DayTitleSet { day }))
                }
            }

            ItineraryCommand::SetDayNotes { day, notes } => {
                let target = self.day_mut(day)?;
                if target.notes == notes {
                    None
                } else {
                    target.notes = notes;
                    Some(ItineraryEvent::DayNotesSet(DayNotesSet { day }))
                }
            }
        };

        if let Some(ref applied) = event {
            self.dirty = true;
            self.updated_at = Utc::now();

            tracing::debug!(
                itinerary_id = %self.id,
                event = ?applied,
                "applied itinerary mutation"
            );
        }

        Ok(event)
    }

    /// Move a day, renumber 1..n, re-label still-default titles, re-derive
    /// dates, and keep the focused index on the same logical day.
    fn reorder_days(
        &mut self,
        from: usize,
        to: usize,
    ) -> Result<Option<ItineraryEvent>, ItineraryError> {
        let len = self.days.len();
        if from >= len {
            return Err(ItineraryError::DayOutOfRange { day: from, len });
        }
        if to >= len {
            return Err(ItineraryError::DayOutOfRange { day: to, len });
        }
        if from == to {
            return Ok(None);
        }

        let day = self.days.remove(from);
        self.days.insert(to, day);

        // Re-label before renumbering: each day_number field still holds the
        // old number, so "was this title still the default?" checks against
        // the label the day carried into the move.
        for (index, day) in self.days.iter_mut().enumerate() {
            if day.has_default_title(day.day_number) {
                day.title = Some(Day::default_title(index + 1));
            }
        }

        sequence::reindex(&mut self.days);
        dates::resequence_dates(&mut self.days, self.start_date);
        self.focused_day = shift_focus(self.focused_day, from, to);

        Ok(Some(ItineraryEvent::DaysReordered(DaysReordered {
            from,
            to,
        })))
    }

    fn day_mut(&mut self, day: usize) -> Result<&mut Day, ItineraryError> {
        let len = self.days.len();
        self.days
            .get_mut(day)
            .ok_or(ItineraryError::DayOutOfRange { day, len })
    }
}

/// Where does the focused index land after the day at `from` moved to `to`?
/// The focused day keeps pointing at the same logical day.
fn shift_focus(focused: usize, from: usize, to: usize) -> usize {
    if focused == from {
        to
    } else if from < focused && focused <= to {
        focused - 1
    } else if to <= focused && focused < from {
        focused + 1
    } else {
        focused
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
