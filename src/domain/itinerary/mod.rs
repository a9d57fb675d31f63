// ============================================================================
// Itinerary Domain - Day/Activity Ordering Engine
// ============================================================================
//
// This module contains ALL itinerary-specific code:
// - Value objects (Day, ActivityItem, ItemType, ...)
// - Events (applied-change notifications)
// - Commands (AddActivity, ReorderDays, TransferActivity, ...)
// - Errors (ItineraryError enum)
// - Date sequencer (actual_date derived from position)
// - Ordering engines (single-day and cross-day)
// - Aggregate (ItineraryAggregate with the dispatch entry point)
// - Drag reducer (BeginDrag / HoverTarget / CommitMove)
//
// ============================================================================

pub mod aggregate;
pub mod commands;
pub mod cross_day;
pub mod dates;
pub mod drag;
pub mod errors;
pub mod events;
pub mod ordering;
pub mod value_objects;

// Re-export for convenience
pub use aggregate::*;
pub use commands::*;
pub use drag::*;
pub use errors::*;
pub use events::*;
pub use value_objects::*;
