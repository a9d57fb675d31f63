// ============================================================================
// Itinerary Ordering Engine
// ============================================================================
//
// In-memory model and mutation algorithms for a travel agency's itinerary
// builder: one aggregate per trip, commands for every ordering intent, and a
// drag reducer that commits each logical move exactly once. Persistence is a
// boundary trait; the core only emits and consumes complete snapshots.
//
// ============================================================================

pub mod domain;
pub mod models;
pub mod sequence;
pub mod store;
