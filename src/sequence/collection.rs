// ============================================================================
// Ordered Collection - Positional Sequence Primitive
// ============================================================================
//
// Both the itinerary's day list and each day's activity list are sequences
// whose elements carry their own position field (day_number, display_order).
// This module owns the one rule they share: after every insert, remove, or
// move, each remaining element's position field equals its vector index.
//
// This is GENERIC infrastructure that works with ANY positioned element.
//
// ============================================================================

/// An element that stores its own 0-based position within its sequence.
///
/// `Day` maps its 1-based `day_number` onto this; `ActivityItem` stores
/// `display_order` directly.
pub trait Positioned {
    fn position(&self) -> usize;
    fn set_position(&mut self, position: usize);
}

/// An index outside the current bounds of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index {index} out of range (len {len})")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Rewrite every element's position field to its current vector index.
pub fn reindex<T: Positioned>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_position(index);
    }
}

/// Insert `item` at `at` and reindex. `at == len` appends.
pub fn insert<T: Positioned>(items: &mut Vec<T>, item: T, at: usize) -> Result<(), OutOfRange> {
    if at > items.len() {
        return Err(OutOfRange {
            index: at,
            len: items.len(),
        });
    }

    items.insert(at, item);
    reindex(items);
    Ok(())
}

/// Remove the element at `index`, reindex the remainder, and return it.
pub fn remove_at<T: Positioned>(items: &mut Vec<T>, index: usize) -> Result<T, OutOfRange> {
    if index >= items.len() {
        return Err(OutOfRange {
            index,
            len: items.len(),
        });
    }

    let removed = items.remove(index);
    reindex(items);
    Ok(removed)
}

/// Move the element at `from` so that it ends up at index `to`, then reindex.
///
/// Remove-then-reinsert semantics: the element is taken out and reinserted at
/// `to`, which is its final index regardless of direction. `from == to` only
/// reindexes.
pub fn move_within<T: Positioned>(
    items: &mut Vec<T>,
    from: usize,
    to: usize,
) -> Result<(), OutOfRange> {
    let len = items.len();
    if from >= len {
        return Err(OutOfRange { index: from, len });
    }
    if to >= len {
        return Err(OutOfRange { index: to, len });
    }

    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    reindex(items);
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
