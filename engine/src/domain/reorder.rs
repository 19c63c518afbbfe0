//! Drag-and-drop reordering over the daily plan.
//!
//! A drop is either a reorder inside one day's list or a move between two
//! days. Both use extract-then-insert semantics: the destination index is
//! evaluated against the list *after* the element was removed, matching how
//! drop targets report positions. A cross-day move restamps the moved
//! place's date before insertion, so the date/key invariant holds again the
//! moment the operation returns.

use super::commands::MovePlaceCommand;
use super::models::{DailyPlan, Place};

/// Reorder one day's list. Leaves the list untouched and returns `false`
/// when the indices are equal or the source index is out of range.
pub fn reorder_within_day(
    places: &mut Vec<Place>,
    source_index: usize,
    dest_index: usize,
) -> bool {
    if source_index == dest_index || source_index >= places.len() {
        return false;
    }
    let moved = places.remove(source_index);
    let dest_index = dest_index.min(places.len());
    places.insert(dest_index, moved);
    true
}

/// Apply one move command to the plan. Returns whether anything changed.
///
/// Same-day moves delegate to [`reorder_within_day`]. Cross-day moves run as
/// one atomic removal-plus-insertion, so the moved place is never visible in
/// two lists (or in none) to code running after this function.
pub fn move_place(plan: &mut DailyPlan, command: &MovePlaceCommand) -> bool {
    if command.source_date == command.dest_date {
        let Some(places) = plan.get_mut(&command.source_date) else {
            return false;
        };
        return reorder_within_day(places, command.source_index, command.dest_index);
    }

    let Some(source) = plan.get_mut(&command.source_date) else {
        return false;
    };
    if command.source_index >= source.len() {
        return false;
    }
    let mut moved = source.remove(command.source_index);
    moved.date = command.dest_date;

    let dest = plan.entry(command.dest_date).or_default();
    let dest_index = command.dest_index.min(dest.len());
    dest.insert(dest_index, moved);
    true
}
