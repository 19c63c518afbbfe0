//! Domain-level command types consumed by the schedule service.
//!
//! The hosting layer maps UI events and the public DTOs from the `shared`
//! crate onto these internal types.

use chrono::NaiveDate;

/// One drag-and-drop move: a reorder inside one day when the dates match,
/// otherwise an atomic cross-day move.
///
/// `dest_index` follows drop-target semantics: it is the position in the
/// destination list *after* the moved element was taken out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlaceCommand {
    pub source_date: NaiveDate,
    pub source_index: usize,
    pub dest_date: NaiveDate,
    pub dest_index: usize,
}

/// Raw budget field edits, exactly as typed. `None` leaves a field
/// unchanged; present values are integer-coerced (non-numeric input counts
/// as 0).
#[derive(Debug, Clone, Default)]
pub struct UpdateBudgetCommand {
    pub accommodation: Option<String>,
    pub food: Option<String>,
    pub other: Option<String>,
}
