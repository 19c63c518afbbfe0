//! Additive merge of an externally recommended schedule.
//!
//! A recommendation brings a daily plan of its own. Merging appends the
//! recommended places to the matching days of the live schedule — never
//! replacing what the user already planned — and normalizes the incoming
//! places on the way in (fresh identifiers, placeholder display fields).
//! Days the recommendation adds beyond the current trip range extend the
//! trip, with gap days created empty so the plan keys stay consecutive.
//!
//! Merging is at-least-once rather than idempotent: recommended places that
//! carry no identifier are assigned a fresh one on every call, so feeding
//! the same recommendation in twice appends its places twice.

use chrono::NaiveDate;
use log::warn;
use shared::RecommendedSchedule;
use thiserror::Error;

use super::models::{Place, Schedule};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    /// There is no live schedule to merge into.
    #[error("no schedule to merge into")]
    MissingSchedule,
    /// The recommendation carries no daily plan at all.
    #[error("recommendation has no daily plan")]
    MissingDailyPlan,
}

/// Merge `recommended` into a copy of `current`.
///
/// The input schedule is left untouched; on success the fully merged
/// schedule is returned and the caller swaps it in. Recommended days whose
/// key is not a calendar date are skipped with a warning.
pub fn merge_recommendation(
    current: &Schedule,
    recommended: &RecommendedSchedule,
) -> Result<Schedule, MergeError> {
    let incoming = recommended
        .daily_plan
        .as_ref()
        .ok_or(MergeError::MissingDailyPlan)?;

    let mut merged = current.clone();
    for (key, dtos) in incoming {
        let Ok(date) = NaiveDate::parse_from_str(key, "%Y-%m-%d") else {
            warn!("skipping recommended day with unparseable date {:?}", key);
            continue;
        };
        let day = merged.daily_plan.entry(date).or_default();
        day.extend(dtos.iter().map(|dto| Place::from_dto(dto, date)));
    }

    merged.normalize_range();
    merged.refresh_places();
    Ok(merged)
}
