//! The schedule aggregate: a multi-day trip with one ordered place list per
//! calendar day.
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::place::Place;

/// Ordered places per calendar day. A `BTreeMap` so key iteration is
/// calendar order, which the flattened `places` view and the save payload
/// rely on.
pub type DailyPlan = BTreeMap<NaiveDate, Vec<Place>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub departure: String,
    pub arrival: String,
    pub start_date: NaiveDate,
    /// Trip length in days, at least 1. `daily_plan` holds exactly this many
    /// consecutive keys starting at `start_date`.
    pub days: u32,
    pub daily_plan: DailyPlan,
    /// Flattened, date-ordered view over `daily_plan`. Derived: rebuilt after
    /// mutations, and reconstructed when a cached snapshot arrives without it.
    #[serde(default)]
    pub places: Vec<Place>,
    /// Raw outbound transport descriptor, as handed over by the planner flow
    #[serde(default)]
    pub go_transport: Option<String>,
    /// Raw return transport descriptor
    #[serde(default)]
    pub return_transport: Option<String>,
    #[serde(default)]
    pub accommodation: i64,
    #[serde(default)]
    pub food: i64,
    #[serde(default)]
    pub other: i64,
    /// Derived total over the budget line items and transport legs; never
    /// set directly.
    #[serde(default)]
    pub total_budget: i64,
    /// Collaborative visibility flag. Set by the sharing collaborator, only
    /// carried through here.
    #[serde(default)]
    pub is_shared: bool,
}

impl Schedule {
    /// Build an empty schedule covering `days` consecutive dates from
    /// `start_date`. `days` is clamped to at least one.
    pub fn new(
        departure: String,
        arrival: String,
        start_date: NaiveDate,
        days: u32,
        go_transport: Option<String>,
        return_transport: Option<String>,
    ) -> Self {
        let days = days.max(1);
        let mut daily_plan = DailyPlan::new();
        for offset in 0..days {
            daily_plan.insert(start_date + Duration::days(offset as i64), Vec::new());
        }
        Self {
            departure,
            arrival,
            start_date,
            days,
            daily_plan,
            places: Vec::new(),
            go_transport,
            return_transport,
            accommodation: 0,
            food: 0,
            other: 0,
            total_budget: 0,
            is_shared: false,
        }
    }

    /// Last day of the trip (`start_date + days - 1`).
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Duration::days(i64::from(self.days) - 1)
    }

    /// Trip dates in calendar order.
    pub fn travel_dates(&self) -> Vec<NaiveDate> {
        self.daily_plan.keys().copied().collect()
    }

    /// Date-ordered concatenation of every day's places.
    pub fn flatten_places(&self) -> Vec<Place> {
        self.daily_plan.values().flatten().cloned().collect()
    }

    /// Rebuild the derived `places` view.
    pub fn refresh_places(&mut self) {
        self.places = self.flatten_places();
    }

    /// Widen `start_date`/`days` to cover every key currently in the plan
    /// and create empty lists for any gap days, so the keys stay one
    /// consecutive run. Used after merges that bring days from outside the
    /// original trip range.
    pub fn normalize_range(&mut self) {
        let Some(first_key) = self.daily_plan.keys().next().copied() else {
            return;
        };
        let last_key = match self.daily_plan.keys().next_back().copied() {
            Some(key) => key,
            None => first_key,
        };
        let first = first_key.min(self.start_date);
        let last = last_key.max(self.end_date());

        self.start_date = first;
        self.days = (last - first).num_days() as u32 + 1;
        let mut day = first;
        while day <= last {
            self.daily_plan.entry(day).or_default();
            day += Duration::days(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PlaceDto;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn empty_schedule(start: &str, days: u32) -> Schedule {
        Schedule::new(
            "Seoul".to_string(),
            "Busan".to_string(),
            date(start),
            days,
            None,
            None,
        )
    }

    #[test]
    fn test_new_builds_consecutive_days() {
        let schedule = empty_schedule("2025-08-01", 3);

        assert_eq!(
            schedule.travel_dates(),
            vec![date("2025-08-01"), date("2025-08-02"), date("2025-08-03")]
        );
        assert!(schedule.daily_plan.values().all(Vec::is_empty));
        assert_eq!(schedule.end_date(), date("2025-08-03"));
    }

    #[test]
    fn test_new_clamps_days_to_one() {
        let schedule = empty_schedule("2025-08-01", 0);

        assert_eq!(schedule.days, 1);
        assert_eq!(schedule.travel_dates(), vec![date("2025-08-01")]);
        assert_eq!(schedule.end_date(), date("2025-08-01"));
    }

    #[test]
    fn test_flatten_is_date_ordered() {
        let mut schedule = empty_schedule("2025-08-01", 2);
        let second = Place::from_dto(
            &PlaceDto {
                name: Some("second day".to_string()),
                ..PlaceDto::default()
            },
            date("2025-08-02"),
        );
        let first = Place::from_dto(
            &PlaceDto {
                name: Some("first day".to_string()),
                ..PlaceDto::default()
            },
            date("2025-08-01"),
        );
        // Insert in reverse day order; the view must still come out by date.
        schedule
            .daily_plan
            .get_mut(&date("2025-08-02"))
            .unwrap()
            .push(second);
        schedule
            .daily_plan
            .get_mut(&date("2025-08-01"))
            .unwrap()
            .push(first);

        schedule.refresh_places();

        let names: Vec<&str> = schedule.places.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first day", "second day"]);
    }

    #[test]
    fn test_normalize_range_fills_gaps() {
        let mut schedule = empty_schedule("2025-08-01", 2);
        schedule.daily_plan.insert(date("2025-08-05"), Vec::new());

        schedule.normalize_range();

        assert_eq!(schedule.start_date, date("2025-08-01"));
        assert_eq!(schedule.days, 5);
        assert_eq!(
            schedule.travel_dates(),
            vec![
                date("2025-08-01"),
                date("2025-08-02"),
                date("2025-08-03"),
                date("2025-08-04"),
                date("2025-08-05"),
            ]
        );
    }

    #[test]
    fn test_normalize_range_extends_backwards() {
        let mut schedule = empty_schedule("2025-08-03", 1);
        schedule.daily_plan.insert(date("2025-08-01"), Vec::new());

        schedule.normalize_range();

        assert_eq!(schedule.start_date, date("2025-08-01"));
        assert_eq!(schedule.days, 3);
    }

    #[test]
    fn test_cached_snapshot_without_places_field() {
        let json = r#"{
            "departure": "Seoul",
            "arrival": "Busan",
            "start_date": "2025-08-01",
            "days": 1,
            "daily_plan": {"2025-08-01": []}
        }"#;

        let schedule: Schedule = serde_json::from_str(json).unwrap();

        assert!(schedule.places.is_empty());
        assert_eq!(schedule.accommodation, 0);
        assert!(!schedule.is_shared);
    }
}
