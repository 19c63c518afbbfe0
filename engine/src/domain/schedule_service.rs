//! Schedule service: the authoritative owner of the live itinerary.
//!
//! Every mutation funnels through this service, runs synchronously to
//! completion, and is then mirrored into the local cache. Cache writes are
//! best-effort: a failed write keeps the in-memory change and logs a
//! warning, and the next mutation writes the full state again.
//!
//! Operations invoked before a schedule exists (or before a day is
//! selected) are deliberate no-ops rather than errors; both states occur
//! transiently while the surrounding flow initializes.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use log::{debug, info, warn};
use shared::{PlaceDto, RecommendedSchedule, SavedSchedule, SchedulePayload, TripDraft};
use std::collections::BTreeMap;

use super::budget;
use super::commands::{MovePlaceCommand, UpdateBudgetCommand};
use super::merge::{self, MergeError};
use super::models::{Place, Schedule};
use super::reorder;
use super::transport;
use crate::storage::traits::{SaveScheduleApi, ScheduleStorage};

pub struct ScheduleService<S: ScheduleStorage> {
    storage: S,
    schedule: Option<Schedule>,
    selected_date: Option<NaiveDate>,
}

impl<S: ScheduleStorage> ScheduleService<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            schedule: None,
            selected_date: None,
        }
    }

    /// The live schedule, if one exists.
    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// The currently selected trip day.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Build a fresh schedule from a planner draft, replacing any previous
    /// one. The first trip day becomes the selected day and the schedule is
    /// persisted immediately.
    pub fn create_schedule(&mut self, draft: &TripDraft) -> Result<()> {
        let raw_date = draft
            .date
            .as_deref()
            .ok_or_else(|| anyhow!("trip draft has no start date"))?;
        let start_date = NaiveDate::parse_from_str(raw_date.trim(), "%Y-%m-%d")
            .with_context(|| format!("trip draft start date {:?} is not a calendar date", raw_date))?;
        let days = draft.days.unwrap_or(1).max(1);

        let schedule = Schedule::new(
            draft.departure.clone().unwrap_or_default(),
            draft.arrival.clone().unwrap_or_default(),
            start_date,
            days,
            draft.go_transport.clone().filter(|leg| !leg.is_empty()),
            draft.return_transport.clone().filter(|leg| !leg.is_empty()),
        );
        info!(
            "created schedule {} → {}, {} day(s) from {}",
            schedule.departure, schedule.arrival, schedule.days, start_date
        );
        self.selected_date = Some(start_date);
        self.schedule = Some(schedule);
        self.recompute_total();
        self.persist();
        Ok(())
    }

    /// Rehydrate the last cached snapshot. Returns whether a schedule was
    /// loaded; a missing (or unreadable, see the storage layer) cache is not
    /// an error, it just leaves the service without a schedule.
    pub fn load_schedule(&mut self) -> Result<bool> {
        let Some(mut schedule) = self.storage.load_schedule()? else {
            debug!("no cached schedule to rehydrate");
            return Ok(false);
        };
        if schedule.places.is_empty() {
            // Older snapshots were cached without the flattened view.
            schedule.refresh_places();
        }
        self.selected_date = schedule.daily_plan.keys().next().copied();
        self.schedule = Some(schedule);
        Ok(true)
    }

    /// Select an existing trip day. Returns `false` for dates outside the
    /// plan.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        match &self.schedule {
            Some(schedule) if schedule.daily_plan.contains_key(&date) => {
                self.selected_date = Some(date);
                true
            }
            _ => false,
        }
    }

    /// Step the selection to the next (`forward`) or previous trip day.
    /// Stays put and returns `None` at either end of the trip.
    pub fn select_adjacent_date(&mut self, forward: bool) -> Option<NaiveDate> {
        let schedule = self.schedule.as_ref()?;
        let current = self.selected_date?;
        let dates: Vec<NaiveDate> = schedule.daily_plan.keys().copied().collect();
        let position = dates.iter().position(|date| *date == current)?;
        let target = if forward {
            position + 1
        } else {
            position.checked_sub(1)?
        };
        let date = *dates.get(target)?;
        self.selected_date = Some(date);
        Some(date)
    }

    /// Normalize and append a place to the selected day. No-op without an
    /// active schedule or selected day.
    pub fn add_place(&mut self, dto: &PlaceDto) -> bool {
        let (Some(schedule), Some(date)) = (self.schedule.as_mut(), self.selected_date) else {
            debug!("add_place ignored: no active schedule or selected day");
            return false;
        };
        let place = Place::from_dto(dto, date);
        schedule.daily_plan.entry(date).or_default().push(place);
        schedule.refresh_places();
        self.persist();
        true
    }

    /// Remove the place at `index` of `date`'s list. Out-of-range positions
    /// and unknown dates are tolerated as no-ops.
    pub fn delete_place(&mut self, date: NaiveDate, index: usize) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };
        let Some(places) = schedule.daily_plan.get_mut(&date) else {
            return false;
        };
        if index >= places.len() {
            return false;
        }
        let removed = places.remove(index);
        debug!("deleted place {:?} from {}", removed.name, date);
        schedule.refresh_places();
        self.persist();
        true
    }

    /// Apply one drag-and-drop move. Returns whether the plan changed.
    pub fn move_place(&mut self, command: &MovePlaceCommand) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            debug!("move_place ignored: no active schedule");
            return false;
        };
        if !reorder::move_place(&mut schedule.daily_plan, command) {
            return false;
        }
        schedule.refresh_places();
        self.persist();
        true
    }

    /// Coerce and apply budget field edits, then recompute the derived
    /// total before anything can read it.
    pub fn update_budget(&mut self, command: &UpdateBudgetCommand) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };
        if let Some(raw) = &command.accommodation {
            schedule.accommodation = budget::parse_amount(raw);
        }
        if let Some(raw) = &command.food {
            schedule.food = budget::parse_amount(raw);
        }
        if let Some(raw) = &command.other {
            schedule.other = budget::parse_amount(raw);
        }
        self.recompute_total();
        self.persist();
        true
    }

    /// Assign identifiers to every place that still lacks one. Returns how
    /// many were assigned and persists only when that count is non-zero, so
    /// a second run settles into doing nothing.
    pub fn ensure_place_ids(&mut self) -> usize {
        let Some(schedule) = self.schedule.as_mut() else {
            return 0;
        };
        let mut assigned = 0;
        for places in schedule.daily_plan.values_mut() {
            for place in places.iter_mut() {
                if !place.has_id() {
                    place.id = Place::generate_id();
                    assigned += 1;
                }
            }
        }
        if assigned > 0 {
            info!("assigned {} missing place identifier(s)", assigned);
            schedule.refresh_places();
            self.persist();
        }
        assigned
    }

    /// Merge a recommended schedule into the live one, additively. The live
    /// schedule is only replaced when the whole merge succeeded.
    pub fn merge_recommendation(
        &mut self,
        recommended: &RecommendedSchedule,
    ) -> Result<(), MergeError> {
        let current = self.schedule.as_ref().ok_or(MergeError::MissingSchedule)?;
        let merged = merge::merge_recommendation(current, recommended)?;
        info!("merged recommendation, {} place(s) total", merged.places.len());
        self.schedule = Some(merged);
        self.persist();
        Ok(())
    }

    /// Derive the payload handed to the remote save endpoint.
    ///
    /// Every place's `date` is restamped from its containing day (drag
    /// operations may have left stale values in the cache), the trip end
    /// date and the budget total are recomputed, and the transport cost of
    /// both legs is carried as one `train` total. Bus legs are not costed
    /// separately: `bus` is always 0.
    pub fn build_save_payload(&self) -> Option<SchedulePayload> {
        let schedule = self.schedule.as_ref()?;

        let mut daily_plan = BTreeMap::new();
        let mut places = Vec::new();
        for (date, day) in &schedule.daily_plan {
            let key = date.format("%Y-%m-%d").to_string();
            let records: Vec<_> = day
                .iter()
                .map(|place| {
                    let mut record = place.to_record();
                    record.date = key.clone();
                    record
                })
                .collect();
            places.extend(records.iter().cloned());
            daily_plan.insert(key, records);
        }

        let go_leg = schedule.go_transport.as_deref();
        let return_leg = schedule.return_transport.as_deref();
        Some(SchedulePayload {
            departure: schedule.departure.clone(),
            arrival: schedule.arrival.clone(),
            start_date: schedule.start_date.format("%Y-%m-%d").to_string(),
            end_date: schedule.end_date().format("%Y-%m-%d").to_string(),
            days: schedule.days,
            daily_plan,
            places,
            go_transport: schedule.go_transport.clone(),
            return_transport: schedule.return_transport.clone(),
            accommodation: schedule.accommodation,
            food: schedule.food,
            other: schedule.other,
            bus: 0,
            train: transport::parse_cost(go_leg) + transport::parse_cost(return_leg),
            total_budget: budget::total(
                schedule.accommodation,
                schedule.food,
                schedule.other,
                go_leg,
                return_leg,
            ),
            is_shared: schedule.is_shared,
        })
    }

    /// Snapshot the schedule and hand it to the save endpoint.
    ///
    /// The endpoint receives an owned snapshot, so edits made while the save
    /// is in flight can never leak into the transmitted payload. On success
    /// the finalized schedule is appended to the saved-schedules sequence
    /// and returned; on failure the error is surfaced and local state — in
    /// memory and in the cache — is left exactly as it was. Retrying is the
    /// caller's call. `Ok(None)` when there is no schedule to save.
    pub fn finalize<A: SaveScheduleApi>(&self, api: &A) -> Result<Option<SavedSchedule>> {
        let Some(payload) = self.build_save_payload() else {
            debug!("finalize ignored: no active schedule");
            return Ok(None);
        };
        let response = api
            .save_schedule(&payload)
            .context("remote save rejected the schedule")?;
        info!("schedule saved remotely as {}", response.id);

        let saved = SavedSchedule {
            id: response.id,
            schedule: payload,
        };
        match self.storage.load_saved_schedules() {
            Ok(mut saved_list) => {
                saved_list.push(saved.clone());
                if let Err(err) = self.storage.store_saved_schedules(&saved_list) {
                    warn!("failed to record finalized schedule locally: {:#}", err);
                }
            }
            Err(err) => warn!("failed to read saved-schedules list: {:#}", err),
        }
        Ok(Some(saved))
    }

    /// Previously finalized schedules, oldest first.
    pub fn saved_schedules(&self) -> Result<Vec<SavedSchedule>> {
        self.storage.load_saved_schedules()
    }

    /// Drop one finalized schedule from the local sequence. Returns whether
    /// an entry with that identifier existed.
    pub fn delete_saved_schedule(&self, id: &str) -> Result<bool> {
        let mut saved = self.storage.load_saved_schedules()?;
        let before = saved.len();
        saved.retain(|entry| entry.id != id);
        if saved.len() == before {
            return Ok(false);
        }
        self.storage.store_saved_schedules(&saved)?;
        Ok(true)
    }

    fn recompute_total(&mut self) {
        let Some(schedule) = self.schedule.as_mut() else {
            return;
        };
        schedule.total_budget = budget::total(
            schedule.accommodation,
            schedule.food,
            schedule.other,
            schedule.go_transport.as_deref(),
            schedule.return_transport.as_deref(),
        );
    }

    /// Mirror the live schedule into the local cache. Best-effort: failures
    /// keep the in-memory state and are only logged.
    fn persist(&self) {
        let Some(schedule) = self.schedule.as_ref() else {
            return;
        };
        if let Err(err) = self.storage.store_schedule(schedule) {
            warn!("failed to persist schedule to local cache: {:#}", err);
        }
    }
}
