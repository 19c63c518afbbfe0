//! # Storage Traits
//!
//! Interfaces between the domain layer and everything that outlives it: the
//! local cache mirroring the live schedule, and the remote save endpoint.
//! Implementations are swappable without touching the domain layer; tests
//! inject in-memory fakes.

use anyhow::Result;
use shared::{SaveScheduleResponse, SavedSchedule, SchedulePayload};

use crate::domain::models::Schedule;

/// Local cache port. Reads and writes replace whole values; there is no
/// partial-update protocol.
pub trait ScheduleStorage: Send + Sync {
    /// Load the cached schedule snapshot. `Ok(None)` when nothing usable is
    /// cached — implementations degrade corrupt content to `None` so a bad
    /// cache skips hydration instead of failing it.
    fn load_schedule(&self) -> Result<Option<Schedule>>;

    /// Replace the cached schedule snapshot.
    fn store_schedule(&self, schedule: &Schedule) -> Result<()>;

    /// Load the ordered sequence of previously finalized schedules.
    fn load_saved_schedules(&self) -> Result<Vec<SavedSchedule>>;

    /// Replace the finalized-schedules sequence.
    fn store_saved_schedules(&self, schedules: &[SavedSchedule]) -> Result<()>;
}

/// Remote save collaborator. Accepts a fully derived snapshot and returns
/// the identifier it assigned. Transport mechanics (and timeouts) live
/// behind this trait.
pub trait SaveScheduleApi: Send + Sync {
    fn save_schedule(&self, payload: &SchedulePayload) -> Result<SaveScheduleResponse>;
}
