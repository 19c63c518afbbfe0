//! JSON-backed implementation of the schedule cache.

use anyhow::Result;
use log::warn;
use shared::SavedSchedule;

use super::connection::JsonConnection;
use crate::domain::models::Schedule;
use crate::storage::traits::ScheduleStorage;

/// Cache key of the live schedule snapshot.
pub const SCHEDULE_KEY: &str = "mySchedule";
/// Cache key of the finalized-schedules sequence.
pub const SAVED_SCHEDULES_KEY: &str = "mySavedSchedules";

#[derive(Debug, Clone)]
pub struct ScheduleRepository {
    connection: JsonConnection,
}

impl ScheduleRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl ScheduleStorage for ScheduleRepository {
    fn load_schedule(&self) -> Result<Option<Schedule>> {
        match self.connection.read_value(SCHEDULE_KEY) {
            Ok(schedule) => Ok(schedule),
            Err(err) => {
                // An unreadable cache only skips hydration.
                warn!("discarding unreadable schedule cache: {:#}", err);
                Ok(None)
            }
        }
    }

    fn store_schedule(&self, schedule: &Schedule) -> Result<()> {
        self.connection.write_value(SCHEDULE_KEY, schedule)
    }

    fn load_saved_schedules(&self) -> Result<Vec<SavedSchedule>> {
        match self.connection.read_value(SAVED_SCHEDULES_KEY) {
            Ok(saved) => Ok(saved.unwrap_or_default()),
            Err(err) => {
                warn!("discarding unreadable saved-schedules cache: {:#}", err);
                Ok(Vec::new())
            }
        }
    }

    fn store_saved_schedules(&self, schedules: &[SavedSchedule]) -> Result<()> {
        self.connection.write_value(SAVED_SCHEDULES_KEY, &schedules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::TestEnvironment;
    use chrono::NaiveDate;

    fn sample_schedule() -> Schedule {
        Schedule::new(
            "Seoul".to_string(),
            "Busan".to_string(),
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            2,
            Some("KTX | 서울역 → 부산역 | 0630 → 0930 | 59800원".to_string()),
            None,
        )
    }

    #[test]
    fn test_schedule_round_trip() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = env.repository();

        assert!(repo.load_schedule()?.is_none());

        let schedule = sample_schedule();
        repo.store_schedule(&schedule)?;

        assert_eq!(repo.load_schedule()?, Some(schedule));
        Ok(())
    }

    #[test]
    fn test_corrupt_schedule_degrades_to_none() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = env.repository();
        std::fs::write(env.connection.key_path(SCHEDULE_KEY), b"not json at all")?;

        assert!(repo.load_schedule()?.is_none());
        Ok(())
    }

    #[test]
    fn test_store_replaces_previous_snapshot() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = env.repository();

        repo.store_schedule(&sample_schedule())?;
        let mut updated = sample_schedule();
        updated.accommodation = 80000;
        repo.store_schedule(&updated)?;

        assert_eq!(repo.load_schedule()?.unwrap().accommodation, 80000);
        Ok(())
    }

    #[test]
    fn test_saved_schedules_default_to_empty() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = env.repository();

        assert!(repo.load_saved_schedules()?.is_empty());

        std::fs::write(env.connection.key_path(SAVED_SCHEDULES_KEY), b"[broken")?;
        assert!(repo.load_saved_schedules()?.is_empty());
        Ok(())
    }
}
