//! # Itinerary Engine
//!
//! In-memory state engine for a multi-day travel schedule: per-day ordered
//! place lists, drag-and-drop reordering (within and across days), additive
//! merging of recommended schedules, a derived trip budget, and
//! write-through persistence into a local cache.
//!
//! The engine is synchronous and single-owner. Every operation is invoked
//! by a discrete user action and runs to completion before the next one;
//! the cache is a last-write-wins mirror of the live schedule, and the only
//! call with observable latency — the remote save — receives an owned
//! snapshot so in-flight saves never see later edits.

use anyhow::Result;
use std::path::Path;

pub mod domain;
pub mod storage;

pub use domain::schedule_service::ScheduleService;
pub use storage::json::{JsonConnection, ScheduleRepository};

/// Engine facade: the schedule service wired to the JSON-backed cache.
pub struct Engine {
    pub schedule_service: ScheduleService<ScheduleRepository>,
}

impl Engine {
    /// Create an engine persisting into `data_dir` (created if needed).
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let connection = JsonConnection::new(data_dir)?;
        let repository = ScheduleRepository::new(connection);
        Ok(Self {
            schedule_service: ScheduleService::new(repository),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{PlaceDto, TripDraft};
    use tempfile::TempDir;

    #[test]
    fn test_engine_persists_across_instances() -> Result<()> {
        let dir = TempDir::new()?;

        let mut engine = Engine::new(dir.path())?;
        engine.schedule_service.create_schedule(&TripDraft {
            departure: Some("Seoul".to_string()),
            arrival: Some("Gyeongju".to_string()),
            date: Some("2025-10-03".to_string()),
            days: Some(2),
            ..TripDraft::default()
        })?;
        engine.schedule_service.add_place(&PlaceDto {
            name: Some("Bulguksa".to_string()),
            ..PlaceDto::default()
        });

        // A second engine over the same directory sees the cached schedule.
        let mut rehydrated = Engine::new(dir.path())?;
        assert!(rehydrated.schedule_service.load_schedule()?);
        let schedule = rehydrated.schedule_service.schedule().unwrap();
        assert_eq!(schedule.arrival, "Gyeongju");
        assert_eq!(schedule.places.len(), 1);
        assert_eq!(schedule.places[0].name, "Bulguksa");
        Ok(())
    }
}
