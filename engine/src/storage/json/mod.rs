//! # JSON Storage Module
//!
//! File-backed implementation of the local cache. Each logical key is one
//! JSON document in the data directory and is replaced wholesale on write,
//! matching the cache contract: the cache is a last-write-wins mirror of
//! the live schedule, with no partial-update protocol.
//!
//! ## Layout
//!
//! ```text
//! <data dir>/mySchedule.json         the live schedule snapshot
//! <data dir>/mySavedSchedules.json   sequence of finalized schedules
//! ```

pub mod connection;
pub mod schedule_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use schedule_repository::ScheduleRepository;
