//! # Domain Module
//!
//! Business logic of the itinerary engine. Everything in here is UI- and
//! storage-agnostic: persistence goes through the ports in
//! [`crate::storage::traits`], and rendering is somebody else's problem.
//!
//! ## Module Organization
//!
//! - **schedule_service**: the authoritative owner of the live schedule and
//!   every mutation on it
//! - **reorder**: pure drag-and-drop reorder/move algorithm over the daily
//!   plan
//! - **merge**: additive ingestion of recommended schedules
//! - **transport**: parsing of raw transport descriptor strings
//! - **budget**: derivation of the trip budget total
//! - **models**: the `Schedule` aggregate and `Place` entity
//! - **commands**: internal command types the hosting layer maps UI events to

pub mod budget;
pub mod commands;
pub mod merge;
pub mod models;
pub mod reorder;
pub mod schedule_service;
pub mod transport;

pub use commands::{MovePlaceCommand, UpdateBudgetCommand};
pub use merge::MergeError;
pub use models::{DailyPlan, Place, Schedule};
pub use schedule_service::ScheduleService;
pub use transport::TransportInfo;
