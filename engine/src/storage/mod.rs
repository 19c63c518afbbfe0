//! Storage layer: the ports the domain talks through (`traits`) and the
//! JSON-document implementation of the local cache (`json`).

pub mod json;
pub mod traits;

pub use json::{JsonConnection, ScheduleRepository};
pub use traits::{SaveScheduleApi, ScheduleStorage};
