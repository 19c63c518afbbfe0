use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A place as supplied by the search and recommendation collaborators.
///
/// Everything is optional because these producers are outside our control:
/// manually entered places have no coordinates, generated ones often arrive
/// without an identifier or category. The engine normalizes a `PlaceDto`
/// into a fully resolved place at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlaceDto {
    /// Opaque identifier, if the producer assigned one
    pub id: Option<String>,
    /// Display name of the place
    pub name: Option<String>,
    /// Display category (restaurant, sight, ...)
    pub category: Option<String>,
    /// Latitude, absent for manually entered places
    pub lat: Option<f64>,
    /// Longitude, absent for manually entered places
    pub lng: Option<f64>,
    /// Day the producer assigned the place to (`YYYY-MM-DD`)
    pub date: Option<String>,
}

/// A fully resolved place as it appears in outbound payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Day the place belongs to (`YYYY-MM-DD`), always consistent with the
    /// daily-plan key it is listed under
    pub date: String,
}

/// Trip draft handed over by the planner flow.
///
/// Used to initialize a fresh schedule. Only the start date is required to
/// be present and parseable; every other field degrades to a sensible
/// default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TripDraft {
    pub departure: Option<String>,
    pub arrival: Option<String>,
    /// Trip start date (`YYYY-MM-DD`)
    pub date: Option<String>,
    /// Trip length in days (defaults to 1)
    pub days: Option<u32>,
    /// Raw outbound transport descriptor
    pub go_transport: Option<String>,
    /// Raw return transport descriptor
    pub return_transport: Option<String>,
}

/// A recommended schedule produced by the plan generator.
///
/// Carries nothing but a daily plan keyed by `YYYY-MM-DD` date strings.
/// Recommendations are merged additively into the current schedule; they
/// never replace it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecommendedSchedule {
    pub daily_plan: Option<BTreeMap<String, Vec<PlaceDto>>>,
}

/// The snapshot handed to the remote save endpoint.
///
/// Fully derived and self-consistent: every place's `date` matches its
/// daily-plan key, `end_date` is computed from `start_date` and `days`, and
/// `total_budget` is recomputed at snapshot time. Transport cost is carried
/// as a single `train` total; `bus` is always 0 because bus legs are not
/// costed separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePayload {
    pub departure: String,
    pub arrival: String,
    /// First trip day (`YYYY-MM-DD`)
    pub start_date: String,
    /// Last trip day (`YYYY-MM-DD`)
    pub end_date: String,
    pub days: u32,
    pub daily_plan: BTreeMap<String, Vec<PlaceRecord>>,
    /// Flattened, date-ordered view over `daily_plan`
    pub places: Vec<PlaceRecord>,
    pub go_transport: Option<String>,
    pub return_transport: Option<String>,
    /// Accommodation budget line item (user entered)
    pub accommodation: i64,
    /// Food budget line item (user entered)
    pub food: i64,
    /// Miscellaneous budget line item (user entered)
    pub other: i64,
    /// Always 0, see struct docs
    pub bus: i64,
    /// Combined cost of both transport legs
    pub train: i64,
    /// Derived total, never user entered
    pub total_budget: i64,
    /// Collaborative visibility flag, owned by the sharing collaborator
    pub is_shared: bool,
}

/// Response of the remote save endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveScheduleResponse {
    /// Identifier the endpoint assigned to the saved schedule
    pub id: String,
}

/// One entry of the locally kept sequence of finalized schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSchedule {
    /// Identifier assigned by the save endpoint
    pub id: String,
    /// The payload as it was transmitted
    pub schedule: SchedulePayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_dto_tolerates_sparse_json() {
        let dto: PlaceDto = serde_json::from_str(r#"{"name": "Jagalchi Market"}"#).unwrap();

        assert_eq!(dto.name.as_deref(), Some("Jagalchi Market"));
        assert_eq!(dto.id, None);
        assert_eq!(dto.lat, None);
    }

    #[test]
    fn test_recommended_schedule_without_plan() {
        let rec: RecommendedSchedule = serde_json::from_str("{}").unwrap();

        assert!(rec.daily_plan.is_none());
    }

    #[test]
    fn test_trip_draft_round_trip() {
        let draft = TripDraft {
            departure: Some("Seoul".to_string()),
            arrival: Some("Busan".to_string()),
            date: Some("2025-08-01".to_string()),
            days: Some(3),
            go_transport: None,
            return_transport: None,
        };

        let json = serde_json::to_string(&draft).unwrap();
        let back: TripDraft = serde_json::from_str(&json).unwrap();

        assert_eq!(back, draft);
    }
}
