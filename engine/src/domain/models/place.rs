//! Domain model for a place in the daily plan.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{PlaceDto, PlaceRecord};
use uuid::Uuid;

/// Display fallback for places arriving without a name.
pub const DEFAULT_NAME: &str = "unnamed";
/// Category fallback for places arriving without one.
pub const DEFAULT_CATEGORY: &str = "other";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Opaque identifier, stable for the place's lifetime. Empty means not
    /// yet assigned; `ScheduleService::ensure_place_ids` fills those in.
    /// Defaulted on deserialize so older cached snapshots without
    /// identifiers still rehydrate.
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Day this place currently belongs to. Matches the key of the
    /// daily-plan list containing it whenever no mutation is in flight.
    pub date: NaiveDate,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Place {
    /// Generate a fresh opaque place identifier.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Normalize an untrusted place DTO into a domain place assigned to
    /// `date`. A missing identifier gets a fresh one, missing display fields
    /// fall back to placeholders, and whatever date the producer claimed is
    /// overridden by the containing day.
    pub fn from_dto(dto: &PlaceDto, date: NaiveDate) -> Self {
        Self {
            id: dto
                .id
                .clone()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(Self::generate_id),
            name: dto
                .name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(default_name),
            category: dto
                .category
                .clone()
                .filter(|category| !category.is_empty())
                .unwrap_or_else(default_category),
            lat: dto.lat,
            lng: dto.lng,
            date,
        }
    }

    /// Resolved wire record for payloads handed to external collaborators.
    pub fn to_record(&self) -> PlaceRecord {
        PlaceRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            lat: self.lat,
            lng: self.lng,
            date: self.date.format("%Y-%m-%d").to_string(),
        }
    }
}
