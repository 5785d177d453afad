//! Storage location records.

use super::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Home,
    Work,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    /// Serialized as `type` to match the stored snapshot shape.
    #[serde(rename = "type")]
    pub kind: LocationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date_added: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLocation {
    pub name: String,
    pub address: String,
    pub kind: LocationType,
    pub description: Option<String>,
}

/// Partial update for a location. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub kind: Option<LocationType>,
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl LocationPatch {
    /// Merges every set field into `location`.
    pub fn apply_to(&self, location: &mut Location) {
        if let Some(name) = &self.name {
            location.name = name.clone();
        }
        if let Some(address) = &self.address {
            location.address = address.clone();
        }
        if let Some(kind) = self.kind {
            location.kind = kind;
        }
        if let Some(description) = &self.description {
            location.description = description.clone();
        }
        if let Some(is_active) = self.is_active {
            location.is_active = is_active;
        }
    }
}

impl Location {
    pub(crate) fn from_new(id: RecordId, date_added: String, data: NewLocation) -> Self {
        Self {
            id,
            name: data.name,
            address: data.address,
            kind: data.kind,
            description: data.description,
            date_added,
            is_active: true,
        }
    }
}
