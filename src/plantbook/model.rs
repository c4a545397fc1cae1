use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned plant identifier. Never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(pub u64);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlantId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PlantId)
    }
}

/// The editable part of a plant: what `create` takes and `update` replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantFields {
    pub name: String,
    pub notes: Option<String>,
    pub photo: Option<String>,
}

impl PlantFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notes: None,
            photo: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    /// Fields as committed by an edit: trimmed name, empty photo mapped to `None`.
    /// Notes are kept exactly as drafted, so `Some("")` stays distinct from `None`.
    pub fn for_update(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            notes: self.notes.clone(),
            photo: self.photo.clone().filter(|p| !p.is_empty()),
        }
    }

    /// Fields as committed by the add flow: like [`for_update`](Self::for_update), with
    /// notes trimmed and blank notes mapped to `None`.
    pub fn for_create(&self) -> Self {
        let mut fields = self.for_update();
        fields.notes = fields
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        fields
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    pub id: PlantId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(
        rename = "photoReference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PlantRecord {
    pub fn new(id: PlantId, fields: PlantFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            notes: fields.notes,
            photo: fields.photo,
            created_at,
        }
    }

    pub fn fields(&self) -> PlantFields {
        PlantFields {
            name: self.name.clone(),
            notes: self.notes.clone(),
            photo: self.photo.clone(),
        }
    }

    /// Replaces the editable fields. `id` and `created_at` are left alone.
    pub fn apply(&mut self, fields: PlantFields) {
        self.name = fields.name;
        self.notes = fields.notes;
        self.photo = fields.photo;
    }

    /// The creation timestamp as an opaque ISO-8601 string, e.g. `2026-10-14T09:30:00.123Z`.
    pub fn created_at_string(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
