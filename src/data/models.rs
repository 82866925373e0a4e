use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    Available,
    #[serde(rename = "In Use")]
    InUse,
    Maintenance,
    Retired,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 4] = [
        AssetStatus::Available,
        AssetStatus::InUse,
        AssetStatus::Maintenance,
        AssetStatus::Retired,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AssetStatus::Available => "Available",
            AssetStatus::InUse => "In Use",
            AssetStatus::Maintenance => "Maintenance",
            AssetStatus::Retired => "Retired",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label().eq_ignore_ascii_case(label))
    }
}

/// Physical or digital company asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub category: String,
    pub location: String,
    pub status: AssetStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// ISO `YYYY-MM-DD`; sorts lexically.
    pub purchase_date: String,
    pub value: u64,
    pub serial_number: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub building: String,
    pub floor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub department: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeEntryStatus {
    #[default]
    Draft,
    Submitted,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntryType {
    #[default]
    Work,
    Leave,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    #[serde(default)]
    pub id: String,
    pub date: String,
    pub project_id: String,
    #[serde(default)]
    pub project_name: String,
    pub hours: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: TimeEntryStatus,
    pub created_by: String,
    pub created_on: String,
    #[serde(default)]
    pub is_billable: bool,
    #[serde(default, rename = "type")]
    pub entry_type: EntryType,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("hours must be within (0, 24], got {0}")]
    HoursOutOfRange(f32),
}

impl TimeEntry {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.date.trim().is_empty() {
            return Err(ValidationError::Missing("date"));
        }
        if self.project_id.trim().is_empty() {
            return Err(ValidationError::Missing("projectId"));
        }
        // NaN fails both comparisons and is rejected here too
        if !(self.hours > 0.0 && self.hours <= 24.0) {
            return Err(ValidationError::HoursOutOfRange(self.hours));
        }
        Ok(())
    }
}
