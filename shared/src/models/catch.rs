//! Catch record models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::types::{WeightEntry, WeightUnit};
use crate::units::{normalize_incoming_weight, WeightError};

/// User input for logging a new catch, before normalization
///
/// All descriptive fields are optional; a bare entry with nothing but a
/// timestamp is still a valid catch.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CatchDraft {
    /// Weight as entered, in whichever scheme the angler used
    pub weight: Option<WeightEntry>,
    #[validate(length(max = 120))]
    pub fish_name: Option<String>,
    #[validate(length(max = 120))]
    pub venue: Option<String>,
    #[validate(length(max = 30))]
    pub peg_number: Option<String>,
    #[validate(range(min = 0))]
    pub wraps_count: Option<i32>,
    /// Length in cm for metric entries, inches for imperial
    #[validate(range(min = 0.0))]
    pub length: Option<f64>,
    #[validate(length(max = 120))]
    pub bait_used: Option<String>,
    pub photo_base64: Option<String>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
    /// Defaults to the current time when absent
    pub caught_at: Option<DateTime<Utc>>,
}

impl CatchDraft {
    /// Normalize the draft into an authoritative record
    ///
    /// Assigns a fresh id and converts the entered weight to canonical
    /// kilograms. A draft with an invalid weight is rejected outright so a
    /// poisoned value is never stored.
    pub fn into_record(self) -> Result<CatchRecord, WeightError> {
        let entry_unit = match self.weight {
            Some(WeightEntry::Decimal { unit, .. }) => unit,
            Some(WeightEntry::PoundsOunces { .. }) => WeightUnit::Lb,
            None => WeightUnit::default(),
        };
        let weight_kg = self.weight.map(normalize_incoming_weight).transpose()?;

        Ok(CatchRecord {
            id: Uuid::new_v4(),
            weight_kg,
            entry_unit,
            caught_at: self.caught_at.unwrap_or_else(Utc::now),
            fish_name: self.fish_name,
            venue: self.venue,
            peg_number: self.peg_number,
            wraps_count: self.wraps_count,
            length: self.length,
            bait_used: self.bait_used,
            photo_base64: self.photo_base64,
            notes: self.notes,
        })
    }
}

/// An individual catch, immutable once created
///
/// `weight_kg` is the single source of truth for weight, always in
/// kilograms; `None` marks an unweighed catch. `entry_unit` records the
/// unit the angler used so the record can be redisplayed in its original
/// granularity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatchRecord {
    pub id: Uuid,
    pub weight_kg: Option<f64>,
    pub entry_unit: WeightUnit,
    pub caught_at: DateTime<Utc>,
    pub fish_name: Option<String>,
    pub venue: Option<String>,
    pub peg_number: Option<String>,
    pub wraps_count: Option<i32>,
    pub length: Option<f64>,
    pub bait_used: Option<String>,
    pub photo_base64: Option<String>,
    pub notes: Option<String>,
}

impl CatchRecord {
    /// Wire form for the persistence collaborator
    pub fn to_stored(&self) -> StoredCatch {
        StoredCatch {
            id: self.id,
            weight_kg: self.weight_kg,
            entry_unit: self.entry_unit,
            caught_at: self.caught_at.to_rfc3339(),
            fish_name: self.fish_name.clone(),
            venue: self.venue.clone(),
            peg_number: self.peg_number.clone(),
            wraps_count: self.wraps_count,
            length: self.length,
            bait_used: self.bait_used.clone(),
            photo_base64: self.photo_base64.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// A catch as handed back by the persistence collaborator
///
/// `caught_at` stays an RFC 3339 string here: stored documents may carry a
/// malformed timestamp, and aggregation must surface those per record
/// rather than fail wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCatch {
    pub id: Uuid,
    pub weight_kg: Option<f64>,
    pub entry_unit: WeightUnit,
    pub caught_at: String,
    pub fish_name: Option<String>,
    pub venue: Option<String>,
    pub peg_number: Option<String>,
    pub wraps_count: Option<i32>,
    pub length: Option<f64>,
    pub bait_used: Option<String>,
    pub photo_base64: Option<String>,
    pub notes: Option<String>,
}
