//! Derived statistics models
//!
//! These are plain values recomputed on demand from the authoritative
//! catch collection; they are never persisted as authoritative data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Summary of the heaviest catch in a bucket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BiggestCatch {
    pub id: Uuid,
    pub weight_kg: f64,
    pub fish_name: Option<String>,
    pub caught_at: DateTime<Utc>,
}

/// Per-month aggregate for one calendar year
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyStats {
    pub year: i32,
    /// 1..=12
    pub month: u32,
    pub total_count: u32,
    pub total_weight_kg: f64,
    pub average_weight_kg: f64,
    pub biggest_catch: Option<BiggestCatch>,
}

/// Per-year aggregate across the whole collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearlyStats {
    pub year: i32,
    pub total_count: u32,
    pub total_weight_kg: f64,
    pub average_weight_kg: f64,
    pub biggest_catch: Option<BiggestCatch>,
}
