//! Month and year bucketing of catch records
//!
//! Full recomputation on every call: one pass over the snapshot building a
//! running accumulator per bucket, averages derived afterwards. Bucket
//! membership is decided in UTC so a catch near a month boundary lands in
//! the same bucket no matter who views the report.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use shared::models::{BiggestCatch, MonthlyStats, StoredCatch, YearlyStats};

use crate::error::{StatsError, StatsResult};

/// Aggregation output: the stats plus how many records were excluded
/// because their stored timestamp failed to parse
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsReport<T> {
    pub stats: Vec<T>,
    pub skipped_records: usize,
}

/// Resolve a stored timestamp to the fixed reference zone used for bucketing
pub fn parse_caught_at(raw: &str) -> StatsResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|_| StatsError::MalformedTimestamp {
            raw: raw.to_owned(),
        })
}

/// Running per-bucket state; the biggest catch tracks weight plus timestamp
/// so ties resolve deterministically to the earliest catch
struct Accumulator<'a> {
    count: u32,
    total_kg: f64,
    biggest: (&'a StoredCatch, f64, DateTime<Utc>),
}

impl<'a> Accumulator<'a> {
    fn new(record: &'a StoredCatch, weight_kg: f64, at: DateTime<Utc>) -> Self {
        Self {
            count: 1,
            total_kg: weight_kg,
            biggest: (record, weight_kg, at),
        }
    }

    fn add(&mut self, record: &'a StoredCatch, weight_kg: f64, at: DateTime<Utc>) {
        self.count += 1;
        self.total_kg += weight_kg;
        let (_, best_kg, best_at) = self.biggest;
        if weight_kg > best_kg || (weight_kg == best_kg && at < best_at) {
            self.biggest = (record, weight_kg, at);
        }
    }

    fn average_kg(&self) -> f64 {
        // count is always >= 1 for an existing bucket
        self.total_kg / f64::from(self.count)
    }

    fn biggest_catch(&self) -> BiggestCatch {
        let (record, weight_kg, at) = &self.biggest;
        BiggestCatch {
            id: record.id,
            weight_kg: *weight_kg,
            fish_name: record.fish_name.clone(),
            caught_at: *at,
        }
    }
}

/// Single pass over the snapshot; `key_for` returns `None` for records that
/// fall outside the requested view (they are neither bucketed nor skipped)
fn bucket_records<'a, K: Ord + Copy>(
    records: &'a [StoredCatch],
    mut key_for: impl FnMut(DateTime<Utc>) -> Option<K>,
) -> (BTreeMap<K, Accumulator<'a>>, usize) {
    let mut buckets: BTreeMap<K, Accumulator<'a>> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in records {
        let at = match parse_caught_at(&record.caught_at) {
            Ok(at) => at,
            Err(_) => {
                tracing::warn!(
                    id = %record.id,
                    raw = %record.caught_at,
                    "Skipping catch with malformed timestamp"
                );
                skipped += 1;
                continue;
            }
        };
        let Some(key) = key_for(at) else {
            continue;
        };
        // Unweighed catches count toward the bucket but contribute 0 weight
        let weight_kg = record.weight_kg.unwrap_or_default();
        buckets
            .entry(key)
            .and_modify(|acc| acc.add(record, weight_kg, at))
            .or_insert_with(|| Accumulator::new(record, weight_kg, at));
    }

    (buckets, skipped)
}

/// Compute per-month statistics for one calendar year
///
/// Emits one entry per month that has at least one catch, ascending by
/// month; months without catches are omitted. Records from other years are
/// ignored; records with malformed timestamps are counted in
/// `skipped_records` since their year cannot be known.
pub fn compute_monthly_stats(records: &[StoredCatch], year: i32) -> StatsReport<MonthlyStats> {
    let (buckets, skipped_records) =
        bucket_records(records, |at| (at.year() == year).then(|| at.month()));

    let stats: Vec<MonthlyStats> = buckets
        .into_iter()
        .map(|(month, acc)| MonthlyStats {
            year,
            month,
            total_count: acc.count,
            total_weight_kg: acc.total_kg,
            average_weight_kg: acc.average_kg(),
            biggest_catch: Some(acc.biggest_catch()),
        })
        .collect();

    tracing::debug!(
        year,
        months = stats.len(),
        skipped_records,
        "Computed monthly stats"
    );
    StatsReport {
        stats,
        skipped_records,
    }
}

/// Compute per-year statistics across the whole collection
///
/// One entry per year with at least one catch, ascending by year.
pub fn compute_yearly_stats(records: &[StoredCatch]) -> StatsReport<YearlyStats> {
    let (buckets, skipped_records) = bucket_records(records, |at| Some(at.year()));

    let stats: Vec<YearlyStats> = buckets
        .into_iter()
        .map(|(year, acc)| YearlyStats {
            year,
            total_count: acc.count,
            total_weight_kg: acc.total_kg,
            average_weight_kg: acc.average_kg(),
            biggest_catch: Some(acc.biggest_catch()),
        })
        .collect();

    tracing::debug!(
        years = stats.len(),
        skipped_records,
        "Computed yearly stats"
    );
    StatsReport {
        stats,
        skipped_records,
    }
}
