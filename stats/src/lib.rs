//! Catch statistics engine for the Carplog catch log
//!
//! Pure, stateless aggregation over a caller-supplied snapshot of the
//! catch collection. No I/O, no synchronization; safe to call from any
//! thread as long as the snapshot is not mutated during the call.

pub mod aggregate;
pub mod error;

pub use aggregate::{compute_monthly_stats, compute_yearly_stats, parse_caught_at, StatsReport};
pub use error::{StatsError, StatsResult};
