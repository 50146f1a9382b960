//! Domain models for the Carplog catch log

mod catch;
mod stats;

pub use catch::*;
pub use stats::*;
