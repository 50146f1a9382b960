//! Shared types and models for the Carplog catch log
//!
//! This crate contains the domain models, unit conversion logic, and
//! validation helpers shared between the statistics engine, the frontend
//! (via WASM), and other components of the system.

pub mod models;
pub mod types;
pub mod units;
pub mod validation;

pub use models::*;
pub use types::*;
pub use units::*;
pub use validation::*;
