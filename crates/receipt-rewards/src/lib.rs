//! Receipt rewards: validation, loyalty-points scoring, and the in-memory store that backs
//! receipt lookups.

pub mod config;
pub mod error;
pub mod rewards;
pub mod telemetry;
