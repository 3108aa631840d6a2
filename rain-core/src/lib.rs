//! Core library for the `rain` CLI.
//!
//! This crate defines:
//! - Configuration handling (default policy, default chance-of-rain)
//! - Abstraction over prediction policies
//! - Shared domain models (readings, forecasts) and error types
//!
//! It is used by `rain-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod model;
pub mod policy;

pub use config::Config;
pub use error::PredictionError;
pub use model::{DEFAULT_RAIN_CHANCE_PCT, Forecast, Reading, ReadingForm};
pub use policy::{ForecastPolicy, PolicyId};
