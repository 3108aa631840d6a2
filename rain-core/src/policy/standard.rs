use crate::{
    error::PredictionError,
    model::{Forecast, Reading},
    policy::{RAIN_CLOUD_COVER_OVER_PCT, RAIN_HUMIDITY_OVER_PCT, RAIN_TEMPERATURE_UNDER_C},
};

use super::ForecastPolicy;

const RAIN_CHANCE_OVER_PCT: i32 = 60;
const FREEZING_C: f64 = 0.0;
const FOG_HUMIDITY_PCT: i32 = 100;
const CLEAR_CLOUD_PCT: i32 = 0;
const OVERCAST_CLOUD_PCT: i32 = 100;
const DRY_CLOUDY_HUMIDITY_UNDER_PCT: i32 = 40;

/// Five-outcome rule set with range validation.
///
/// Rules are evaluated in a fixed order and the first match wins. Rule order
/// is part of the contract: a freezing reading that also satisfies the rain
/// rule reports rain, not snow.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPolicy;

impl ForecastPolicy for StandardPolicy {
    fn predict(&self, reading: &Reading) -> Result<Forecast, PredictionError> {
        reading.validate()?;

        let forecast = if reading.humidity_pct > RAIN_HUMIDITY_OVER_PCT
            && reading.cloud_cover_pct > RAIN_CLOUD_COVER_OVER_PCT
            && reading.temperature_c < RAIN_TEMPERATURE_UNDER_C
            && reading.rain_chance_pct > RAIN_CHANCE_OVER_PCT
        {
            Forecast::HighChanceOfRain
        } else if reading.temperature_c < FREEZING_C {
            Forecast::SnowInsteadOfRain
        } else if reading.humidity_pct == FOG_HUMIDITY_PCT
            && reading.cloud_cover_pct == CLEAR_CLOUD_PCT
        {
            Forecast::FogNoRain
        } else if reading.cloud_cover_pct == OVERCAST_CLOUD_PCT
            && reading.humidity_pct < DRY_CLOUDY_HUMIDITY_UNDER_PCT
        {
            Forecast::CloudyNoRain
        } else {
            Forecast::NoRain
        };

        Ok(forecast)
    }
}
