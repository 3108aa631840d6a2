use crate::{
    error::PredictionError,
    model::{Forecast, Reading},
    policy::{RAIN_CLOUD_COVER_OVER_PCT, RAIN_HUMIDITY_OVER_PCT, RAIN_TEMPERATURE_UNDER_C},
};

use super::ForecastPolicy;

/// Two-outcome rule set: rain or no rain.
///
/// Ignores the chance-of-rain slider and performs no range validation, so it
/// never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePolicy;

impl ForecastPolicy for SimplePolicy {
    fn predict(&self, reading: &Reading) -> Result<Forecast, PredictionError> {
        let will_rain = reading.humidity_pct > RAIN_HUMIDITY_OVER_PCT
            && reading.cloud_cover_pct > RAIN_CLOUD_COVER_OVER_PCT
            && reading.temperature_c < RAIN_TEMPERATURE_UNDER_C;

        Ok(if will_rain {
            Forecast::Rain
        } else {
            Forecast::NoRain
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn reading(humidity: i32, temperature: f64, cloud: i32) -> Reading {
        Reading {
            humidity_pct: humidity,
            temperature_c: temperature,
            cloud_cover_pct: cloud,
            rain_chance_pct: 50,
        }
    }

    #[rstest]
    #[case(80, 20.0, 60, Forecast::Rain)]
    // Thresholds are strict: exactly 70/50/35 is not enough.
    #[case(70, 20.0, 60, Forecast::NoRain)]
    #[case(80, 20.0, 50, Forecast::NoRain)]
    #[case(80, 35.0, 60, Forecast::NoRain)]
    #[case(50, 20.0, 50, Forecast::NoRain)]
    fn rule_table(
        #[case] humidity: i32,
        #[case] temperature: f64,
        #[case] cloud: i32,
        #[case] expected: Forecast,
    ) {
        let got = SimplePolicy
            .predict(&reading(humidity, temperature, cloud))
            .expect("simple policy never fails");
        assert_eq!(got, expected);
    }

    #[test]
    fn slider_is_ignored() {
        let mut input = reading(80, 20.0, 60);
        input.rain_chance_pct = 0;

        let got = SimplePolicy.predict(&input).unwrap();
        assert_eq!(got, Forecast::Rain);
    }

    #[test]
    fn skips_range_validation() {
        // The reduced variant predicts even for readings the standard policy
        // would reject.
        let got = SimplePolicy.predict(&reading(150, 20.0, 60)).unwrap();
        assert_eq!(got, Forecast::Rain);
    }
}
