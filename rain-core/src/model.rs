use crate::error::PredictionError;

/// Slider default used when no chance-of-rain value is supplied.
pub const DEFAULT_RAIN_CHANCE_PCT: i32 = 50;

/// One set of weather readings, owned by the caller for a single prediction.
///
/// Fields are deliberately wider than their valid ranges: range checking is
/// the standard policy's job, and the simple policy performs none at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Relative humidity, valid 0..=100.
    pub humidity_pct: i32,
    /// Air temperature in Celsius, valid -50.0..=60.0.
    pub temperature_c: f64,
    /// Cloud cover, valid 0..=100.
    pub cloud_cover_pct: i32,
    /// User-set chance of rain, valid 0..=100. Defaults to 50.
    pub rain_chance_pct: i32,
}

impl Reading {
    /// Check every field against its documented bound.
    ///
    /// Returns the first violation; a reading that passes is safe to hand to
    /// any policy.
    pub fn validate(&self) -> Result<(), PredictionError> {
        let percent_fields = [
            ("humidity", self.humidity_pct),
            ("cloud cover", self.cloud_cover_pct),
            ("rain chance", self.rain_chance_pct),
        ];

        for (field, value) in percent_fields {
            if !(0..=100).contains(&value) {
                return Err(PredictionError::OutOfRange {
                    field,
                    value: f64::from(value),
                });
            }
        }

        if !(-50.0..=60.0).contains(&self.temperature_c) {
            return Err(PredictionError::OutOfRange {
                field: "temperature",
                value: self.temperature_c,
            });
        }

        Ok(())
    }
}

/// Raw text of one form submission, before any numeric conversion.
///
/// The front end fills this straight from user input; `parse` is the single
/// place free text becomes numbers, so the invalid-input path is shared by
/// every entry point.
#[derive(Debug, Clone, Default)]
pub struct ReadingForm {
    pub humidity: String,
    pub temperature: String,
    pub cloud_cover: String,
    /// Absent means "slider untouched": falls back to [`DEFAULT_RAIN_CHANCE_PCT`].
    pub rain_chance: Option<String>,
}

impl ReadingForm {
    /// Convert every field to its numeric type.
    ///
    /// Any non-numeric field yields [`PredictionError::Parse`] and the
    /// reading never reaches a policy.
    pub fn parse(&self) -> Result<Reading, PredictionError> {
        let humidity_pct = parse_int("humidity", &self.humidity)?;
        let temperature_c = parse_float("temperature", &self.temperature)?;
        let cloud_cover_pct = parse_int("cloud cover", &self.cloud_cover)?;

        let rain_chance_pct = match &self.rain_chance {
            Some(raw) => parse_int("rain chance", raw)?,
            None => DEFAULT_RAIN_CHANCE_PCT,
        };

        Ok(Reading {
            humidity_pct,
            temperature_c,
            cloud_cover_pct,
            rain_chance_pct,
        })
    }
}

fn parse_int(field: &'static str, raw: &str) -> Result<i32, PredictionError> {
    raw.trim().parse().map_err(|_| PredictionError::Parse {
        field,
        value: raw.to_string(),
    })
}

fn parse_float(field: &'static str, raw: &str) -> Result<f64, PredictionError> {
    raw.trim().parse().map_err(|_| PredictionError::Parse {
        field,
        value: raw.to_string(),
    })
}

/// Every canned outcome a policy can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Forecast {
    HighChanceOfRain,
    SnowInsteadOfRain,
    FogNoRain,
    CloudyNoRain,
    NoRain,
    /// Simple policy's positive outcome.
    Rain,
}

impl Forecast {
    pub fn as_str(&self) -> &'static str {
        match self {
            Forecast::HighChanceOfRain => "High chance of rain today.",
            Forecast::SnowInsteadOfRain => "Chances of snow instead of rain.",
            Forecast::FogNoRain => "Fog expected but no rain.",
            Forecast::CloudyNoRain => "Cloudy but no rain expected.",
            Forecast::NoRain => "It will not rain today.",
            Forecast::Rain => "It will rain today.",
        }
    }
}

impl std::fmt::Display for Forecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
