use crate::{
    Config,
    error::PredictionError,
    model::{Forecast, Reading},
    policy::{simple::SimplePolicy, standard::StandardPolicy},
};
use std::{convert::TryFrom, fmt::Debug};

pub mod simple;
pub mod standard;

/// Rain thresholds shared by both rule sets.
pub(crate) const RAIN_HUMIDITY_OVER_PCT: i32 = 70;
pub(crate) const RAIN_CLOUD_COVER_OVER_PCT: i32 = 50;
pub(crate) const RAIN_TEMPERATURE_UNDER_C: f64 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyId {
    Standard,
    Simple,
}

impl PolicyId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyId::Standard => "standard",
            PolicyId::Simple => "simple",
        }
    }

    pub const fn all() -> &'static [PolicyId] {
        &[PolicyId::Standard, PolicyId::Simple]
    }
}

impl std::fmt::Display for PolicyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PolicyId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "standard" => Ok(PolicyId::Standard),
            "simple" => Ok(PolicyId::Simple),
            _ => Err(anyhow::anyhow!(
                "Unknown policy '{value}'. Supported policies: standard, simple."
            )),
        }
    }
}

/// A prediction variant: a pure mapping from one reading to one forecast.
///
/// Implementations hold no state, so repeated calls with the same reading
/// always return the same forecast.
pub trait ForecastPolicy: Send + Sync + Debug {
    fn predict(&self, reading: &Reading) -> Result<Forecast, PredictionError>;
}

/// Construct a policy from an explicit PolicyId.
pub fn policy_from_id(id: PolicyId) -> Box<dyn ForecastPolicy> {
    match id {
        PolicyId::Standard => Box::new(StandardPolicy),
        PolicyId::Simple => Box::new(SimplePolicy),
    }
}

/// Construct the configured default policy, falling back to `standard`
/// when none is set.
pub fn default_policy_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastPolicy>> {
    let id = config.default_policy_id()?.unwrap_or(PolicyId::Standard);
    Ok(policy_from_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn policy_id_as_str_roundtrip() {
        for id in PolicyId::all() {
            let s = id.as_str();
            let parsed = PolicyId::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn policy_id_parse_is_case_insensitive() {
        assert_eq!(PolicyId::try_from("Standard").unwrap(), PolicyId::Standard);
        assert_eq!(PolicyId::try_from("SIMPLE").unwrap(), PolicyId::Simple);
    }

    #[test]
    fn unknown_policy_error() {
        let err = PolicyId::try_from("doesnotexist").unwrap_err();
        assert!(err.to_string().contains("Unknown policy"));
    }

    #[test]
    fn default_policy_falls_back_to_standard() {
        let cfg = Config::default();
        let policy = default_policy_from_config(&cfg).expect("fallback must succeed");

        assert!(format!("{policy:?}").contains("StandardPolicy"));
    }

    #[test]
    fn default_policy_honors_configured_choice() {
        let mut cfg = Config::default();
        cfg.set_default_policy(PolicyId::Simple);

        let policy = default_policy_from_config(&cfg).expect("configured policy must resolve");
        assert!(format!("{policy:?}").contains("SimplePolicy"));
    }

    #[test]
    fn default_policy_rejects_bad_config_value() {
        let cfg = Config {
            default_policy: Some("drizzle".to_string()),
            ..Config::default()
        };

        let err = default_policy_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("Unknown policy"));
    }
}
