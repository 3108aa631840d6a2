use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::{Confirm, Text};
use rain_core::{
    Config, ForecastPolicy, PolicyId, ReadingForm,
    policy::{default_policy_from_config, policy_from_id},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "rain", version, about = "Rain prediction CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the default prediction policy.
    Configure {
        /// Policy short name, e.g. "standard" or "simple".
        policy: String,

        /// Chance of rain (%) to pre-fill on future requests.
        #[arg(long)]
        rain_chance: Option<i32>,
    },

    /// Predict from readings given on the command line.
    Predict {
        /// Humidity (%).
        humidity: String,

        /// Temperature (°C).
        temperature: String,

        /// Cloud cover (%).
        cloud_cover: String,

        /// Chance of rain (%); if absent, the configured default is used.
        #[arg(long)]
        rain_chance: Option<String>,

        /// Policy to use instead of the configured default.
        #[arg(long)]
        policy: Option<String>,
    },

    /// Fill in the readings interactively.
    Form {
        /// Policy to use instead of the configured default.
        #[arg(long)]
        policy: Option<String>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Configure {
                policy,
                rain_chance,
            } => configure(&policy, rain_chance),
            Command::Predict {
                humidity,
                temperature,
                cloud_cover,
                rain_chance,
                policy,
            } => {
                let cfg = Config::load()?;
                let policy = resolve_policy(policy.as_deref(), &cfg)?;

                let form = ReadingForm {
                    humidity,
                    temperature,
                    cloud_cover,
                    rain_chance: rain_chance
                        .or_else(|| Some(cfg.rain_chance_or_default().to_string())),
                };

                println!("{}", predict_line(policy.as_ref(), &form));
                Ok(())
            }
            Command::Form { policy } => {
                let cfg = Config::load()?;
                let policy = resolve_policy(policy.as_deref(), &cfg)?;
                run_form(policy.as_ref(), &cfg)
            }
        }
    }
}

fn configure(policy: &str, rain_chance: Option<i32>) -> Result<()> {
    let id = PolicyId::try_from(policy)?;

    if let Some(pct) = rain_chance {
        anyhow::ensure!(
            (0..=100).contains(&pct),
            "Chance of rain must be between 0 and 100, got {pct}."
        );
    }

    let mut cfg = Config::load()?;
    cfg.set_default_policy(id);
    if rain_chance.is_some() {
        cfg.default_rain_chance_pct = rain_chance;
    }
    cfg.save()?;

    println!("Default policy set to '{id}'.");
    println!("Saved configuration to {}.", Config::config_file_path()?.display());
    Ok(())
}

fn resolve_policy(flag: Option<&str>, cfg: &Config) -> Result<Box<dyn ForecastPolicy>> {
    match flag {
        Some(name) => Ok(policy_from_id(PolicyId::try_from(name)?)),
        None => default_policy_from_config(cfg),
    }
}

/// One prediction, rendered: either the forecast or one of the two fixed
/// error messages. Prediction errors stop here; they are output, not
/// failures.
fn predict_line(policy: &dyn ForecastPolicy, form: &ReadingForm) -> String {
    match form.parse().and_then(|reading| policy.predict(&reading)) {
        Ok(forecast) => forecast.to_string(),
        Err(err) => err.to_string(),
    }
}

/// Interactive session: prompt for each reading, show the result, repeat
/// until the user is done.
fn run_form(policy: &dyn ForecastPolicy, cfg: &Config) -> Result<()> {
    println!("Rain Prediction System");

    let default_chance = cfg.rain_chance_or_default().to_string();

    loop {
        let form = prompt_form(&default_chance)?;
        println!("{}", predict_line(policy, &form));

        let again = Confirm::new("Predict again?").with_default(false).prompt()?;
        if !again {
            return Ok(());
        }
    }
}

fn prompt_form(default_chance: &str) -> Result<ReadingForm> {
    let humidity = Text::new("Humidity (%):").prompt()?;
    let temperature = Text::new("Temperature (°C):").prompt()?;
    let cloud_cover = Text::new("Cloud cover (%):").prompt()?;

    // Empty input keeps the pre-filled value, like an untouched slider.
    let rain_chance = Text::new("Chance of rain (%):")
        .with_default(default_chance)
        .prompt()?;

    Ok(ReadingForm {
        humidity,
        temperature,
        cloud_cover,
        rain_chance: Some(rain_chance),
    })
}
