use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct ProducerConfig {
    pub batch_size: usize,
    pub channel_capacity: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulatorConfig {
    pub total_requests: usize,
    pub batch_size: usize,
    pub interval_ms: u64,
    pub max_sequence_len: usize,
    pub min_decade: i32,
    pub max_decade: i32,
    /// Probability that a generated request carries no argument sequence.
    pub absent_rate: f64,
    /// Probability that a generated value is NaN or an infinity.
    pub special_value_rate: f64,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    /// Results go to stdout when unset.
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub producer: ProducerConfig,
    pub simulator: SimulatorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Loads `crates/evaluator/Config.toml` relative to the working directory.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    let config_file_path: PathBuf = base_path
        .join("crates")
        .join("evaluator")
        .join("Config.toml");

    load_config_from(&config_file_path)
}

/// Loads configuration from `path` and `EVALUATOR_*` environment variables.
pub fn load_config_from(path: &Path) -> Result<Config, Error> {
    if !path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at calculated path: {}",
            path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("EVALUATOR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    validate(&app_config)?;
    Ok(app_config)
}

fn validate(config: &Config) -> Result<(), Error> {
    if config.producer.batch_size == 0 || config.simulator.batch_size == 0 {
        return Err(Error::ConfigLoadError("batch_size must be positive".into()));
    }
    if config.producer.channel_capacity == 0 {
        return Err(Error::ConfigLoadError("channel_capacity must be positive".into()));
    }
    if config.simulator.interval_ms == 0 {
        return Err(Error::ConfigLoadError("interval_ms must be positive".into()));
    }
    if config.simulator.min_decade > config.simulator.max_decade {
        return Err(Error::ConfigLoadError(format!(
            "min_decade {} exceeds max_decade {}",
            config.simulator.min_decade, config.simulator.max_decade
        )));
    }
    for (name, rate) in [
        ("absent_rate", config.simulator.absent_rate),
        ("special_value_rate", config.simulator.special_value_rate),
    ] {
        if !(0.0..=1.0).contains(&rate) {
            return Err(Error::ConfigLoadError(format!(
                "{} must lie in [0, 1], got {}",
                name, rate
            )));
        }
    }
    Ok(())
}
