use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::DEFAULT_SCAN_THRESHOLD;
use crate::types::{Escaping, LineEnding};

/// Prefix for environment overrides, e.g. `QRCARD__OUTPUT__DIRECTORY`.
pub const ENV_PREFIX: &str = "QRCARD";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub output: OutputConfig,
    pub encoding: EncodingConfig,
    pub qr: QrConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory exported `.vcf` files are written to.
    pub directory: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncodingConfig {
    pub escaping: Escaping,
    pub line_ending: LineEnding,
    pub fold_lines: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QrConfig {
    pub scan_threshold: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a builder seeded with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be registered.
    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("output.directory", ".")?
            .set_default("encoding.escaping", Escaping::default().to_string())?
            .set_default("encoding.line_ending", LineEnding::default().to_string())?
            .set_default("encoding.fold_lines", false)?
            .set_default("qr.scan_threshold", u64::try_from(DEFAULT_SCAN_THRESHOLD)?)?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Builds settings from the defaults alone, ignoring environment and files.
    ///
    /// ## Errors
    /// Returns an error if the defaults fail to deserialize.
    pub fn defaults() -> Result<Self> {
        Ok(Self::builder()?.build()?.try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(directory = %settings.output.directory, "Settings loaded");

    Ok(settings)
}

#[cfg(test)]
mod tests;
