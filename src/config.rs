//! Runtime configuration from the environment (and `.env` via dotenv).

use std::str::FromStr;

/// Path of the log4rs config file.
pub const LOG_CONFIG_ENV: &str = "SUBNET_CALC_LOG_CONFIG";
/// Default output format: `text`, `csv` or `json`.
pub const FORMAT_ENV: &str = "SUBNET_CALC_FORMAT";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: String,
    pub format: OutputFormat,
    /// Problems found while reading the environment. Logging is not set up
    /// yet at that point, so they are held here until [`Config::log_warnings`].
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            format: OutputFormat::Text,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Read the config from process environment variables.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(LOG_CONFIG_ENV).filter(|p| !p.trim().is_empty()) {
            config.log_config = path;
        }
        if let Some(format) = lookup(FORMAT_ENV) {
            match format.parse() {
                Ok(format) => config.format = format,
                Err(e) => config.warnings.push(format!("{FORMAT_ENV}: {e}, using text")),
            }
        }
        config
    }

    /// Report what [`Config::from_lookup`] collected. Call after logging is up.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{warning}");
        }
    }
}
