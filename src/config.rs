use crate::{configuration::*, products::unexpected::ConfigError, utilities::*};
use serde::Deserialize;
use std::{env, path::Path, str::FromStr};
use tracing::{error, level_filters::LevelFilter};
use url::Url;


#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
/// Configuration read once by Certalert on start
pub struct Config {
    /// HTTPS endpoints checked in each cycle, in this order
    #[serde(default)]
    pub urls: Vec<String>,

    /// Chat webhook receiving alerts
    #[serde(default)]
    pub webhook: String,

    /// Alert when certificate expires in this many days or less
    #[serde(default = "default_alert_threshold_days")]
    pub alert_threshold_days: u32,

    /// Local hour (0-23) of the daily check
    #[serde(default = "default_check_hour")]
    pub check_hour: u32,

    /// Log level for Certalert-server
    pub log_level: Option<String>,

    /// Skip the scheduled check when a check already ran the same local day
    #[serde(default)]
    pub once_per_day: bool,
}


fn default_alert_threshold_days() -> u32 {
    DEFAULT_ALERT_THRESHOLD_DAYS
}


fn default_check_hour() -> u32 {
    DEFAULT_CHECK_HOUR
}


impl Default for Config {
    fn default() -> Config {
        Config {
            urls: vec![],
            webhook: String::new(),
            alert_threshold_days: DEFAULT_ALERT_THRESHOLD_DAYS,
            check_hour: DEFAULT_CHECK_HOUR,
            log_level: None,
            once_per_day: false,
        }
    }
}


impl FromStr for Config {
    type Err = ConfigError;

    /// Parse and validate JSON configuration
    fn from_str(contents: &str) -> Result<Config, ConfigError> {
        let config: Config =
            serde_json::from_str(contents).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}


impl Config {
    /// Load Certalert configuration file from first existing location
    pub fn load() -> Result<Config, ConfigError> {
        let config_paths = env::var(CONFIG_PATH_ENV)
            .into_iter()
            .chain(CONFIG_PATHS.iter().map(|path| path.to_string()))
            .collect::<Vec<String>>();
        let config = config_paths
            .iter()
            .find(|file| Path::new(file).exists())
            .ok_or_else(|| ConfigError::NotFound(config_paths.join(", ")))?;
        Config::from_file(config)
    }


    /// Load configuration from given file
    pub fn from_file(config: &str) -> Result<Config, ConfigError> {
        read_text_file(config)
            .map_err(|err| ConfigError::Io(config.to_string(), err))
            .and_then(|file_contents| {
                file_contents.parse::<Config>().map_err(|err| {
                    error!("Configuration error: {} in file: {}", err, config);
                    err
                })
            })
    }


    /// Check values which can't be enforced by types
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.urls.is_empty() {
            return Err(ConfigError::Invalid(String::from("No URLs to check defined")));
        }
        for endpoint in &self.urls {
            let url = Url::parse(endpoint.trim()).map_err(|err| {
                ConfigError::Invalid(format!("URL: '{}' can't be parsed: {}", endpoint, err))
            })?;
            if url.scheme() != "https" {
                return Err(ConfigError::Invalid(format!(
                    "URL: '{}' has to use the https scheme",
                    endpoint
                )));
            }
            host_and_port(endpoint).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        }

        if self.webhook.trim().is_empty() {
            return Err(ConfigError::Invalid(String::from("No webhook defined")));
        }
        Url::parse(&self.webhook).map_err(|err| {
            ConfigError::Invalid(format!("Webhook can't be parsed: {}", err))
        })?;

        if self.check_hour > 23 {
            return Err(ConfigError::Invalid(format!(
                "Check hour: {} is out of range 0-23",
                self.check_hour
            )));
        }
        Ok(())
    }


    /// Get LevelFilter (log level) from configuration
    pub fn get_log_level(&self) -> LevelFilter {
        let level = self
            .log_level
            .clone()
            .unwrap_or_else(|| String::from(DEFAULT_LOG_LEVEL))
            .to_uppercase();
        match &level[..] {
            "OFF" => LevelFilter::OFF,
            "ERROR" => LevelFilter::ERROR,
            "WARN" => LevelFilter::WARN,
            "INFO" => LevelFilter::INFO,
            "DEBUG" => LevelFilter::DEBUG,
            "TRACE" => LevelFilter::TRACE,
            _ => LevelFilter::INFO,
        }
    }
}
