//
// Default configuration and default values:
//


/// Environment variable with an explicit path to the configuration file:
pub const CONFIG_PATH_ENV: &str = "CERTALERT_CONFIG";

/// Configuration file locations, checked in order:
pub const CONFIG_PATHS: [&str; 2] = ["/etc/certalert/certalert.conf", "certalert.conf"];


/// Default amount of days before expiry that triggers an alert
pub const DEFAULT_ALERT_THRESHOLD_DAYS: u32 = 3;

/// Default local hour (0-23) of the daily check
pub const DEFAULT_CHECK_HOUR: u32 = 10;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "INFO";


/// Port used when the endpoint URL has none
pub const DEFAULT_HTTPS_PORT: u16 = 443;

/// Check timeout in seconds
pub const CHECK_TIMEOUT: u64 = 15;

/// Check connection timeout in seconds
pub const CHECK_CONNECTION_TIMEOUT: u64 = 30;


/// Webhook HTTP code of a delivered alert
pub const WEBHOOK_SUCCESS_CODE: u32 = 200;

/// Webhook message type tag
pub const WEBHOOK_MESSAGE_TYPE: &str = "text";

/// Expiry date format used in alert messages
pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";
