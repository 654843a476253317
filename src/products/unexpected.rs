use std::io;
use thiserror::Error;


/// Problems with configuration, detected once at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// None of the configuration file locations exist
    #[error("No configuration file found. Checked locations: {0}")]
    NotFound(String),

    /// Configuration file exists but can't be read
    #[error("Couldn't read configuration file: {0}. Details: {1}")]
    Io(String, #[source] io::Error),

    /// Configuration isn't valid JSON of expected shape
    #[error("Failed to parse configuration! Details: {0}")]
    Parse(String),

    /// Configuration parsed, but values are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}


/// Failed certificate inspection of a single endpoint
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InspectError {
    /// Endpoint URL can't be parsed or has no host
    #[error("Invalid URL: {0}. Details: {1}")]
    InvalidUrl(String, String),

    /// DNS, connection, timeout or handshake failure
    #[error("Failed to connect to URL: {0}. Details: {1}")]
    Transport(String, String),

    /// Handshake finished without a peer certificate
    #[error("No TLS certificate found for URL: {0}")]
    NoCertificate(String),

    /// Certificate NotAfter can't be represented as a timestamp
    #[error("Invalid certificate expiry date for URL: {0}. Details: {1}")]
    InvalidExpiry(String, String),
}


/// Failed alert delivery
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// Alert message couldn't be encoded
    #[error("Failed to serialize alert message! Details: {0}")]
    Serialization(String),

    /// Webhook couldn't be reached
    #[error("Failed to send request to webhook! Details: {0}")]
    Transport(String),

    /// Webhook responded with other code than 200
    #[error("Failed to send alert, status code: {0}")]
    Delivery(u32),
}
