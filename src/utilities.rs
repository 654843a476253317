use crate::{configuration::DEFAULT_HTTPS_PORT, products::unexpected::InspectError};
use chrono::{DateTime, Utc};
use std::{
    fs::File,
    io::{Error, Read},
};
use url::{Host, Url};


/// Read text file, return contents
pub fn read_text_file(name: &str) -> Result<String, Error> {
    let mut file = File::open(name)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}


/// Extract host and port to connect to from an endpoint URL.
/// Port falls back to the scheme default, then to 443.
pub fn host_and_port(endpoint: &str) -> Result<(String, u16), InspectError> {
    let url = Url::parse(endpoint)
        .map_err(|err| InspectError::InvalidUrl(endpoint.to_string(), err.to_string()))?;
    let host = match url.host() {
        Some(Host::Domain(domain)) => domain.to_string(),
        Some(Host::Ipv4(address)) => address.to_string(),
        Some(Host::Ipv6(address)) => address.to_string(),
        None => {
            return Err(InspectError::InvalidUrl(
                endpoint.to_string(),
                String::from("URL has no host"),
            ))
        }
    };
    let port = url.port_or_known_default().unwrap_or(DEFAULT_HTTPS_PORT);
    Ok((host, port))
}


/// Whole days between now and expiry, truncated toward zero.
/// Negative for already expired certificates.
pub fn days_left(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (expires_at - now).num_days()
}
