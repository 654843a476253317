use crate::configuration::EXPIRY_DATE_FORMAT;
use chrono::{DateTime, Utc};
use std::fmt;


/// Human readable alert about a certificate close to expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage(String);


impl AlertMessage {
    /// Alert about certificate of endpoint expiring in given days
    pub fn expiring(endpoint: &str, days_left: i64, expires_at: DateTime<Utc>) -> AlertMessage {
        AlertMessage(format!(
            "HTTPS证书提醒: {} 的证书将在 {} 天后过期（到期日: {}）",
            endpoint,
            days_left,
            expires_at.format(EXPIRY_DATE_FORMAT)
        ))
    }


    /// Message text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}


impl fmt::Display for AlertMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
