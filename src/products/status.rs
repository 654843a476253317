use crate::{products::unexpected::InspectError, utilities::days_left};
use chrono::{DateTime, Utc};


/// Certificate state of an endpoint, valid only within one check cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateStatus {
    /// Checked endpoint URL
    pub endpoint: String,

    /// Leaf certificate NotAfter, or inspection failure
    pub expiry: Result<DateTime<Utc>, InspectError>,
}


impl CertificateStatus {
    /// New status of an endpoint
    pub fn new(endpoint: &str, expiry: Result<DateTime<Utc>, InspectError>) -> CertificateStatus {
        CertificateStatus {
            endpoint: endpoint.to_string(),
            expiry,
        }
    }


    /// Expiry and whole days left until it at given moment
    pub fn remaining(&self, now: DateTime<Utc>) -> Result<(DateTime<Utc>, i64), InspectError> {
        self.expiry
            .clone()
            .map(|expires_at| (expires_at, days_left(expires_at, now)))
    }
}
