use crate::{
    configuration::{CHECK_CONNECTION_TIMEOUT, CHECK_TIMEOUT},
    products::unexpected::InspectError,
    utilities::host_and_port,
};
use chrono::{DateTime, TimeZone, Utc};
use openssl::{
    asn1::{Asn1Time, Asn1TimeRef},
    ssl::{SslConnector, SslMethod, SslVerifyMode},
};
use std::{
    net::{TcpStream, ToSocketAddrs},
    time::Duration,
};
use tracing::{debug, instrument, trace};


const SECONDS_PER_DAY: i64 = 86_400;


/// Reads expiration date of the certificate presented by an endpoint
pub trait Inspector {
    /// Leaf certificate NotAfter of given HTTPS URL
    fn inspect(&self, url: &str) -> Result<DateTime<Utc>, InspectError>;
}


/// Inspector performing a real TLS handshake using OpenSSL.
/// Peer verification is disabled, so expired certificates can still be read.
#[derive(Debug, Copy, Clone)]
pub struct TlsInspector {
    connection_timeout: Duration,
    timeout: Duration,
}


impl Default for TlsInspector {
    fn default() -> TlsInspector {
        TlsInspector::new(
            Duration::from_secs(CHECK_CONNECTION_TIMEOUT),
            Duration::from_secs(CHECK_TIMEOUT),
        )
    }
}


impl TlsInspector {
    /// New inspector with given connection and read/write timeouts
    pub fn new(connection_timeout: Duration, timeout: Duration) -> TlsInspector {
        TlsInspector {
            connection_timeout,
            timeout,
        }
    }


    /// Connect to the first reachable resolved address
    fn connect(&self, url: &str, host: &str, port: u16) -> Result<TcpStream, InspectError> {
        let transport = |details: String| InspectError::Transport(url.to_string(), details);
        let addresses = (host, port)
            .to_socket_addrs()
            .map_err(|err| transport(err.to_string()))?;

        let mut last_failure = format!("No address resolved for: {}:{}", host, port);
        for address in addresses {
            match TcpStream::connect_timeout(&address, self.connection_timeout) {
                Ok(stream) => {
                    stream
                        .set_read_timeout(Some(self.timeout))
                        .and_then(|_| stream.set_write_timeout(Some(self.timeout)))
                        .map_err(|err| transport(err.to_string()))?;
                    return Ok(stream);
                }
                Err(err) => {
                    debug!("Connection to: {} failed: {}", address, err);
                    last_failure = err.to_string();
                }
            }
        }
        Err(transport(last_failure))
    }
}


impl Inspector for TlsInspector {
    #[instrument(skip(self))]
    fn inspect(&self, url: &str) -> Result<DateTime<Utc>, InspectError> {
        let (host, port) = host_and_port(url)?;
        let stream = self.connect(url, &host, port)?;

        let transport = |details: String| InspectError::Transport(url.to_string(), details);
        let mut builder =
            SslConnector::builder(SslMethod::tls()).map_err(|err| transport(err.to_string()))?;
        builder.set_verify(SslVerifyMode::NONE);
        let mut configuration = builder
            .build()
            .configure()
            .map_err(|err| transport(err.to_string()))?;
        configuration.set_verify_hostname(false);

        let mut tls_stream = configuration
            .connect(&host, stream)
            .map_err(|err| transport(err.to_string()))?;
        let certificate = tls_stream
            .ssl()
            .peer_certificate()
            .ok_or_else(|| InspectError::NoCertificate(url.to_string()))?;
        let expires_at = not_after_to_utc(certificate.not_after())
            .map_err(|details| InspectError::InvalidExpiry(url.to_string(), details))?;

        if let Err(err) = tls_stream.shutdown() {
            trace!("TLS shutdown of: {} failed: {}", url, err);
        }
        debug!("Certificate of: {} expires at: {}", url, expires_at);
        Ok(expires_at)
    }
}


/// Convert ASN.1 certificate time to UTC timestamp
fn not_after_to_utc(not_after: &Asn1TimeRef) -> Result<DateTime<Utc>, String> {
    let epoch = Asn1Time::from_unix(0).map_err(|err| err.to_string())?;
    let diff = epoch.diff(not_after).map_err(|err| err.to_string())?;
    let seconds = i64::from(diff.days) * SECONDS_PER_DAY + i64::from(diff.secs);
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| format!("Timestamp out of range: {}", seconds))
}
