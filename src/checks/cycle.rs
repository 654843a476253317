use crate::{
    checks::inspector::Inspector,
    config::Config,
    notificator::Dispatcher,
    products::{alert::AlertMessage, status::CertificateStatus},
};
use chrono::{DateTime, Utc};
use tracing::{error, info, warn};


/// Summary of a single check cycle
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Endpoints with successfully read certificate
    pub checked: usize,

    /// Endpoints which failed inspection
    pub failed: usize,

    /// Alerts delivered
    pub alerted: usize,

    /// Alerts which failed delivery
    pub undelivered: usize,
}


/// One pass over all configured endpoints
#[derive(Debug)]
pub struct CheckCycle<'a, I, D> {
    config: &'a Config,
    inspector: &'a I,
    dispatcher: &'a D,
}


impl<'a, I: Inspector, D: Dispatcher> CheckCycle<'a, I, D> {
    /// New cycle over endpoints from config
    pub fn new(config: &'a Config, inspector: &'a I, dispatcher: &'a D) -> CheckCycle<'a, I, D> {
        CheckCycle {
            config,
            inspector,
            dispatcher,
        }
    }


    /// Check every endpoint in order. Failures of one endpoint never stop the others.
    pub fn run(&self, now: DateTime<Utc>) -> CycleReport {
        info!(
            "Checking certificates of {} endpoints…",
            self.config.urls.len()
        );
        let mut report = CycleReport::default();
        for url in &self.config.urls {
            let status = CertificateStatus::new(url, self.inspector.inspect(url));
            self.process(&status, now, &mut report);
        }
        info!(
            "Check cycle finished. Checked: {}, failed: {}, alerts sent: {}, alerts lost: {}.",
            report.checked, report.failed, report.alerted, report.undelivered
        );
        report
    }


    fn process(&self, status: &CertificateStatus, now: DateTime<Utc>, report: &mut CycleReport) {
        let url = &status.endpoint;
        let (expires_at, days_left) = match status.remaining(now) {
            Ok(remaining) => remaining,
            Err(err) => {
                error!("Failed to check certificate for {}: {}", url, err);
                report.failed += 1;
                return;
            }
        };
        report.checked += 1;

        if days_left <= i64::from(self.config.alert_threshold_days) {
            let message = AlertMessage::expiring(url, days_left, expires_at);
            warn!("{}", message);
            match self.dispatcher.dispatch(message.as_str()) {
                Ok(()) => report.alerted += 1,
                Err(err) => {
                    error!("Failed to send alert: {}", err);
                    report.undelivered += 1;
                }
            }
        } else {
            info!("{} 的证书还有 {} 天过期", url, days_left);
        }
    }
}
