//! "Certificate Alert" server

//! Checks TLS certificates on start and daily at the configured hour.

#![forbid(unsafe_code)]
#![deny(
    missing_docs,
    unstable_features,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    unused_allocation,
    unused_comparisons,
    unused_parens,
    while_true,
    unused_extern_crates
)]
// For development:
// #![allow(dead_code, unused_imports, unused_variables, deprecated)]


use certalert::*;
use chrono::Local;
use std::{fmt, process::exit};
use tracing_subscriber::{
    fmt::{format::Writer, layer, time::FormatTime},
    prelude::*,
    EnvFilter,
};


/// Local time stamps in log lines
struct LocalTimer;


impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format("[%Y-%m-%d][%H:%M:%S]"))
    }
}


/// Initial setup of the tracing subscriber. RUST_LOG overrides configured level.
fn setup_logger(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.get_log_level().to_string()));
    tracing_subscriber::registry()
        .with(layer().with_timer(LocalTimer).with_target(true))
        .with(filter)
        .init();
}


fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Certalert server couldn't start: {}", err);
            exit(1);
        }
    };
    setup_logger(&config);

    info!("Starting Certalert-server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Endpoints: {:?}. Alert threshold: {} days. Daily check at: {:02}:00.",
        config.urls, config.alert_threshold_days, config.check_hour
    );

    let inspector = TlsInspector::default();
    let notificator = DingNotificator::new(&config.webhook);
    debug!("Alerts will be sent to: {}", notificator.webhook());

    Scheduler::new(&config, &inspector, &notificator, SystemClock).run()
}
