//! "Certificate Alert" utility

//! Watches TLS certificates of HTTPS endpoints and alerts a chat webhook before they expire.

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
#![warn(dead_code, unused_imports, unused_variables)]

// For development:
// #![allow(dead_code, unused_imports, unused_variables, deprecated)]


/// Use MiMalloc as default allocator:
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;


pub use crate::checks::{cycle::*, inspector::*};
pub use crate::config::*;
pub use crate::configuration::*;
pub use crate::notificator::*;
pub use crate::products::{alert::*, status::*, unexpected::*};
pub use crate::scheduler::*;
pub use crate::utilities::*;
use curl::easy::{Handler, WriteError};
use std::fmt;
pub use tracing::{debug, error, info, instrument, trace, warn};


/// Collects response content from Curl:
#[derive(Default)]
pub struct Collector(Vec<u8>);


impl Handler for Collector {
    fn write(&mut self, data: &[u8]) -> Result<usize, WriteError> {
        self.0.extend_from_slice(data);
        Ok(data.len())
    }
}


impl fmt::Debug for Collector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collector")
            .field("length", &self.0.len())
            .finish()
    }
}


impl fmt::Display for Collector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}


//
// Public modules:
//

/// Configuration defaults:
pub mod configuration;

/// Runtime config:
pub mod config;

/// Utilities and helpers:
pub mod utilities;

/// Certificate checks:
pub mod checks;

/// Check products:
pub mod products;

/// Webhook alerts:
pub mod notificator;

/// Daily check scheduling:
pub mod scheduler;

//
// Private modules:
//
