/// TLS certificate inspection:
pub mod inspector;

/// Single check cycle over all endpoints:
pub mod cycle;
