/// Alert messages:
pub mod alert;

/// Certificate inspection results:
pub mod status;

/// Failures:
pub mod unexpected;
