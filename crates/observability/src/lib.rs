//! Tracing/logging setup shared by binaries and tests.

pub mod tracing;

pub use crate::tracing::{LogFormat, ObservabilityConfig, UnknownLogFormat};

/// Initialize process-wide tracing/logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &ObservabilityConfig) {
    crate::tracing::init(config);
}
