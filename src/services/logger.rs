//! Logging service backed by the tracing ecosystem

use crate::core::traits::Logger;

/// Logger forwarding step messages to `tracing`
///
/// The subscriber is installed by the binary; library code only emits.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log_error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn log_information(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn log_debug(&self, message: &str) {
        tracing::debug!("{message}");
    }
}
