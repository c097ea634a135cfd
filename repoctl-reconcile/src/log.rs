use serde_json::Value;

/// Log sink handed to the [`Reconciler`](crate::Reconciler).
pub trait Logger: Send + Sync {
    fn debug(&self, context: &Value, message: &str);
    fn warn(&self, message: &str);
}

/// Forwards to the `tracing` subscriber of the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, context: &Value, message: &str) {
        tracing::debug!(context = %context, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}
