use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business-layer log lines to `tracing` under a single target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "perplexcipe", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "perplexcipe", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "perplexcipe", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "perplexcipe", "{}", message);
    }
}
