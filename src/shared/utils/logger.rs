use log::{debug, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        let result = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("quickbet_lib", log::LevelFilter::Debug) // More verbose for our crate
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .parse_env("RUST_LOG")
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .try_init();

        match result {
            Ok(()) => info!("Logging system initialized"),
            // Another logger (test harness, host app) got there first
            Err(_) => debug!("Logger already installed, keeping existing one"),
        }
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log API calls
    pub fn api_call(provider: &str, endpoint: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!(
                "API: {} {} {} in {}ms",
                provider, endpoint, status, duration
            ),
            None => debug!("API: Starting {} {}", provider, endpoint),
        }
    }

    /// Log search operations
    pub fn search_operation(query: &str, provider: Option<&str>, results: Option<usize>) {
        match (provider, results) {
            (Some(p), Some(r)) => info!("Search: '{}' via {} returned {} results", query, p, r),
            (Some(p), None) => debug!("Search: Starting '{}' via {}", query, p),
            (None, Some(r)) => info!("Search: '{}' returned {} results", query, r),
            (None, None) => debug!("Search: Starting '{}'", query),
        }
    }

    /// Log key-value storage reads and writes
    pub fn storage_operation(operation: &str, key: &str, bytes: Option<usize>) {
        match bytes {
            Some(len) => debug!("Storage: {} '{}' ({} bytes)", operation, key, len),
            None => debug!("Storage: {} '{}' (no value)", operation, key),
        }
    }

    /// Log session transitions. Never pass credentials here.
    pub fn auth_event(event: &str, email: Option<&str>) {
        match email {
            Some(address) => info!("Auth: {} for {}", event, address),
            None => info!("Auth: {}", event),
        }
    }

    /// Log a recovered failure: the caller degrades instead of propagating
    pub fn degraded(context: &str, error: &dyn std::error::Error) {
        warn!("{} failed, degrading to empty state: {}", context, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish(self) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, None);
        duration
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
