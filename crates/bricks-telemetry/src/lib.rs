//! # Bricks Telemetry
//!
//! Structured logging for applications built on Bricks.
//!
//! Library crates in this workspace only emit `tracing` events; an
//! application calls [`init_telemetry`] once to decide where they go.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bricks_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _guard = init_telemetry(config).expect("Failed to init telemetry");
//!
//!     // Registration, encode and decode events are now being written
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BRICKS_SERVICE_NAME` | `bricks` | Service name on every line |
//! | `BRICKS_LOG_LEVEL` | `info` | Log filter (falls back to `RUST_LOG`) |
//! | `BRICKS_CONSOLE_OUTPUT` | `true` | Write logs to the console |
//! | `BRICKS_JSON_LOGS` | `false` | JSON lines instead of text |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::build_filter;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Install the global subscriber.
///
/// Returns a guard to be held for the lifetime of the application. Only
/// the first call in a process can succeed.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    tracing_setup::init_subscriber(&config)?;

    tracing::info!(
        service = %config.service_name,
        level = %config.log_level,
        json = config.json_logs,
        "Telemetry initialized"
    );

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that keeps telemetry active.
#[derive(Debug)]
pub struct TelemetryGuard {
    service_name: String,
}

impl TelemetryGuard {
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry");
    }
}
