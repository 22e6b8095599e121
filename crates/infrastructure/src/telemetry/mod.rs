//! Logging setup

mod logging;

pub use logging::{LogFormat, TelemetryError, init_tracing};
