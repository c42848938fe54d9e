//! Telemetry and distributed tracing bootstrap
//!
//! Provides OpenTelemetry initialization for exporting spans to an OTLP
//! collector, bridged into the `tracing` ecosystem.

mod otel;

pub use otel::{TelemetryConfig, TelemetryError, TelemetryGuard, init_telemetry};
