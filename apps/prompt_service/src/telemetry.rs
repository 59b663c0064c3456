//! OTLP trace export. Spans recorded through `tracing` are batched and posted
//! to the collector over HTTP/protobuf.

use opentelemetry::trace::TraceError;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace as sdktrace, Resource};

/// `service.name` resource attribute on every exported span.
pub const SERVICE_NAME: &str = "prompt-generator";

/// Builds a batching tracer that exports to `endpoint` (the full `/v1/traces` URL)
/// and installs its provider globally.
///
/// Nothing is sent until the first batch is flushed, so an unreachable
/// collector does not block startup.
pub fn otlp_tracer(endpoint: &str) -> Result<sdktrace::Tracer, TraceError> {
    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .http()
                .with_endpoint(endpoint),
        )
        .with_trace_config(
            sdktrace::config()
                .with_resource(Resource::new([KeyValue::new("service.name", SERVICE_NAME)])),
        )
        .install_batch(runtime::Tokio)
}

/// Flushes pending spans. Call once, after the server stops.
pub fn shutdown() {
    opentelemetry::global::shutdown_tracer_provider();
}
