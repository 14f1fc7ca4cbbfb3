//! Subscriber setup.

use super::exporter::file_tracer_provider;
use super::rotating_file::RotationPolicy;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const TRACE_FILE_NAME: &str = "folio-otlp.json";
const SERVICE_NAME: &str = "Folio";

/// Installs the global subscriber: an `EnvFilter` at `config.trace_level`
/// (default `info`) feeding an OpenTelemetry layer that writes to
/// `<data dir>/folio-otlp.json`.
///
/// Only the first call in a process takes effect. Tracing is best
/// effort: if the data directory cannot be created nothing is installed.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(
        data_dir.join(TRACE_FILE_NAME),
        RotationPolicy::default(),
        resource,
        SERVICE_NAME,
    );

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        .try_init();
}
