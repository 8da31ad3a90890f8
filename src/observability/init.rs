//! Subscriber installation.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the OTLP JSON lines file inside the data directory.
pub const TRACE_FILE_NAME: &str = "zshort-otlp.jsonl";

/// Installs the global `tracing` subscriber.
///
/// Spans below `config.trace_level` are filtered out; the rest are exported
/// through OpenTelemetry to `~/.local/share/zellij/zshort/zshort-otlp.jsonl`.
/// Tracing is optional: if the data directory cannot be created the plugin
/// runs without a subscriber. Calling this more than once is harmless.
///
/// ```no_run
/// use zshort::observability::init_tracing;
/// use zshort::Config;
///
/// let config = Config {
///     trace_level: "debug".to_string(),
///     ..Config::default()
/// };
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "zshort"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = exporter::file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let tracer = provider.tracer(exporter::SCOPE_NAME);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}
