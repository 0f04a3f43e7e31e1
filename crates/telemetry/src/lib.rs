//! Telemetry setup: structured logging, OpenTelemetry export, Prometheus
//! metrics, and Sentry error tracking.
//!
//! # Features
//! - `otlp` (default): OpenTelemetry OTLP exporter
//! - `prometheus` (default): Prometheus metrics exporter
//! - `sentry` (default): Sentry error tracking

#[cfg(feature = "otlp")]
use std::time::Duration;

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "prometheus")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "otlp")]
use opentelemetry::KeyValue;
#[cfg(feature = "otlp")]
use opentelemetry::trace::TracerProvider as _;
#[cfg(feature = "otlp")]
use opentelemetry_otlp::WithExportConfig;
#[cfg(feature = "otlp")]
use opentelemetry_sdk::{
    Resource,
    trace::{Sampler, SdkTracerProvider},
};

/// Noisy dependency targets capped regardless of the configured level.
const QUIET_TARGETS: &[&str] = &[
    "tower=info",
    "tower_http=info",
    "hyper=info",
    "hyper_util=info",
    "h2=info",
    "reqwest=info",
    "sentry=warn",
];

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name reported to tracing backends.
    pub service_name: &'static str,
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub log_level: String,
    /// Use JSON log format
    pub json_logs: bool,
    /// OpenTelemetry OTLP endpoint (optional)
    pub otlp_endpoint: Option<String>,
    /// Sentry DSN (optional)
    pub sentry_dsn: Option<String>,
    /// Environment name (e.g., "production", "development")
    pub environment: Option<String>,
    /// Application version
    pub version: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "sales-landing",
            log_level: "INFO".to_string(),
            json_logs: true,
            otlp_endpoint: None,
            sentry_dsn: None,
            environment: None,
            version: None,
        }
    }
}

/// Active telemetry handles that need graceful shutdown.
pub struct TelemetryGuard {
    #[cfg(feature = "otlp")]
    otel_provider: Option<SdkTracerProvider>,
    #[cfg(feature = "sentry")]
    _sentry_guard: Option<sentry::ClientInitGuard>,
}

impl TelemetryGuard {
    /// Flush and shut down telemetry providers.
    pub fn shutdown(self) {
        #[cfg(feature = "otlp")]
        if let Some(provider) = self.otel_provider
            && let Err(e) = provider.shutdown()
        {
            eprintln!("Failed to shutdown OpenTelemetry provider: {e}");
        }
    }
}

/// Install the Prometheus recorder and return the handle for `/metrics`.
///
/// # Panics
/// Panics if a global metrics recorder is already installed.
#[cfg(feature = "prometheus")]
#[must_use]
pub fn init_metrics() -> PrometheusHandle {
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
}

/// Returns `None` if no OTLP endpoint is configured or the exporter cannot
/// be built.
#[cfg(feature = "otlp")]
fn init_opentelemetry(config: &TelemetryConfig) -> Option<SdkTracerProvider> {
    let endpoint = config.otlp_endpoint.as_deref()?;

    let exporter = match opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .with_timeout(Duration::from_secs(5))
        .build()
    {
        Ok(exporter) => exporter,
        Err(e) => {
            eprintln!("Failed to create OTLP exporter: {e}");
            return None;
        }
    };

    let resource = Resource::builder()
        .with_attributes([KeyValue::new("service.name", config.service_name)])
        .build();

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_sampler(Sampler::AlwaysOn)
        .with_resource(resource)
        .build();

    opentelemetry::global::set_tracer_provider(provider.clone());

    Some(provider)
}

/// Returns `None` if no Sentry DSN is configured.
#[cfg(feature = "sentry")]
fn init_sentry(config: &TelemetryConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: config.version.clone().map(Into::into),
            environment: config.environment.clone().map(Into::into),
            traces_sample_rate: 0.2,
            attach_stacktrace: true,
            send_default_pii: false,
            ..Default::default()
        },
    ));

    if guard.is_enabled() {
        tracing::info!("Sentry initialized");
        Some(guard)
    } else {
        tracing::warn!("Sentry DSN provided but client not enabled");
        None
    }
}

fn parse_level(level: &str) -> Level {
    match level.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn env_filter(level: Level) -> EnvFilter {
    QUIET_TARGETS
        .iter()
        .filter_map(|directive| directive.parse::<Directive>().ok())
        .fold(
            EnvFilter::from_default_env().add_directive(level.into()),
            EnvFilter::add_directive,
        )
}

/// Setup the logging/tracing stack.
///
/// - Console logging (JSON or compact human-readable)
/// - OpenTelemetry tracing (if OTLP endpoint configured)
/// - Sentry error tracking (if DSN configured)
///
/// Keep the returned guard alive for the application lifetime and call
/// [`TelemetryGuard::shutdown`] on exit.
///
/// # Panics
/// Panics if a global tracing subscriber is already installed.
#[must_use]
pub fn setup_telemetry(config: &TelemetryConfig) -> TelemetryGuard {
    let env_filter = env_filter(parse_level(&config.log_level));

    // Sentry must be initialized before the subscriber
    #[cfg(feature = "sentry")]
    let sentry_guard = init_sentry(config);

    #[cfg(feature = "otlp")]
    let otel_provider = init_opentelemetry(config);

    let fmt_layer = if config.json_logs {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_timer(ChronoLocal::new("%H:%M:%S%.3f".to_string()))
            .compact()
            .boxed()
    };

    #[cfg(feature = "otlp")]
    let otel_layer = otel_provider.as_ref().map(|provider| {
        let tracer = provider.tracer(config.service_name);
        tracing_opentelemetry::layer().with_tracer(tracer)
    });
    #[cfg(not(feature = "otlp"))]
    let otel_layer: Option<tracing_subscriber::layer::Identity> = None;

    #[cfg(feature = "sentry")]
    let sentry_layer = Some(sentry_tracing::layer());
    #[cfg(not(feature = "sentry"))]
    let sentry_layer: Option<tracing_subscriber::layer::Identity> = None;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .with(sentry_layer)
        .init();

    TelemetryGuard {
        #[cfg(feature = "otlp")]
        otel_provider,
        #[cfg(feature = "sentry")]
        _sentry_guard: sentry_guard,
    }
}

/// Capture an error to Sentry (if enabled).
#[cfg(feature = "sentry")]
pub fn capture_error<E: std::fmt::Display>(error: &E) {
    sentry::capture_message(&error.to_string(), sentry::Level::Error);
}

/// Capture an error to Sentry (no-op if Sentry feature is disabled).
#[cfg(not(feature = "sentry"))]
pub fn capture_error<E: std::fmt::Display>(_error: &E) {}
