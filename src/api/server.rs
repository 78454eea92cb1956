use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter, prelude::*};
use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;  // Import as _ since we only need the trait methods
use opentelemetry_sdk::{trace::{SdkTracerProvider, Sampler}, Resource};
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use tracing_opentelemetry::OpenTelemetryLayer;

use crate::api::handler::{get_points_handler, process_receipt_handler};
use crate::config::{OtelConfig, ServerConfig};
use crate::domain::ReceiptService;
use crate::store::ReceiptStore;

/// Shared handler state. Every worker thread sees the same store.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub service: Arc<ReceiptService>,
}

impl AppState {
    pub fn new(service: ReceiptService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

pub fn init_tracing(config: &ServerConfig) {
    let enable_otel = config.otel.enabled;

    // Base subscriber - span close events only when not exporting spans
    let subscriber = tracing_subscriber::registry()
        .with(
            if !enable_otel {
                Some(fmt::layer()
                    .json()
                    .with_target(false)
                    .with_span_events(fmt::format::FmtSpan::CLOSE)) // Log span close with duration
            } else {
                Some(fmt::layer()
                    .json()
                    .with_target(false))
            }
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,tower=warn,h2=error"))
        );

    if enable_otel {
        match init_opentelemetry(&config.otel, &config.environment) {
            Ok(provider) => {
                opentelemetry::global::set_tracer_provider(provider.clone());

                // Get tracer directly from provider for OpenTelemetryLayer
                // (global::tracer returns BoxedTracer which doesn't implement PreSampledTracer)
                let tracer = provider.tracer(config.otel.service_name.clone());

                subscriber
                    .with(OpenTelemetryLayer::new(tracer))
                    .init();

                info!("OpenTelemetry enabled: {}", config.otel.endpoint);
            }
            Err(e) => {
                subscriber.init();
                tracing::error!("Failed to initialize OpenTelemetry: {}. Continuing with logs only.", e);
            }
        }
    } else {
        subscriber.init();
    }
}

fn init_opentelemetry(otel: &OtelConfig, environment: &str) -> anyhow::Result<SdkTracerProvider> {
    let resource = Resource::builder()
        .with_attribute(KeyValue::new("service.name", otel.service_name.clone()))
        .with_attribute(KeyValue::new("service.version", env!("CARGO_PKG_VERSION")))
        .with_attribute(KeyValue::new("deployment.environment", environment.to_string()))
        .build();

    let exporter = SpanExporter::builder()
        .with_http()
        .with_endpoint(otel.endpoint.clone())
        .build()?;

    let provider = SdkTracerProvider::builder()
        .with_resource(resource)
        .with_sampler(Sampler::TraceIdRatioBased(otel.sampling_rate))
        .with_batch_exporter(exporter)
        .build();

    info!("OpenTelemetry sampling rate: {}%", otel.sampling_rate * 100.0);

    Ok(provider)
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt_handler))
        .route("/receipts/{id}/points", get(get_points_handler))
        // Health check endpoint
        .route("/health", get(health_check))
        .with_state(state)
        // Add tracing layer for observability
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config);

    info!("Starting receipt processor");

    // Set up ctrl-c handler for graceful shutdown
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install CTRL+C signal handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Shutting down gracefully...");
    };

    let app = create_app(AppState::new(ReceiptService::new(ReceiptStore::new())));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
