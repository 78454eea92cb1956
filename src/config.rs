use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_OTEL_ENDPOINT: &str = "http://localhost:4318/v1/traces";
const DEFAULT_SERVICE_NAME: &str = "receipt-processor";
const DEFAULT_SAMPLING_RATE: f64 = 0.01;

/// Server configuration read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub environment: String,
    pub otel: OtelConfig,
}

/// OpenTelemetry export settings
#[derive(Debug, Clone, PartialEq)]
pub struct OtelConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub service_name: String,
    pub sampling_rate: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: "development".to_string(),
            otel: OtelConfig {
                enabled: false,
                endpoint: DEFAULT_OTEL_ENDPOINT.to_string(),
                service_name: DEFAULT_SERVICE_NAME.to_string(),
                sampling_rate: DEFAULT_SAMPLING_RATE,
            },
        }
    }
}

impl ServerConfig {
    /// Load config from environment variables; missing or unparseable
    /// values fall back to the defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            port: lookup("PORT")
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            otel: OtelConfig {
                enabled: lookup("OTEL_ENABLED")
                    .and_then(|s| s.parse::<bool>().ok())
                    .unwrap_or(defaults.otel.enabled),
                endpoint: lookup("OTEL_EXPORTER_OTLP_ENDPOINT")
                    .unwrap_or(defaults.otel.endpoint),
                service_name: lookup("OTEL_SERVICE_NAME")
                    .unwrap_or(defaults.otel.service_name),
                sampling_rate: lookup("OTEL_TRACE_SAMPLING_RATE")
                    .and_then(|s| s.parse::<f64>().ok())
                    .filter(|rate| rate.is_finite())
                    .unwrap_or(defaults.otel.sampling_rate)
                    .clamp(0.0, 1.0),
            },
        }
    }
}
