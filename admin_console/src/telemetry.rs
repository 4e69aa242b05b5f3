use tracing_subscriber::EnvFilter;

use crate::config::Environment;

/// Initializes the global tracing subscriber: human-readable locally,
/// flattened JSON lines in production. Call once at startup.
pub fn init_telemetry(environment: Environment) {
    match environment {
        Environment::Local => {
            tracing_subscriber::fmt()
                .with_ansi(true)
                .with_env_filter(EnvFilter::from_default_env())
                .pretty()
                .init();
        }
        Environment::Production => {
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_env_filter(EnvFilter::from_default_env())
                .json()
                .flatten_event(true)
                .init();
        }
    }
}
