//! Tracing setup
//!
//! Log output is written to stderr in both formats. Stdout belongs to the
//! quote itself.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::config::AppConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `logging.level`; `logging.format = "json"` selects
/// structured output.
pub fn init_tracing(config: &AppConfig) {
    let env_directive = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(config, env_directive.as_deref());

    tracing_subscriber::registry()
        .with(log_layer(&config.logging.format))
        .with(filter)
        .init();
}

/// Build the level filter from an optional `RUST_LOG` directive.
///
/// A missing, blank or unparsable directive falls back to `logging.level`,
/// then to `info`.
pub fn log_filter(config: &AppConfig, env_directive: Option<&str>) -> EnvFilter {
    env_directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(&config.logging.level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn log_layer(format: &str) -> Box<dyn Layer<Registry> + Send + Sync> {
    if format.eq_ignore_ascii_case("json") {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    }
}
