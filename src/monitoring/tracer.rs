/*!
 * Structured Tracing
 * Subscriber setup for the simulator's tracing events
 *
 * Engine events:
 * - `info`: one event per finished simulation
 * - `debug`: completions and idle jumps
 * - `trace`: every dispatch slice (one per time unit for SRJF/LRJF)
 */

use crate::core::limits::{DEFAULT_LOG_LEVEL, TRACE_JSON_ENV};
use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHED_TRACE_JSON: Enable JSON output (default: false)
///
/// Output goes to stderr so it never interleaves with printed reports.
pub fn init_tracing() {
    let env_filter = build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok());

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Filter from `RUST_LOG` directives, falling back to `DEFAULT_LOG_LEVEL`
/// when they are unset, empty or malformed
fn build_filter(directives: Option<String>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
