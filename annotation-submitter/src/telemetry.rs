use std::io::{self, IsTerminal};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// RFC3339 UTC timer implemented via `chrono`.
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        let s = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

/// `RUST_LOG` if it parses, otherwise [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber: compact single-line events on stdout,
/// ANSI colors only on a terminal.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let use_ansi = io::stdout().is_terminal();

    let layer = fmt::layer()
        .compact()
        .with_timer(ChronoRfc3339Utc)
        .with_level(true)
        .with_target(false)
        .with_ansi(use_ansi);

    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(layer)
        .try_init();
}
