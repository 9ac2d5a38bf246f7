//! Platform-aware logging initialization.
//!
//! Browser builds route `tracing` events to the developer console; native
//! builds log to stderr.

use std::sync::Once;

use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

/// Install the global subscriber at `level` ("error" through "trace").
///
/// Idempotent: only the first call has any effect. An unrecognised level
/// falls back to `warn`.
pub fn init(level: &str) {
    INIT.call_once(|| {
        let level = parse_level(level);

        #[cfg(feature = "web")]
        init_web_logging(level);

        #[cfg(not(feature = "web"))]
        init_native_logging(level);
    });
}

fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::OFF,
        "error" => LevelFilter::ERROR,
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "debug" => LevelFilter::DEBUG,
        "trace" => LevelFilter::TRACE,
        _ => LevelFilter::WARN,
    }
}

#[cfg(feature = "web")]
fn init_web_logging(level: LevelFilter) {
    console_error_panic_hook::set_once();
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time(); // WASM doesn't have std::time

    let _ = tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .try_init();
}

#[cfg(not(feature = "web"))]
fn init_native_logging(level: LevelFilter) {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
