use std::fmt::Debug;
use tracing_subscriber::EnvFilter;

const SEPARATOR_WIDTH: usize = 60;

/// Initialize tracing and bridge `log` to `tracing`.
/// Calling this multiple times is safe (subsequent attempts are ignored where possible).
pub fn init_tracing(enable_debug: bool) {
    // Bridge `log` records into `tracing` so existing `log` macros are captured
    let _ = tracing_log::LogTracer::init();

    // Prefer explicit debug flag, otherwise fall back to RUST_LOG; our own
    // call logging stays visible by default
    let env_filter = if enable_debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,rgb_histogram=info"))
    };

    // stdout carries the written paths, diagnostics go to stderr.
    // Use try_init so calling this multiple times (e.g., in tests) doesn't panic
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Run `f`, logging its arguments before and its result after the call.
pub fn log_call<A, T, E, F>(name: &str, args: &A, f: F) -> Result<T, E>
where
    A: Debug + ?Sized,
    T: Debug,
    E: std::fmt::Display,
    F: FnOnce() -> Result<T, E>,
{
    let separator = "=".repeat(SEPARATOR_WIDTH);
    tracing::info!("{}", separator);
    tracing::info!(function = name, "arguments: {:?}", args);

    let result = f();

    match &result {
        Ok(value) => tracing::info!(function = name, "result: {:?}", value),
        Err(e) => tracing::error!(function = name, "failed: {}", e),
    }
    tracing::info!("{}", separator);

    result
}
