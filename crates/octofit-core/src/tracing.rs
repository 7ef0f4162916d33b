use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset. Per-statement sqlx logs stay muted.
pub const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

/// Install the JSON stdout subscriber with an `EnvFilter` from `RUST_LOG`,
/// falling back to [`DEFAULT_FILTER`]. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json())
        .try_init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
