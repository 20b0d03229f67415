use tracing_subscriber::fmt::time::uptime;
use tracing_subscriber::EnvFilter;

/// Configure tracing once at startup for the whole process.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (from [`AppConfig`](super::AppConfig))
/// is used. Output is compact with an uptime timer.
///
/// ```bash
/// RUST_LOG=inventory_sort=debug cargo run
/// ```
pub fn setup_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(uptime())
        .compact()
        .init();
}
