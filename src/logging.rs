//! Tracing subscriber setup for embedders.

use tracing_subscriber::EnvFilter;

/// Install a formatted tracing subscriber.
///
/// `filter` overrides the `RUST_LOG` environment variable; when both are
/// absent the level defaults to `info`.  Idempotent: a second call (or an
/// embedder-installed subscriber) wins and this becomes a no-op.
pub fn init(filter: Option<&str>) {
    let env_filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
