//! Intent Cache - an in-process response cache
//!
//! Answers intents read from stdin, one JSON line per intent on stdout.

use std::sync::Arc;

use tokio::io::{self, BufReader};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use intent_cache::session::run_session;
use intent_cache::{CacheConfig, CachedResponder, ResponseCache, StaticPayloadProvider};

/// Main entry point for the intent cache.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the cache and the responder around it
/// 4. Answer stdin lines until end of input or a shutdown signal
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "intent_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting intent cache");

    let config = CacheConfig::from_env();
    info!(
        "Configuration loaded: ttl={}s, capacity={}, trim_fraction={}",
        config.ttl.as_secs(),
        config.capacity,
        config.trim_fraction
    );

    let cache = Arc::new(ResponseCache::new(config));
    let responder = CachedResponder::new(cache, StaticPayloadProvider::new());

    let stdin = BufReader::new(io::stdin());
    let stdout = io::stdout();

    tokio::select! {
        answered = run_session(stdin, stdout, &responder) => {
            info!("Input closed after {} intents", answered?);
        }
        _ = shutdown_signal() => {}
    }

    let stats = responder.cache().stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        entries = stats.total_entries,
        "Shutdown complete"
    );
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
