mod proxy;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use widgets_core::{HttpFetcher, OfflineCache, ResponseCache, DEFAULT_CACHE_NAME};

use proxy::{proxy_router, ProxyState};

#[derive(Parser)]
#[command(name = "widgets-proxy")]
struct Args {
    /// Origin of the widget server (catalog and render endpoints).
    #[arg(long, default_value = "http://localhost:4777", env = "WIDGETS_UPSTREAM")]
    upstream: String,

    /// Port to listen on.
    #[arg(long, default_value = "4778", env = "WIDGETS_PROXY_PORT")]
    port: u16,

    /// Address to bind to.
    #[arg(long, default_value = "127.0.0.1", env = "WIDGETS_PROXY_BIND")]
    bind: String,

    /// Name of the cache region.
    #[arg(long, default_value = DEFAULT_CACHE_NAME, env = "WIDGETS_CACHE_NAME")]
    cache_name: String,

    /// Largest request body forwarded upstream.
    #[arg(long, default_value = "16777216", env = "WIDGETS_PROXY_MAX_BODY")]
    max_body_bytes: usize,

    /// Upstream request timeout in seconds.
    #[arg(long, default_value = "10", env = "WIDGETS_PROXY_TIMEOUT")]
    timeout_secs: u64,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    configure_logging();
    let args = Args::parse();

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()
        .unwrap_or_else(|e| {
            error!("failed to create HTTP client: {e}");
            std::process::exit(1);
        });

    // Active from the first request on; nothing bypasses the interceptor.
    let interceptor = OfflineCache::install(
        ResponseCache::open(&args.cache_name),
        Arc::new(HttpFetcher::new(http)),
    );

    let upstream = args.upstream.trim_end_matches('/').to_string();
    info!("forwarding to {upstream}");

    let state = Arc::new(ProxyState {
        upstream,
        interceptor,
        max_body_bytes: args.max_body_bytes,
    });

    let app = proxy_router(state);

    let addr = format!("{}:{}", args.bind, args.port);

    info!("binding to {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    info!("widgets-proxy listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
