use crate::frameworks::config;
use crate::interface_adapters::clients::HttpMatchmakingBackend;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use crate::use_cases::request_match::MatchRequestInitiator;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let settings = match config::load() {
        Ok(settings) => settings,
        Err(error) => {
            tracing::error!(%error, "failed to load settings");
            return;
        }
    };

    let resources = match settings.resource_mapping() {
        Ok(resources) => resources,
        Err(error) => {
            tracing::error!(%error, "failed to resolve resource mapping");
            return;
        }
    };
    tracing::debug!(resource_name = %settings.resource_name, "matchmaking resources configured.");

    // One initiator per process; it owns the client's only ticket.
    let initiator = MatchRequestInitiator::new(resources, HttpMatchmakingBackend::new())
        .with_logical_name(settings.resource_name.clone());
    let state = Arc::new(AppState {
        matchmaking: Arc::new(initiator),
    });

    let app = routes::app(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], settings.port));
    tracing::info!(%addr, "listening");

    // Bind TCP listener with error handling.
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%addr, %error, "failed to bind");
            return; // Abort startup on bind failure.
        }
    };

    // Serve app and report errors rather than panicking.
    if let Err(error) = axum::serve(listener, app).await {
        tracing::error!(%error, "server error");
    }
}
