use std::process::ExitCode;

use campaign_service::{
    app_module::{AppService, AppState},
    app_router::build_app,
    config::ServiceConfig,
};
use dotenvy::dotenv;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    // No tracing subscriber exists until the config is read.
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.is_dev());

    let state = AppState::new(AppService::new(&config.llm), config.session_ttl);
    let app = build_app(state, config.request_timeout);

    let address = config.listen_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Unable to bind {}: {}", address, e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Server started, listening on {}", address);
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_tracing(dev: bool) {
    let subscriber_builder = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    let result = if dev {
        tracing::subscriber::set_global_default(
            subscriber_builder
                .compact()
                .pretty()
                .with_ansi(true)
                .finish(),
        )
    } else {
        tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        )
    };

    if let Err(e) = result {
        eprintln!("setting tracing subscriber failed: {}", e);
    }
}
