// src/main.rs

use std::sync::Arc;

use dotenvy::dotenv;
use quizbank::bank::BankCatalog;
use quizbank::config::Config;
use quizbank::routes;
use quizbank::state::AppState;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "quizbank.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Banks are read once and shared read-only for the life of the process
    tracing::info!("Loading question banks from {}...", config.bank_dir.display());
    let catalog = BankCatalog::load_dir(&config.bank_dir).expect("Failed to load question banks");
    tracing::info!("{} question banks loaded.", catalog.len());

    for bank in catalog.iter() {
        let report = bank.validate();
        for issue in &report.issues {
            tracing::warn!("Bank '{}': {}", bank.id(), issue);
        }
    }

    // Create AppState
    let state = AppState {
        catalog: Arc::new(catalog),
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}
