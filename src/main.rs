use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::time::Duration;

use cricket_analytics_backend::config::settings::get_config;
use cricket_analytics_backend::run;
use cricket_analytics_backend::services::cricket_client::CricketApiClient;
use cricket_analytics_backend::telemetry::{get_subscriber, init_subscriber};
use secrecy::ExposeSecret;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "cricket-analytics-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    // Only try to establish connection when actually used
    let connection_pool = PgPoolOptions::new()
        .max_connections(32)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect_lazy(&config.database.connection_string().expose_secret())
        .expect("Failed to create Postgres connection pool");

    let cricket_client = CricketApiClient::new(&config.cricket_api)
        .expect("Failed to create cricket API client");

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Starting cricket analytics backend on {}", address);

    run(listener, connection_pool, cricket_client)?.await
}
