use once_cell::sync::Lazy;
use secrecy::ExposeSecret;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use uuid::Uuid;

use cricket_analytics_backend::config::settings::{get_config, DatabaseSettings};
use cricket_analytics_backend::models::cricket_match::MatchStatus;
use cricket_analytics_backend::run;
use cricket_analytics_backend::services::cricket_client::CricketApiClient;
use cricket_analytics_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    // Point the external feed at a closed port so requests fail fast and
    // the handlers fall back to local rows only.
    configuration.cricket_api.base_url = "http://127.0.0.1:1".to_string();
    let connection_pool = configure_db(&configuration.database).await;

    let cricket_client = CricketApiClient::new(&configuration.cricket_api)
        .expect("Failed to create cricket API client");

    let server = run(listener, connection_pool.clone(), cricket_client)
        .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create a throwaway database for this test
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    let connection_pool = PgPool::connect(&config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

pub async fn seed_team(pool: &PgPool, name: &str, country: &str) -> Uuid {
    let row: (Uuid,) = sqlx::query_as(
        "INSERT INTO teams (name, country) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(country)
    .fetch_one(pool)
    .await
    .expect("Failed to seed team");
    row.0
}

pub async fn seed_player(
    pool: &PgPool,
    name: &str,
    nationality: &str,
    team_id: Option<Uuid>,
) -> Uuid {
    let row: (Uuid,) = sqlx::query_as(
        "INSERT INTO players (name, nationality, team_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(nationality)
    .bind(team_id)
    .fetch_one(pool)
    .await
    .expect("Failed to seed player");
    row.0
}

#[allow(clippy::too_many_arguments)]
pub async fn seed_match(
    pool: &PgPool,
    team1_id: Uuid,
    team2_id: Uuid,
    venue: Option<&str>,
    match_type: &str,
    status: MatchStatus,
    winner_team_id: Option<Uuid>,
) -> Uuid {
    let row: (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO matches (team1_id, team2_id, venue, match_type, status, winner_team_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(team1_id)
    .bind(team2_id)
    .bind(venue)
    .bind(match_type)
    .bind(status)
    .bind(winner_team_id)
    .fetch_one(pool)
    .await
    .expect("Failed to seed match");
    row.0
}

pub struct StatRow {
    pub runs_scored: i32,
    pub balls_faced: i32,
    pub fours: i32,
    pub sixes: i32,
    pub wickets_taken: i32,
    pub overs_bowled: f64,
    pub runs_conceded: i32,
}

impl StatRow {
    pub fn batting(runs: i32, balls: i32) -> Self {
        Self {
            runs_scored: runs,
            balls_faced: balls,
            fours: 0,
            sixes: 0,
            wickets_taken: 0,
            overs_bowled: 0.0,
            runs_conceded: 0,
        }
    }

    pub fn bowling(wickets: i32, overs: f64, conceded: i32) -> Self {
        Self {
            runs_scored: 0,
            balls_faced: 0,
            fours: 0,
            sixes: 0,
            wickets_taken: wickets,
            overs_bowled: overs,
            runs_conceded: conceded,
        }
    }
}

pub async fn seed_player_stat(pool: &PgPool, player_id: Uuid, match_id: Uuid, stat: StatRow) {
    sqlx::query(
        r#"
        INSERT INTO player_stats (
            player_id, match_id, runs_scored, balls_faced, fours, sixes,
            wickets_taken, overs_bowled, runs_conceded
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(player_id)
    .bind(match_id)
    .bind(stat.runs_scored)
    .bind(stat.balls_faced)
    .bind(stat.fours)
    .bind(stat.sixes)
    .bind(stat.wickets_taken)
    .bind(stat.overs_bowled)
    .bind(stat.runs_conceded)
    .execute(pool)
    .await
    .expect("Failed to seed player stat");
}

pub async fn seed_match_score(
    pool: &PgPool,
    match_id: Uuid,
    team_id: Uuid,
    innings_number: i32,
    total_runs: i32,
) {
    sqlx::query(
        r#"
        INSERT INTO match_scores (match_id, team_id, innings_number, total_runs)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(match_id)
    .bind(team_id)
    .bind(innings_number)
    .bind(total_runs)
    .execute(pool)
    .await
    .expect("Failed to seed match score");
}
