use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::analytics_handler;
use crate::handlers::analytics_handler::{MatchStatisticsQuery, RankingQuery};

/// Top run scorers, descending by total runs
#[get("/analytics/top-scorers")]
async fn get_top_scorers(
    query: web::Query<RankingQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    analytics_handler::get_top_scorers(query, pool).await
}

/// Top wicket takers, descending by wickets then ascending by economy
#[get("/analytics/top-bowlers")]
async fn get_top_bowlers(
    query: web::Query<RankingQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    analytics_handler::get_top_bowlers(query, pool).await
}

/// Win/loss record for every team
#[get("/analytics/team-performance")]
async fn get_team_performance(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    analytics_handler::get_team_performance(pool).await
}

/// Aggregate match statistics, optionally filtered by match type
#[get("/analytics/match-statistics")]
async fn get_match_statistics(
    query: web::Query<MatchStatisticsQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    analytics_handler::get_match_statistics(query, pool).await
}

/// Per-venue aggregates, busiest venues first
#[get("/analytics/venue-statistics")]
async fn get_venue_statistics(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    analytics_handler::get_venue_statistics(pool).await
}
