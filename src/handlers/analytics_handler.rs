// src/handlers/analytics_handler.rs
use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;

use crate::analytics::{AnalyticsError, StatsAggregator, DEFAULT_RANKING_LIMIT};

#[derive(Debug, Deserialize)]
pub struct RankingQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct MatchStatisticsQuery {
    pub match_type: Option<String>,
}

fn error_response(operation: &str, e: AnalyticsError) -> HttpResponse {
    match e {
        AnalyticsError::InvalidArgument(msg) => {
            tracing::warn!("{} rejected: {}", operation, msg);
            HttpResponse::BadRequest().json(json!({
                "success": false,
                "error": msg
            }))
        }
        AnalyticsError::DataAccess(cause) => {
            tracing::error!("{} failed: {}", operation, cause);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": format!("Failed to compute {}", operation)
            }))
        }
    }
}

/// Top run scorers across all matches
#[tracing::instrument(name = "Get top scorers", skip(pool))]
pub async fn get_top_scorers(
    query: web::Query<RankingQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let aggregator = StatsAggregator::new(pool.get_ref().clone());
    let limit = query.limit.unwrap_or(DEFAULT_RANKING_LIMIT);

    match aggregator.top_scorers(limit).await {
        Ok(top_scorers) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "top_scorers": top_scorers
        }))),
        Err(e) => Ok(error_response("top scorers", e)),
    }
}

/// Top wicket takers across all matches
#[tracing::instrument(name = "Get top bowlers", skip(pool))]
pub async fn get_top_bowlers(
    query: web::Query<RankingQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let aggregator = StatsAggregator::new(pool.get_ref().clone());
    let limit = query.limit.unwrap_or(DEFAULT_RANKING_LIMIT);

    match aggregator.top_bowlers(limit).await {
        Ok(top_bowlers) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "top_bowlers": top_bowlers
        }))),
        Err(e) => Ok(error_response("top bowlers", e)),
    }
}

/// Win/loss record for every team
#[tracing::instrument(name = "Get team performance", skip(pool))]
pub async fn get_team_performance(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let aggregator = StatsAggregator::new(pool.get_ref().clone());

    match aggregator.team_performance().await {
        Ok(team_performance) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "team_performance": team_performance
        }))),
        Err(e) => Ok(error_response("team performance", e)),
    }
}

/// Aggregate match statistics, optionally filtered by match type
#[tracing::instrument(name = "Get match statistics", skip(pool))]
pub async fn get_match_statistics(
    query: web::Query<MatchStatisticsQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let aggregator = StatsAggregator::new(pool.get_ref().clone());

    match aggregator.match_statistics(query.match_type.as_deref()).await {
        Ok(statistics) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "match_statistics": statistics
        }))),
        Err(e) => Ok(error_response("match statistics", e)),
    }
}

/// Per-venue aggregates
#[tracing::instrument(name = "Get venue statistics", skip(pool))]
pub async fn get_venue_statistics(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let aggregator = StatsAggregator::new(pool.get_ref().clone());

    match aggregator.venue_statistics().await {
        Ok(statistics) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "venue_statistics": statistics
        }))),
        Err(e) => Ok(error_response("venue statistics", e)),
    }
}
