use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::db::matches;
use crate::models::cricket_match::MatchStatus;
use crate::services::cricket_client::CricketApiClient;

/// Live matches from the external feed merged with locally tracked ones.
///
/// The external feed is best-effort: if it is down we still serve the
/// local rows, with an empty external section.
#[tracing::instrument(name = "Get live matches", skip(pool, cricket_client))]
pub async fn get_live_matches(
    pool: web::Data<PgPool>,
    cricket_client: web::Data<CricketApiClient>,
) -> Result<HttpResponse> {
    let external_matches = match cricket_client.live_matches().await {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!("External cricket API unavailable: {}", e);
            Vec::new()
        }
    };

    merged_response(&pool, MatchStatus::Live, "live_matches", external_matches).await
}

/// Upcoming fixtures, external feed plus local rows.
#[tracing::instrument(name = "Get upcoming matches", skip(pool, cricket_client))]
pub async fn get_upcoming_matches(
    pool: web::Data<PgPool>,
    cricket_client: web::Data<CricketApiClient>,
) -> Result<HttpResponse> {
    let external_matches = match cricket_client.upcoming_matches().await {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!("External cricket API unavailable: {}", e);
            Vec::new()
        }
    };

    merged_response(&pool, MatchStatus::Upcoming, "upcoming_matches", external_matches).await
}

/// Recently completed matches, external feed plus local rows.
#[tracing::instrument(name = "Get recent matches", skip(pool, cricket_client))]
pub async fn get_recent_matches(
    pool: web::Data<PgPool>,
    cricket_client: web::Data<CricketApiClient>,
) -> Result<HttpResponse> {
    let external_matches = match cricket_client.recent_matches().await {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!("External cricket API unavailable: {}", e);
            Vec::new()
        }
    };

    merged_response(&pool, MatchStatus::Completed, "recent_matches", external_matches).await
}

async fn merged_response(
    pool: &PgPool,
    status: MatchStatus,
    external_key: &str,
    external_matches: Vec<serde_json::Value>,
) -> Result<HttpResponse> {
    match matches::get_matches_by_status(pool, status).await {
        Ok(db_matches) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            external_key: external_matches,
            "db_matches": db_matches
        }))),
        Err(e) => {
            tracing::error!("Failed to fetch {} matches: {}", status, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to fetch matches"
            })))
        }
    }
}
