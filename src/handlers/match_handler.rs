use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::db::{matches, teams};
use crate::models::cricket_match::MatchRegistrationRequest;

/// List all matches, most recent first
#[tracing::instrument(name = "Get all matches", skip(pool))]
pub async fn get_all_matches(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match matches::get_all_matches(pool.get_ref()).await {
        Ok(matches) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "matches": matches
        }))),
        Err(e) => {
            tracing::error!("Failed to fetch matches: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to fetch matches"
            })))
        }
    }
}

/// Register a new match
#[tracing::instrument(
    name = "Register match",
    skip(match_request, pool),
    fields(
        team1 = %match_request.team1_id,
        team2 = %match_request.team2_id,
        status = %match_request.status
    )
)]
pub async fn register_new_match(
    match_request: web::Json<MatchRegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = match_request.validate() {
        tracing::warn!("Match registration validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": validation_error
        })));
    }

    for team_id in [match_request.team1_id, match_request.team2_id] {
        match teams::team_exists(pool.get_ref(), team_id).await {
            Ok(true) => {}
            Ok(false) => {
                return Ok(HttpResponse::BadRequest().json(json!({
                    "success": false,
                    "error": format!("Team {} does not exist", team_id)
                })));
            }
            Err(e) => {
                tracing::error!("Database error checking team: {}", e);
                return Ok(HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "error": "Failed to check team"
                })));
            }
        }
    }

    match matches::insert_match(pool.get_ref(), &match_request).await {
        Ok(match_row) => {
            tracing::info!("Match {} registered", match_row.id);
            Ok(HttpResponse::Created().json(json!({
                "success": true,
                "match": match_row
            })))
        }
        Err(e) => {
            tracing::error!("Failed to insert match: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to register match"
            })))
        }
    }
}
