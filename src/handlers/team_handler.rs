use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::db::teams;
use crate::models::team::TeamRegistrationRequest;

/// List all teams
#[tracing::instrument(name = "Get all teams", skip(pool))]
pub async fn get_all_teams(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match teams::get_all_teams(pool.get_ref()).await {
        Ok(teams) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "teams": teams
        }))),
        Err(e) => {
            tracing::error!("Failed to fetch teams: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to fetch teams"
            })))
        }
    }
}

/// Register a new team
#[tracing::instrument(
    name = "Register team",
    skip(team_request, pool),
    fields(team_name = %team_request.name)
)]
pub async fn register_new_team(
    team_request: web::Json<TeamRegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = team_request.validate() {
        tracing::warn!("Team registration validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": validation_error
        })));
    }

    let name = team_request.sanitized_name();

    // Team names are unique across the dataset
    match teams::find_team_by_name(pool.get_ref(), &name).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(json!({
                "success": false,
                "error": format!("Team '{}' already exists", name)
            })));
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Database error checking existing team: {}", e);
            return Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to check existing team"
            })));
        }
    }

    match teams::insert_team(
        pool.get_ref(),
        &name,
        team_request.country.as_deref(),
        team_request.founded_year,
        team_request.captain.as_deref(),
        team_request.coach.as_deref(),
    )
    .await
    {
        Ok(team) => {
            tracing::info!("Team '{}' registered with id {}", team.name, team.id);
            Ok(HttpResponse::Created().json(json!({
                "success": true,
                "team": team
            })))
        }
        Err(e) => {
            tracing::error!("Failed to insert team: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to register team"
            })))
        }
    }
}
