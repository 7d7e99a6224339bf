use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::db::{players, teams};
use crate::models::player::PlayerRegistrationRequest;

/// List all players with their team names
#[tracing::instrument(name = "Get all players", skip(pool))]
pub async fn get_all_players(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match players::get_all_players(pool.get_ref()).await {
        Ok(players) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "players": players
        }))),
        Err(e) => {
            tracing::error!("Failed to fetch players: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to fetch players"
            })))
        }
    }
}

/// Register a new player
#[tracing::instrument(
    name = "Register player",
    skip(player_request, pool),
    fields(player_name = %player_request.name)
)]
pub async fn register_new_player(
    player_request: web::Json<PlayerRegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = player_request.validate() {
        tracing::warn!("Player registration validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": validation_error
        })));
    }

    // A player may be teamless, but a referenced team must exist
    if let Some(team_id) = player_request.team_id {
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

    match players::insert_player(pool.get_ref(), &player_request).await {
        Ok(player) => {
            tracing::info!("Player '{}' registered with id {}", player.name, player.id);
            Ok(HttpResponse::Created().json(json!({
                "success": true,
                "player": player
            })))
        }
        Err(e) => {
            tracing::error!("Failed to insert player: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to register player"
            })))
        }
    }
}
