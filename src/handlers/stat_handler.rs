use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{matches, players, stats};
use crate::models::player::{PlayerStatUploadRequest, PlayerStatView};

/// Record a player's performance in a match
#[tracing::instrument(
    name = "Upload player stat",
    skip(stat_request, pool),
    fields(
        player_id = %stat_request.player_id,
        match_id = %stat_request.match_id
    )
)]
pub async fn upload_player_stat(
    stat_request: web::Json<PlayerStatUploadRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(validation_error) = stat_request.validate() {
        tracing::warn!("Player stat validation failed: {}", validation_error);
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": validation_error
        })));
    }

    match players::player_exists(pool.get_ref(), stat_request.player_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "error": format!("Player {} does not exist", stat_request.player_id)
            })));
        }
        Err(e) => {
            tracing::error!("Database error checking player: {}", e);
            return Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to check player"
            })));
        }
    }

    match matches::match_exists(pool.get_ref(), stat_request.match_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "error": format!("Match {} does not exist", stat_request.match_id)
            })));
        }
        Err(e) => {
            tracing::error!("Database error checking match: {}", e);
            return Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to check match"
            })));
        }
    }

    match stats::upsert_player_stat(pool.get_ref(), &stat_request).await {
        Ok(stat) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "stat": PlayerStatView::from(stat)
        }))),
        Err(e) => {
            tracing::error!("Failed to record player stat: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to record player stat"
            })))
        }
    }
}

/// All recorded performances for one player
#[tracing::instrument(name = "Get player stats", skip(pool))]
pub async fn get_player_stats(
    player_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match stats::get_stats_for_player(pool.get_ref(), player_id).await {
        Ok(stats) => {
            let stats: Vec<PlayerStatView> =
                stats.into_iter().map(PlayerStatView::from).collect();
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "stats": stats
            })))
        }
        Err(e) => {
            tracing::error!("Failed to fetch player stats: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to fetch player stats"
            })))
        }
    }
}
