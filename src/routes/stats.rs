use actix_web::{get, post, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::stat_handler;
use crate::models::player::PlayerStatUploadRequest;

/// All recorded performances for one player
#[get("/players/{player_id}/stats")]
async fn get_player_stats(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let player_id = path.into_inner();
    stat_handler::get_player_stats(player_id, pool).await
}

/// Record a player's performance in a match
#[post("/player-stats")]
async fn upload_player_stat(
    stat_request: web::Json<PlayerStatUploadRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    stat_handler::upload_player_stat(stat_request, pool).await
}
