use actix_web::{get, post, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::player_handler;
use crate::models::player::PlayerRegistrationRequest;

/// List all players
#[get("/players")]
async fn get_players(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    player_handler::get_all_players(pool).await
}

/// Register a new player
#[post("/players")]
async fn create_player(
    player_request: web::Json<PlayerRegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    player_handler::register_new_player(player_request, pool).await
}
