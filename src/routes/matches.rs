use actix_web::{get, post, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::{live_match_handler, match_handler};
use crate::models::cricket_match::MatchRegistrationRequest;
use crate::services::cricket_client::CricketApiClient;

/// List all matches
#[get("/matches")]
async fn get_matches(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_handler::get_all_matches(pool).await
}

/// Register a new match
#[post("/matches")]
async fn create_match(
    match_request: web::Json<MatchRegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_handler::register_new_match(match_request, pool).await
}

/// Live matches: external feed plus local rows
#[get("/live-matches")]
async fn get_live_matches(
    pool: web::Data<PgPool>,
    cricket_client: web::Data<CricketApiClient>,
) -> Result<HttpResponse> {
    live_match_handler::get_live_matches(pool, cricket_client).await
}

/// Upcoming fixtures: external feed plus local rows
#[get("/upcoming-matches")]
async fn get_upcoming_matches(
    pool: web::Data<PgPool>,
    cricket_client: web::Data<CricketApiClient>,
) -> Result<HttpResponse> {
    live_match_handler::get_upcoming_matches(pool, cricket_client).await
}

/// Recently completed matches: external feed plus local rows
#[get("/recent-matches")]
async fn get_recent_matches(
    pool: web::Data<PgPool>,
    cricket_client: web::Data<CricketApiClient>,
) -> Result<HttpResponse> {
    live_match_handler::get_recent_matches(pool, cricket_client).await
}
