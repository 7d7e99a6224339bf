use actix_web::{get, post, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::team_handler;
use crate::models::team::TeamRegistrationRequest;

/// List all teams
#[get("/teams")]
async fn get_teams(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    team_handler::get_all_teams(pool).await
}

/// Register a new team
#[post("/teams")]
async fn create_team(
    team_request: web::Json<TeamRegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    team_handler::register_new_team(team_request, pool).await
}
