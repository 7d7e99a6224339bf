use actix_web::web;

pub mod analytics;
pub mod backend_health;
pub mod matches;
pub mod players;
pub mod stats;
pub mod teams;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::scope("/api")
            .service(teams::get_teams)
            .service(teams::create_team)
            .service(players::get_players)
            .service(players::create_player)
            .service(stats::get_player_stats)
            .service(stats::upload_player_stat)
            .service(matches::get_matches)
            .service(matches::create_match)
            .service(matches::get_live_matches)
            .service(matches::get_upcoming_matches)
            .service(matches::get_recent_matches)
            .service(analytics::get_top_scorers)
            .service(analytics::get_top_bowlers)
            .service(analytics::get_team_performance)
            .service(analytics::get_match_statistics)
            .service(analytics::get_venue_statistics),
    );
}
