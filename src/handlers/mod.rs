pub mod analytics_handler;
pub mod backend_health_handler;
pub mod live_match_handler;
pub mod match_handler;
pub mod player_handler;
pub mod stat_handler;
pub mod team_handler;
