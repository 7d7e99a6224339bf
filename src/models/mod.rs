pub mod analytics;
pub mod cricket_match;
pub mod player;
pub mod team;
