pub mod cricket_api;
pub mod settings;
