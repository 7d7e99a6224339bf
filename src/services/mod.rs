pub mod cricket_client;
