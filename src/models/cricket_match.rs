// src/models/cricket_match.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt::Display;
use uuid::Uuid;

/// Lifecycle of a match. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Live,
    Completed,
}

impl Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Upcoming => write!(f, "upcoming"),
            MatchStatus::Live => write!(f, "live"),
            MatchStatus::Completed => write!(f, "completed"),
        }
    }
}

impl Default for MatchStatus {
    fn default() -> Self {
        MatchStatus::Upcoming
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub external_match_id: Option<String>,
    pub team1_id: Uuid,
    pub team2_id: Uuid,
    pub venue: Option<String>,
    pub match_date: Option<DateTime<Utc>>,
    pub match_type: Option<String>,
    pub status: MatchStatus,
    pub winner_team_id: Option<Uuid>,
    pub series: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Match joined with participant and winner names, for listings
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchInfo {
    pub id: Uuid,
    pub external_match_id: Option<String>,
    pub team1_name: String,
    pub team2_name: String,
    pub venue: Option<String>,
    pub match_date: Option<DateTime<Utc>>,
    pub match_type: Option<String>,
    pub status: MatchStatus,
    pub winner_name: Option<String>,
    pub series: Option<String>,
}

/// Request to register a new match
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchRegistrationRequest {
    pub external_match_id: Option<String>,
    pub team1_id: Uuid,
    pub team2_id: Uuid,
    pub venue: Option<String>,
    pub match_date: Option<DateTime<Utc>>,
    pub match_type: Option<String>,
    #[serde(default)]
    pub status: MatchStatus,
    pub winner_team_id: Option<Uuid>,
    pub series: Option<String>,
}

impl MatchRegistrationRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.team1_id == self.team2_id {
            return Err("A match needs two distinct teams".to_string());
        }
        if let Some(winner) = self.winner_team_id {
            if winner != self.team1_id && winner != self.team2_id {
                return Err("Winner must be one of the participating teams".to_string());
            }
            if self.status != MatchStatus::Completed {
                return Err("Only completed matches can have a winner".to_string());
            }
        }
        Ok(())
    }
}
