// src/models/player.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub team_id: Option<Uuid>,
    pub role: Option<String>,
    pub batting_style: Option<String>,
    pub bowling_style: Option<String>,
    pub nationality: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Player joined with the name of their team, for listings
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerInfo {
    pub id: Uuid,
    pub name: String,
    pub team_name: Option<String>,
    pub role: Option<String>,
    pub batting_style: Option<String>,
    pub bowling_style: Option<String>,
    pub nationality: Option<String>,
}

/// Request to register a new player
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerRegistrationRequest {
    pub name: String,
    pub team_id: Option<Uuid>,
    pub role: Option<String>,
    pub batting_style: Option<String>,
    pub bowling_style: Option<String>,
    pub nationality: Option<String>,
}

impl PlayerRegistrationRequest {
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Player name cannot be empty".to_string());
        }
        if name.len() > 100 {
            return Err("Player name cannot exceed 100 characters".to_string());
        }
        Ok(())
    }
}

/// One player's performance in one match.
///
/// Strike rate and economy rate are derived from the raw counts on the way
/// out. They are never persisted, so they cannot drift from the formula.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerStat {
    pub id: Uuid,
    pub player_id: Uuid,
    pub match_id: Uuid,
    pub runs_scored: i32,
    pub balls_faced: i32,
    pub fours: i32,
    pub sixes: i32,
    pub wickets_taken: i32,
    pub overs_bowled: f64,
    pub runs_conceded: i32,
    pub catches: i32,
    pub stumpings: i32,
    pub created_at: DateTime<Utc>,
}

impl PlayerStat {
    /// Runs scored per hundred balls faced. Zero when no balls were faced.
    pub fn strike_rate(&self) -> f64 {
        if self.balls_faced > 0 {
            self.runs_scored as f64 * 100.0 / self.balls_faced as f64
        } else {
            0.0
        }
    }

    /// Runs conceded per over bowled. Zero when no overs were bowled.
    pub fn economy_rate(&self) -> f64 {
        if self.overs_bowled > 0.0 {
            self.runs_conceded as f64 / self.overs_bowled
        } else {
            0.0
        }
    }
}

/// A performance row as served to clients, with the derived rates attached.
#[derive(Debug, Serialize, Clone)]
pub struct PlayerStatView {
    #[serde(flatten)]
    pub stat: PlayerStat,
    pub strike_rate: f64,
    pub economy_rate: f64,
}

impl From<PlayerStat> for PlayerStatView {
    fn from(stat: PlayerStat) -> Self {
        let strike_rate = stat.strike_rate();
        let economy_rate = stat.economy_rate();
        Self {
            stat,
            strike_rate,
            economy_rate,
        }
    }
}

/// Request to record a player's performance in a match
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerStatUploadRequest {
    pub player_id: Uuid,
    pub match_id: Uuid,
    #[serde(default)]
    pub runs_scored: i32,
    #[serde(default)]
    pub balls_faced: i32,
    #[serde(default)]
    pub fours: i32,
    #[serde(default)]
    pub sixes: i32,
    #[serde(default)]
    pub wickets_taken: i32,
    #[serde(default)]
    pub overs_bowled: f64,
    #[serde(default)]
    pub runs_conceded: i32,
    #[serde(default)]
    pub catches: i32,
    #[serde(default)]
    pub stumpings: i32,
}

impl PlayerStatUploadRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.runs_scored < 0
            || self.balls_faced < 0
            || self.fours < 0
            || self.sixes < 0
            || self.wickets_taken < 0
            || self.runs_conceded < 0
            || self.catches < 0
            || self.stumpings < 0
        {
            return Err("Performance counts cannot be negative".to_string());
        }
        if self.overs_bowled < 0.0 {
            return Err("Overs bowled cannot be negative".to_string());
        }
        if self.wickets_taken > 10 {
            return Err("A bowler cannot take more than 10 wickets in an innings".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn stat(runs: i32, balls: i32, conceded: i32, overs: f64) -> PlayerStat {
        PlayerStat {
            id: Uuid::new_v4(),
            player_id: Uuid::new_v4(),
            match_id: Uuid::new_v4(),
            runs_scored: runs,
            balls_faced: balls,
            fours: 0,
            sixes: 0,
            wickets_taken: 0,
            overs_bowled: overs,
            runs_conceded: conceded,
            catches: 0,
            stumpings: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn strike_rate_is_runs_per_hundred_balls() {
        let s = stat(85, 50, 0, 0.0);
        assert!((s.strike_rate() - 170.0).abs() < f64::EPSILON);
    }

    #[test]
    fn strike_rate_guards_against_zero_balls() {
        let s = stat(10, 0, 0, 0.0);
        assert_eq!(s.strike_rate(), 0.0);
    }

    #[test]
    fn economy_rate_is_conceded_per_over() {
        let s = stat(0, 0, 45, 10.0);
        assert!((s.economy_rate() - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn economy_rate_guards_against_zero_overs() {
        let s = stat(0, 0, 12, 0.0);
        assert_eq!(s.economy_rate(), 0.0);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let req = PlayerStatUploadRequest {
            player_id: Uuid::new_v4(),
            match_id: Uuid::new_v4(),
            runs_scored: -1,
            balls_faced: 0,
            fours: 0,
            sixes: 0,
            wickets_taken: 0,
            overs_bowled: 0.0,
            runs_conceded: 0,
            catches: 0,
            stumpings: 0,
        };
        assert!(req.validate().is_err());
    }
}
