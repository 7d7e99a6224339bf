// src/models/analytics.rs
//! Typed result records for the analytics queries.
//!
//! Each struct mirrors the column list of exactly one aggregation query,
//! so every field of a result row is accessed by name with a static type.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the top-scorers ranking.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TopScorer {
    pub name: String,
    pub nationality: Option<String>,
    /// None for teamless players
    pub team_name: Option<String>,
    pub total_runs: i64,
    pub matches_played: i64,
    pub average_runs: f64,
    pub highest_score: i32,
    pub total_fours: i64,
    pub total_sixes: i64,
}

/// One row of the top-bowlers ranking. Only players with at least one
/// wicket appear here.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TopBowler {
    pub name: String,
    pub nationality: Option<String>,
    pub team_name: Option<String>,
    pub total_wickets: i64,
    pub matches_played: i64,
    pub total_overs: f64,
    pub total_runs_conceded: i64,
    /// Mean of the per-match economy rates, not conceded/overs over totals.
    pub average_economy: f64,
}

/// Win/loss record for one team.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TeamPerformance {
    pub team_name: String,
    pub country: Option<String>,
    pub total_matches: i64,
    pub wins: i64,
    pub losses: i64,
    /// None when the team has no completed matches yet.
    pub win_percentage: Option<f64>,
}

/// Aggregate snapshot across all matches, optionally filtered by match type.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchStatistics {
    pub total_matches: i64,
    pub completed_matches: i64,
    pub live_matches: i64,
    pub upcoming_matches: i64,
    /// None when no innings totals have been recorded.
    pub average_runs_per_innings: Option<f64>,
    pub highest_team_score: Option<i32>,
}

/// Per-venue aggregate. Matches without a venue are not represented.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct VenueStatistics {
    pub venue: String,
    pub matches_played: i64,
    pub average_runs: Option<f64>,
    pub completed_matches: i64,
}
