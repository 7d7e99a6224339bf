//! The performance-analytics query layer.
//!
//! All operations are read-only aggregations over the relational store.
//! They hold no state beyond the connection pool, never retry, and return
//! either a complete result set or an error. Absence of matching rows is
//! an empty result, not a failure.

use sqlx::PgPool;
use thiserror::Error;

use crate::models::analytics::{
    MatchStatistics, TeamPerformance, TopBowler, TopScorer, VenueStatistics,
};

/// Limit applied to ranked queries when the caller does not pass one.
pub const DEFAULT_RANKING_LIMIT: i64 = 10;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Malformed or out-of-range caller input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The underlying store failed to execute the query.
    #[error("data access failed: {0}")]
    DataAccess(#[from] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct StatsAggregator {
    pool: PgPool,
}

impl StatsAggregator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Rank players by total runs scored across all their matches.
    ///
    /// Ties on total runs break by player name ascending so repeated calls
    /// return the same order.
    pub async fn top_scorers(&self, limit: i64) -> Result<Vec<TopScorer>, AnalyticsError> {
        let limit = validate_limit(limit)?;

        let scorers = sqlx::query_as::<_, TopScorer>(
            r#"
            SELECT
                p.name,
                p.nationality,
                t.name AS team_name,
                SUM(ps.runs_scored) AS total_runs,
                COUNT(DISTINCT ps.match_id) AS matches_played,
                AVG(ps.runs_scored)::DOUBLE PRECISION AS average_runs,
                MAX(ps.runs_scored) AS highest_score,
                SUM(ps.fours) AS total_fours,
                SUM(ps.sixes) AS total_sixes
            FROM players p
            JOIN player_stats ps ON ps.player_id = p.id
            LEFT JOIN teams t ON p.team_id = t.id
            GROUP BY p.id, p.name, p.nationality, t.name
            ORDER BY total_runs DESC, p.name ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(scorers)
    }

    /// Rank wicket-taking players by total wickets, then by average economy.
    ///
    /// Average economy is the mean of the per-match economy rates rather
    /// than total conceded over total overs. The two differ whenever a
    /// bowler's workload varies between matches; the per-match mean is the
    /// established reporting convention here.
    pub async fn top_bowlers(&self, limit: i64) -> Result<Vec<TopBowler>, AnalyticsError> {
        let limit = validate_limit(limit)?;

        let bowlers = sqlx::query_as::<_, TopBowler>(
            r#"
            SELECT
                p.name,
                p.nationality,
                t.name AS team_name,
                SUM(ps.wickets_taken) AS total_wickets,
                COUNT(DISTINCT ps.match_id) AS matches_played,
                SUM(ps.overs_bowled)::DOUBLE PRECISION AS total_overs,
                SUM(ps.runs_conceded) AS total_runs_conceded,
                AVG(
                    CASE WHEN ps.overs_bowled > 0
                        THEN ps.runs_conceded / ps.overs_bowled
                        ELSE 0
                    END
                )::DOUBLE PRECISION AS average_economy
            FROM players p
            JOIN player_stats ps ON ps.player_id = p.id
            LEFT JOIN teams t ON p.team_id = t.id
            WHERE ps.wickets_taken > 0
            GROUP BY p.id, p.name, p.nationality, t.name
            ORDER BY total_wickets DESC, average_economy ASC, p.name ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(bowlers)
    }

    /// Win/loss record for every team.
    ///
    /// The win-percentage denominator is the count of *completed* matches
    /// involving the team; a team with only live or upcoming matches gets
    /// a NULL percentage instead of a division by zero.
    pub async fn team_performance(&self) -> Result<Vec<TeamPerformance>, AnalyticsError> {
        let performance = sqlx::query_as::<_, TeamPerformance>(
            r#"
            SELECT
                t.name AS team_name,
                t.country,
                COUNT(DISTINCT m.id) AS total_matches,
                COUNT(DISTINCT CASE WHEN m.winner_team_id = t.id THEN m.id END) AS wins,
                COUNT(DISTINCT CASE
                    WHEN m.winner_team_id IS NOT NULL AND m.winner_team_id != t.id THEN m.id
                END) AS losses,
                ROUND(
                    COUNT(DISTINCT CASE WHEN m.winner_team_id = t.id THEN m.id END) * 100.0
                    / NULLIF(COUNT(DISTINCT CASE WHEN m.status = 'completed' THEN m.id END), 0),
                    2
                )::DOUBLE PRECISION AS win_percentage
            FROM teams t
            LEFT JOIN matches m ON m.team1_id = t.id OR m.team2_id = t.id
            GROUP BY t.id, t.name, t.country
            ORDER BY win_percentage DESC NULLS LAST, total_matches DESC, t.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(performance)
    }

    /// One aggregate record across all matches, optionally restricted to a
    /// single match type (e.g. "ODI", "T20").
    ///
    /// Innings averages come from match_scores; matches without recorded
    /// innings contribute nothing to the average or maximum.
    pub async fn match_statistics(
        &self,
        match_type: Option<&str>,
    ) -> Result<MatchStatistics, AnalyticsError> {
        let statistics = sqlx::query_as::<_, MatchStatistics>(
            r#"
            SELECT
                COUNT(DISTINCT m.id) AS total_matches,
                COUNT(DISTINCT m.id) FILTER (WHERE m.status = 'completed') AS completed_matches,
                COUNT(DISTINCT m.id) FILTER (WHERE m.status = 'live') AS live_matches,
                COUNT(DISTINCT m.id) FILTER (WHERE m.status = 'upcoming') AS upcoming_matches,
                AVG(ms.total_runs)::DOUBLE PRECISION AS average_runs_per_innings,
                MAX(ms.total_runs) AS highest_team_score
            FROM matches m
            LEFT JOIN match_scores ms ON ms.match_id = m.id
            WHERE $1::TEXT IS NULL OR m.match_type = $1
            "#,
        )
        .bind(match_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(statistics)
    }

    /// Per-venue aggregates, busiest venues first. Matches with no recorded
    /// venue are skipped entirely.
    pub async fn venue_statistics(&self) -> Result<Vec<VenueStatistics>, AnalyticsError> {
        let statistics = sqlx::query_as::<_, VenueStatistics>(
            r#"
            SELECT
                m.venue,
                COUNT(DISTINCT m.id) AS matches_played,
                AVG(ms.total_runs)::DOUBLE PRECISION AS average_runs,
                COUNT(DISTINCT m.id) FILTER (WHERE m.status = 'completed') AS completed_matches
            FROM matches m
            LEFT JOIN match_scores ms ON ms.match_id = m.id
            WHERE m.venue IS NOT NULL
            GROUP BY m.venue
            ORDER BY matches_played DESC, m.venue ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(statistics)
    }
}

fn validate_limit(limit: i64) -> Result<i64, AnalyticsError> {
    if limit <= 0 {
        return Err(AnalyticsError::InvalidArgument(format!(
            "limit must be positive, got {}",
            limit
        )));
    }
    Ok(limit)
}
