use sqlx::PgPool;

use crate::models::cricket_match::{Match, MatchInfo, MatchRegistrationRequest, MatchStatus};

/// All matches, most recent first. Matches without a date sort last.
pub async fn get_all_matches(pool: &PgPool) -> Result<Vec<MatchInfo>, sqlx::Error> {
    let matches = sqlx::query_as::<_, MatchInfo>(
        r#"
        SELECT
            m.id, m.external_match_id,
            t1.name AS team1_name,
            t2.name AS team2_name,
            m.venue, m.match_date, m.match_type, m.status,
            w.name AS winner_name,
            m.series
        FROM matches m
        JOIN teams t1 ON m.team1_id = t1.id
        JOIN teams t2 ON m.team2_id = t2.id
        LEFT JOIN teams w ON m.winner_team_id = w.id
        ORDER BY m.match_date DESC NULLS LAST, m.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(matches)
}

pub async fn get_matches_by_status(
    pool: &PgPool,
    status: MatchStatus,
) -> Result<Vec<MatchInfo>, sqlx::Error> {
    let matches = sqlx::query_as::<_, MatchInfo>(
        r#"
        SELECT
            m.id, m.external_match_id,
            t1.name AS team1_name,
            t2.name AS team2_name,
            m.venue, m.match_date, m.match_type, m.status,
            w.name AS winner_name,
            m.series
        FROM matches m
        JOIN teams t1 ON m.team1_id = t1.id
        JOIN teams t2 ON m.team2_id = t2.id
        LEFT JOIN teams w ON m.winner_team_id = w.id
        WHERE m.status = $1
        ORDER BY m.match_date DESC NULLS LAST, m.created_at DESC
        "#,
    )
    .bind(status)
    .fetch_all(pool)
    .await?;

    Ok(matches)
}

pub async fn insert_match(
    pool: &PgPool,
    request: &MatchRegistrationRequest,
) -> Result<Match, sqlx::Error> {
    let match_row = sqlx::query_as::<_, Match>(
        r#"
        INSERT INTO matches (
            external_match_id, team1_id, team2_id, venue, match_date,
            match_type, status, winner_team_id, series
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, external_match_id, team1_id, team2_id, venue, match_date,
                  match_type, status, winner_team_id, series, created_at, updated_at
        "#,
    )
    .bind(request.external_match_id.as_deref())
    .bind(request.team1_id)
    .bind(request.team2_id)
    .bind(request.venue.as_deref())
    .bind(request.match_date)
    .bind(request.match_type.as_deref())
    .bind(request.status)
    .bind(request.winner_team_id)
    .bind(request.series.as_deref())
    .fetch_one(pool)
    .await?;

    Ok(match_row)
}

pub async fn match_exists(pool: &PgPool, match_id: uuid::Uuid) -> Result<bool, sqlx::Error> {
    let row: Option<(uuid::Uuid,)> =
        sqlx::query_as::<_, (uuid::Uuid,)>("SELECT id FROM matches WHERE id = $1")
            .bind(match_id)
            .fetch_optional(pool)
            .await?;

    Ok(row.is_some())
}
