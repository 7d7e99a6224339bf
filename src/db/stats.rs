use sqlx::PgPool;
use uuid::Uuid;

use crate::models::player::{PlayerStat, PlayerStatUploadRequest};

/// Record one player's performance in one match. A second upload for the
/// same (player, match) pair overwrites the earlier row.
pub async fn upsert_player_stat(
    pool: &PgPool,
    request: &PlayerStatUploadRequest,
) -> Result<PlayerStat, sqlx::Error> {
    let stat = sqlx::query_as::<_, PlayerStat>(
        r#"
        INSERT INTO player_stats (
            player_id, match_id, runs_scored, balls_faced, fours, sixes,
            wickets_taken, overs_bowled, runs_conceded, catches, stumpings
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        ON CONFLICT (player_id, match_id)
        DO UPDATE SET
            runs_scored = EXCLUDED.runs_scored,
            balls_faced = EXCLUDED.balls_faced,
            fours = EXCLUDED.fours,
            sixes = EXCLUDED.sixes,
            wickets_taken = EXCLUDED.wickets_taken,
            overs_bowled = EXCLUDED.overs_bowled,
            runs_conceded = EXCLUDED.runs_conceded,
            catches = EXCLUDED.catches,
            stumpings = EXCLUDED.stumpings
        RETURNING id, player_id, match_id, runs_scored, balls_faced, fours, sixes,
                  wickets_taken, overs_bowled, runs_conceded, catches, stumpings,
                  created_at
        "#,
    )
    .bind(request.player_id)
    .bind(request.match_id)
    .bind(request.runs_scored)
    .bind(request.balls_faced)
    .bind(request.fours)
    .bind(request.sixes)
    .bind(request.wickets_taken)
    .bind(request.overs_bowled)
    .bind(request.runs_conceded)
    .bind(request.catches)
    .bind(request.stumpings)
    .fetch_one(pool)
    .await?;

    Ok(stat)
}

pub async fn get_stats_for_player(
    pool: &PgPool,
    player_id: Uuid,
) -> Result<Vec<PlayerStat>, sqlx::Error> {
    let stats = sqlx::query_as::<_, PlayerStat>(
        r#"
        SELECT id, player_id, match_id, runs_scored, balls_faced, fours, sixes,
               wickets_taken, overs_bowled, runs_conceded, catches, stumpings,
               created_at
        FROM player_stats
        WHERE player_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(player_id)
    .fetch_all(pool)
    .await?;

    Ok(stats)
}
