use sqlx::PgPool;
use uuid::Uuid;

use crate::models::player::{Player, PlayerInfo, PlayerRegistrationRequest};

pub async fn get_all_players(pool: &PgPool) -> Result<Vec<PlayerInfo>, sqlx::Error> {
    let players = sqlx::query_as::<_, PlayerInfo>(
        r#"
        SELECT
            p.id, p.name, t.name AS team_name,
            p.role, p.batting_style, p.bowling_style, p.nationality
        FROM players p
        LEFT JOIN teams t ON p.team_id = t.id
        ORDER BY p.name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(players)
}

pub async fn player_exists(pool: &PgPool, player_id: Uuid) -> Result<bool, sqlx::Error> {
    let row: Option<(Uuid,)> = sqlx::query_as::<_, (Uuid,)>("SELECT id FROM players WHERE id = $1")
        .bind(player_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

pub async fn insert_player(
    pool: &PgPool,
    request: &PlayerRegistrationRequest,
) -> Result<Player, sqlx::Error> {
    let player = sqlx::query_as::<_, Player>(
        r#"
        INSERT INTO players (name, team_id, role, batting_style, bowling_style, nationality)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, team_id, role, batting_style, bowling_style, nationality,
                  created_at, updated_at
        "#,
    )
    .bind(request.name.trim())
    .bind(request.team_id)
    .bind(request.role.as_deref())
    .bind(request.batting_style.as_deref())
    .bind(request.bowling_style.as_deref())
    .bind(request.nationality.as_deref())
    .fetch_one(pool)
    .await?;

    Ok(player)
}
