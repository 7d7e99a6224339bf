use sqlx::PgPool;

use crate::models::team::Team;

pub async fn get_all_teams(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
    let teams = sqlx::query_as::<_, Team>(
        r#"
        SELECT id, name, country, founded_year, captain, coach, created_at, updated_at
        FROM teams
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(teams)
}

pub async fn find_team_by_name(pool: &PgPool, name: &str) -> Result<Option<Team>, sqlx::Error> {
    let team = sqlx::query_as::<_, Team>(
        r#"
        SELECT id, name, country, founded_year, captain, coach, created_at, updated_at
        FROM teams
        WHERE name = $1
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(team)
}

pub async fn insert_team(
    pool: &PgPool,
    name: &str,
    country: Option<&str>,
    founded_year: Option<i32>,
    captain: Option<&str>,
    coach: Option<&str>,
) -> Result<Team, sqlx::Error> {
    let team = sqlx::query_as::<_, Team>(
        r#"
        INSERT INTO teams (name, country, founded_year, captain, coach)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, country, founded_year, captain, coach, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(country)
    .bind(founded_year)
    .bind(captain)
    .bind(coach)
    .fetch_one(pool)
    .await?;

    Ok(team)
}

pub async fn team_exists(pool: &PgPool, team_id: uuid::Uuid) -> Result<bool, sqlx::Error> {
    let row: Option<(uuid::Uuid,)> =
        sqlx::query_as::<_, (uuid::Uuid,)>("SELECT id FROM teams WHERE id = $1")
            .bind(team_id)
            .fetch_optional(pool)
            .await?;

    Ok(row.is_some())
}
