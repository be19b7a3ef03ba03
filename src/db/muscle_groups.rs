use sqlx::PgPool;
use uuid::Uuid;

use crate::models::muscle_group::MuscleGroup;

#[tracing::instrument(name = "List muscle groups", skip(pool))]
pub async fn list(pool: &PgPool) -> Result<Vec<MuscleGroup>, sqlx::Error> {
    sqlx::query_as::<_, MuscleGroup>(
        "SELECT id, name, image_background FROM muscle_groups ORDER BY created_at, name",
    )
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Fetch muscle group", skip(pool), fields(group_id = %group_id))]
pub async fn get(pool: &PgPool, group_id: Uuid) -> Result<Option<MuscleGroup>, sqlx::Error> {
    sqlx::query_as::<_, MuscleGroup>(
        "SELECT id, name, image_background FROM muscle_groups WHERE id = $1",
    )
    .bind(group_id)
    .fetch_optional(pool)
    .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM muscle_groups")
        .fetch_one(pool)
        .await
}

#[tracing::instrument(name = "Insert muscle group", skip(pool), fields(name = %group.name))]
pub async fn insert(pool: &PgPool, group: &MuscleGroup) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO muscle_groups (id, name, image_background) VALUES ($1, $2, $3)")
        .bind(group.id)
        .bind(&group.name)
        .bind(&group.image_background)
        .execute(pool)
        .await?;
    Ok(())
}

#[tracing::instrument(name = "Update muscle group", skip(pool), fields(group_id = %group_id))]
pub async fn update(
    pool: &PgPool,
    group_id: Uuid,
    name: &str,
    image_background: &str,
) -> Result<bool, sqlx::Error> {
    let result =
        sqlx::query("UPDATE muscle_groups SET name = $2, image_background = $3 WHERE id = $1")
            .bind(group_id)
            .bind(name)
            .bind(image_background)
            .execute(pool)
            .await?;
    Ok(result.rows_affected() > 0)
}

#[tracing::instrument(name = "Delete muscle group", skip(pool), fields(group_id = %group_id))]
pub async fn delete(pool: &PgPool, group_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM muscle_groups WHERE id = $1")
        .bind(group_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
