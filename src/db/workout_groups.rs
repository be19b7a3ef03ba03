use sqlx::PgPool;
use uuid::Uuid;

use crate::models::workout_group::WorkoutGroup;

const SELECT_GROUP: &str = r#"
    SELECT id, name, trainer_id, workout_ids, validity_days, created_at, updated_at
    FROM workout_groups
"#;

#[tracing::instrument(name = "List workout groups", skip(pool), fields(trainer_id = %trainer_id))]
pub async fn list_by_trainer(
    pool: &PgPool,
    trainer_id: Uuid,
) -> Result<Vec<WorkoutGroup>, sqlx::Error> {
    let sql = format!("{SELECT_GROUP} WHERE trainer_id = $1 ORDER BY created_at");
    sqlx::query_as::<_, WorkoutGroup>(&sql)
        .bind(trainer_id)
        .fetch_all(pool)
        .await
}

#[tracing::instrument(name = "Fetch workout group", skip(pool), fields(group_id = %group_id))]
pub async fn get(pool: &PgPool, group_id: Uuid) -> Result<Option<WorkoutGroup>, sqlx::Error> {
    let sql = format!("{SELECT_GROUP} WHERE id = $1");
    sqlx::query_as::<_, WorkoutGroup>(&sql)
        .bind(group_id)
        .fetch_optional(pool)
        .await
}

#[tracing::instrument(
    name = "Insert workout group",
    skip(pool, workout_ids),
    fields(trainer_id = %trainer_id, name = %name)
)]
pub async fn insert(
    pool: &PgPool,
    name: &str,
    trainer_id: Uuid,
    workout_ids: &[Uuid],
    validity_days: i32,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO workout_groups (id, name, trainer_id, workout_ids, validity_days)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(trainer_id)
    .bind(workout_ids)
    .bind(validity_days)
    .execute(pool)
    .await?;
    Ok(id)
}

#[tracing::instrument(name = "Update workout group", skip(pool, workout_ids), fields(group_id = %group_id))]
pub async fn update(
    pool: &PgPool,
    group_id: Uuid,
    trainer_id: Uuid,
    name: &str,
    workout_ids: &[Uuid],
    validity_days: i32,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE workout_groups
        SET name = $3, workout_ids = $4, validity_days = $5, updated_at = now()
        WHERE id = $1 AND trainer_id = $2
        "#,
    )
    .bind(group_id)
    .bind(trainer_id)
    .bind(name)
    .bind(workout_ids)
    .bind(validity_days)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

#[tracing::instrument(name = "Delete workout group", skip(pool), fields(group_id = %group_id))]
pub async fn delete(pool: &PgPool, group_id: Uuid, trainer_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM workout_groups WHERE id = $1 AND trainer_id = $2")
        .bind(group_id)
        .bind(trainer_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
