use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::exercise::ExerciseSnapshot;
use crate::models::workout::{Workout, WorkoutRow};

const SELECT_WORKOUT: &str = r#"
    SELECT id, name, exercises, trainer_id, student_id, group_id, created_at, updated_at
    FROM workouts
"#;

#[tracing::instrument(name = "List workouts for trainer", skip(pool), fields(trainer_id = %trainer_id))]
pub async fn list_by_trainer(pool: &PgPool, trainer_id: Uuid) -> Result<Vec<Workout>, sqlx::Error> {
    let sql = format!("{SELECT_WORKOUT} WHERE trainer_id = $1 ORDER BY created_at");
    let rows = sqlx::query_as::<_, WorkoutRow>(&sql)
        .bind(trainer_id)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(Workout::from).collect())
}

#[tracing::instrument(name = "Fetch workout", skip(pool), fields(workout_id = %workout_id))]
pub async fn get(pool: &PgPool, workout_id: Uuid) -> Result<Option<Workout>, sqlx::Error> {
    let sql = format!("{SELECT_WORKOUT} WHERE id = $1");
    let row = sqlx::query_as::<_, WorkoutRow>(&sql)
        .bind(workout_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Workout::from))
}

#[tracing::instrument(
    name = "Insert workout",
    skip(pool, exercises),
    fields(trainer_id = %trainer_id, name = %name)
)]
pub async fn insert(
    pool: &PgPool,
    name: &str,
    exercises: &[ExerciseSnapshot],
    trainer_id: Uuid,
    student_id: Option<Uuid>,
    group_id: Option<Uuid>,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO workouts (id, name, exercises, trainer_id, student_id, group_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(Json(exercises))
    .bind(trainer_id)
    .bind(student_id)
    .bind(group_id)
    .execute(pool)
    .await?;
    Ok(id)
}

/// Re-snapshot the workout on edit: name and the full exercise list are
/// replaced in one write.
#[tracing::instrument(name = "Update workout", skip(pool, exercises), fields(workout_id = %workout_id))]
pub async fn update(
    pool: &PgPool,
    workout_id: Uuid,
    trainer_id: Uuid,
    name: &str,
    exercises: &[ExerciseSnapshot],
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE workouts
        SET name = $3, exercises = $4, updated_at = now()
        WHERE id = $1 AND trainer_id = $2
        "#,
    )
    .bind(workout_id)
    .bind(trainer_id)
    .bind(name)
    .bind(Json(exercises))
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

#[tracing::instrument(name = "Delete workout", skip(pool), fields(workout_id = %workout_id))]
pub async fn delete(pool: &PgPool, workout_id: Uuid, trainer_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM workouts WHERE id = $1 AND trainer_id = $2")
        .bind(workout_id)
        .bind(trainer_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
