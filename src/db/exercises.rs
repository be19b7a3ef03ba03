use sqlx::PgPool;
use uuid::Uuid;

use crate::models::exercise::{Exercise, ExerciseRow};

#[tracing::instrument(name = "List exercise catalog", skip(pool))]
pub async fn list(pool: &PgPool) -> Result<Vec<Exercise>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ExerciseRow>(
        r#"
        SELECT id, name, muscle_groups, difficulty, recommended_age_range,
               sets, reps, weight, rest, photo, demo_images, video
        FROM exercises
        ORDER BY created_at, name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Exercise::from).collect())
}

#[tracing::instrument(name = "Fetch exercise", skip(pool), fields(exercise_id = %exercise_id))]
pub async fn get(pool: &PgPool, exercise_id: Uuid) -> Result<Option<Exercise>, sqlx::Error> {
    let row = sqlx::query_as::<_, ExerciseRow>(
        r#"
        SELECT id, name, muscle_groups, difficulty, recommended_age_range,
               sets, reps, weight, rest, photo, demo_images, video
        FROM exercises
        WHERE id = $1
        "#,
    )
    .bind(exercise_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Exercise::from))
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM exercises")
        .fetch_one(pool)
        .await
}

#[tracing::instrument(name = "Insert exercise", skip(pool, exercise), fields(name = %exercise.name))]
pub async fn insert(pool: &PgPool, exercise: &Exercise) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO exercises (
            id, name, muscle_groups, difficulty, recommended_age_range,
            sets, reps, weight, rest, photo, demo_images, video
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        "#,
    )
    .bind(exercise.id)
    .bind(&exercise.name)
    .bind(&exercise.muscle_groups)
    .bind(exercise.difficulty.to_string())
    .bind(&exercise.recommended_age_range)
    .bind(exercise.sets)
    .bind(exercise.reps)
    .bind(exercise.weight)
    .bind(exercise.rest)
    .bind(&exercise.photo)
    .bind(&exercise.demo_images)
    .bind(&exercise.video)
    .execute(pool)
    .await?;
    Ok(())
}

/// Append a muscle group name to one exercise's membership list.
#[tracing::instrument(name = "Add exercise to muscle group", skip(pool))]
pub async fn append_muscle_group(
    pool: &PgPool,
    exercise_id: Uuid,
    group_name: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE exercises SET muscle_groups = array_append(muscle_groups, $2) WHERE id = $1",
    )
    .bind(exercise_id)
    .bind(group_name)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Scrub a deleted muscle group's name from every exercise, leaving the
/// remaining memberships intact.
#[tracing::instrument(name = "Remove muscle group from all exercises", skip(pool))]
pub async fn remove_muscle_group_everywhere(
    pool: &PgPool,
    group_name: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE exercises SET muscle_groups = array_remove(muscle_groups, $1)")
        .bind(group_name)
        .execute(pool)
        .await?;
    Ok(())
}
