use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{
    FitnessLevel, ProgressEntry, Role, StudentSummary, UserProfile, UserProfileRow,
};

#[tracing::instrument(name = "Fetch user profile", skip(pool), fields(user_id = %user_id))]
pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<UserProfile>, sqlx::Error> {
    let row = sqlx::query_as::<_, UserProfileRow>(
        r#"
        SELECT id, username, role, age, fitness_level, trainer_id, workout_ids, progress
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(UserProfile::from))
}

#[tracing::instrument(name = "Update profile fields", skip(pool), fields(user_id = %user_id))]
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    age: Option<i32>,
    fitness_level: Option<FitnessLevel>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET age = COALESCE($2, age),
            fitness_level = COALESCE($3, fitness_level),
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(age)
    .bind(fitness_level.map(|l| l.to_string()))
    .execute(pool)
    .await?;
    Ok(())
}

#[tracing::instrument(name = "Set user role", skip(pool), fields(user_id = %user_id, role = %role))]
pub async fn set_role(pool: &PgPool, user_id: Uuid, role: Role) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET role = $2, updated_at = now() WHERE id = $1")
        .bind(user_id)
        .bind(role.to_string())
        .execute(pool)
        .await?;
    Ok(())
}

#[tracing::instrument(name = "Assign trainer to student", skip(pool))]
pub async fn set_trainer(
    pool: &PgPool,
    student_id: Uuid,
    trainer_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE users SET trainer_id = $2, updated_at = now() WHERE id = $1 AND role = 'student'",
    )
    .bind(student_id)
    .bind(trainer_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Replace a student's assigned workout set. Callers are responsible for
/// deduplicating before writing; the column is treated as a set.
#[tracing::instrument(name = "Set student workout ids", skip(pool, workout_ids))]
pub async fn set_workout_ids(
    pool: &PgPool,
    student_id: Uuid,
    workout_ids: &[Uuid],
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET workout_ids = $2, updated_at = now() WHERE id = $1")
        .bind(student_id)
        .bind(workout_ids)
        .execute(pool)
        .await?;
    Ok(())
}

#[tracing::instrument(name = "Append progress entry", skip(pool, entry), fields(user_id = %user_id))]
pub async fn append_progress(
    pool: &PgPool,
    user_id: Uuid,
    entry: &ProgressEntry,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE users SET progress = progress || $2::jsonb, updated_at = now() WHERE id = $1",
    )
    .bind(user_id)
    .bind(Json(entry))
    .execute(pool)
    .await?;
    Ok(())
}

/// Students visible to a trainer: their own students plus unclaimed ones.
#[tracing::instrument(name = "List students", skip(pool), fields(trainer_id = %trainer_id))]
pub async fn list_students(
    pool: &PgPool,
    trainer_id: Uuid,
    search: Option<&str>,
) -> Result<Vec<StudentSummary>, sqlx::Error> {
    let pattern = search.map(|s| format!("%{}%", s));
    sqlx::query_as::<_, StudentSummary>(
        r#"
        SELECT id, username, email, trainer_id, workout_ids
        FROM users
        WHERE role = 'student'
          AND (trainer_id = $1 OR trainer_id IS NULL)
          AND ($2::text IS NULL OR username ILIKE $2)
        ORDER BY username
        "#,
    )
    .bind(trainer_id)
    .bind(pattern)
    .fetch_all(pool)
    .await
}
