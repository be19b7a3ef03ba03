use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::completed_workout::{CompletedWorkout, CompletedWorkoutRow, WorkoutStatus};
use crate::models::exercise::ExerciseSnapshot;

const SELECT_COMPLETED: &str = r#"
    SELECT id, workout_id, name, exercises, trainer_id, student_id, completed_at, status
    FROM completed_workouts
"#;

/// History rows are scoped by the id of the account that executed the
/// session (kept in trainer_id, matching the legacy document shape).
#[tracing::instrument(name = "List completed workouts", skip(pool), fields(owner_id = %owner_id))]
pub async fn list_for_owner(
    pool: &PgPool,
    owner_id: Uuid,
    status: Option<WorkoutStatus>,
) -> Result<Vec<CompletedWorkout>, sqlx::Error> {
    let sql = format!(
        "{SELECT_COMPLETED} WHERE trainer_id = $1 AND ($2::text IS NULL OR status = $2) \
         ORDER BY completed_at DESC"
    );
    let rows = sqlx::query_as::<_, CompletedWorkoutRow>(&sql)
        .bind(owner_id)
        .bind(status.map(|s| s.to_string()))
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(CompletedWorkout::from).collect())
}

#[tracing::instrument(
    name = "Insert completed workout",
    skip(pool, exercises),
    fields(owner_id = %owner_id, workout_id = %workout_id, status = %status)
)]
#[allow(clippy::too_many_arguments)]
pub async fn insert(
    pool: &PgPool,
    workout_id: Uuid,
    name: &str,
    exercises: &[ExerciseSnapshot],
    owner_id: Uuid,
    student_id: Option<Uuid>,
    completed_at: DateTime<Utc>,
    status: WorkoutStatus,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO completed_workouts
            (id, workout_id, name, exercises, trainer_id, student_id, completed_at, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(id)
    .bind(workout_id)
    .bind(name)
    .bind(Json(exercises))
    .bind(owner_id)
    .bind(student_id)
    .bind(completed_at)
    .bind(status.to_string())
    .execute(pool)
    .await?;
    Ok(id)
}

#[tracing::instrument(name = "Delete history entry", skip(pool), fields(entry_id = %entry_id))]
pub async fn delete(pool: &PgPool, entry_id: Uuid, owner_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM completed_workouts WHERE id = $1 AND trainer_id = $2")
        .bind(entry_id)
        .bind(owner_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
