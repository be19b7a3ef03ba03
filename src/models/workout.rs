use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::exercise::ExerciseSnapshot;

/// A trainer-authored workout. `exercises` is an ordered list of value
/// snapshots, not references into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub exercises: Vec<ExerciseSnapshot>,
    pub trainer_id: Uuid,
    pub student_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct WorkoutRow {
    pub id: Uuid,
    pub name: String,
    pub exercises: Json<Vec<ExerciseSnapshot>>,
    pub trainer_id: Uuid,
    pub student_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<WorkoutRow> for Workout {
    fn from(row: WorkoutRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            exercises: row.exercises.0,
            trainer_id: row.trainer_id,
            student_id: row.student_id,
            group_id: row.group_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// One picked catalog exercise, with an optional prescription override.
#[derive(Debug, Deserialize)]
pub struct ExerciseSelection {
    pub exercise_id: Uuid,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<i32>,
    pub rest: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct CreateWorkoutRequest {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseSelection>,
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWorkoutRequest {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseSelection>,
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Deserialize)]
pub struct AutoGenerateRequest {
    #[serde(default)]
    pub confirmed: bool,
}
