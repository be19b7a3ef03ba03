use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::exercise::ExerciseSnapshot;

/// Terminal status of an execution session. Incomplete means the user
/// finished with fewer exercises completed than the workout contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutStatus {
    Completed,
    Incomplete,
}

impl WorkoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutStatus::Completed => "completed",
            WorkoutStatus::Incomplete => "incomplete",
        }
    }

    pub fn parse_lossy(raw: &str) -> Self {
        match raw {
            "completed" => WorkoutStatus::Completed,
            _ => WorkoutStatus::Incomplete,
        }
    }
}

impl fmt::Display for WorkoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finished execution session. Written exactly once when a session
/// finishes; history rows are deleted by the user, never edited.
#[derive(Debug, Clone, Serialize)]
pub struct CompletedWorkout {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub name: String,
    pub exercises: Vec<ExerciseSnapshot>,
    pub trainer_id: Uuid,
    pub student_id: Option<Uuid>,
    pub completed_at: DateTime<Utc>,
    pub status: WorkoutStatus,
}

#[derive(Debug, FromRow)]
pub struct CompletedWorkoutRow {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub name: String,
    pub exercises: Json<Vec<ExerciseSnapshot>>,
    pub trainer_id: Uuid,
    pub student_id: Option<Uuid>,
    pub completed_at: DateTime<Utc>,
    pub status: String,
}

impl From<CompletedWorkoutRow> for CompletedWorkout {
    fn from(row: CompletedWorkoutRow) -> Self {
        Self {
            id: row.id,
            workout_id: row.workout_id,
            name: row.name,
            exercises: row.exercises.0,
            trainer_id: row.trainer_id,
            student_id: row.student_id,
            completed_at: row.completed_at,
            status: WorkoutStatus::parse_lossy(&row.status),
        }
    }
}
