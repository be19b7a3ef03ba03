use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A bundle of workouts with a validity window, assignable to a student
/// as one unit.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WorkoutGroup {
    pub id: Uuid,
    pub name: String,
    pub trainer_id: Uuid,
    pub workout_ids: Vec<Uuid>,
    pub validity_days: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateWorkoutGroupRequest {
    pub name: String,
    #[serde(default)]
    pub workout_ids: Vec<Uuid>,
    pub validity_days: i32,
    /// When set, the group's workouts are merged into this student's
    /// assigned set right after creation.
    pub student_id: Option<Uuid>,
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWorkoutGroupRequest {
    pub name: String,
    #[serde(default)]
    pub workout_ids: Vec<Uuid>,
    pub validity_days: i32,
    #[serde(default)]
    pub confirmed: bool,
}
