use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MuscleGroup {
    pub id: Uuid,
    pub name: String,
    pub image_background: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateMuscleGroupRequest {
    pub name: String,
    pub image_background: String,
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMuscleGroupRequest {
    pub name: String,
    pub image_background: String,
    #[serde(default)]
    pub confirmed: bool,
}

/// Adds one catalog exercise to a muscle group by appending the group
/// NAME to the exercise's membership list.
#[derive(Debug, Deserialize)]
pub struct AssignExerciseRequest {
    pub exercise_id: Uuid,
    pub muscle_group_id: Uuid,
    #[serde(default)]
    pub confirmed: bool,
}
