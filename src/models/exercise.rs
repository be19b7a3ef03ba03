use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::user::FitnessLevel;

/// Exercise difficulty tier. Unknown tiers from older catalog documents
/// collapse to Advanced, which only advanced users match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn parse_lossy(raw: &str) -> Self {
        match raw {
            "beginner" => Difficulty::Beginner,
            "intermediate" => Difficulty::Intermediate,
            _ => Difficulty::Advanced,
        }
    }

    /// Difficulty compatibility: beginners only match beginner
    /// exercises, intermediates match beginner or intermediate,
    /// everyone else matches everything.
    pub fn suits(&self, level: FitnessLevel) -> bool {
        match level {
            FitnessLevel::Beginner => *self == Difficulty::Beginner,
            FitnessLevel::Intermediate => {
                matches!(self, Difficulty::Beginner | Difficulty::Intermediate)
            }
            FitnessLevel::Advanced => true,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog exercise. Media fields are opaque URLs owned by whatever CDN
/// the trainer pasted them from.
#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub muscle_groups: Vec<String>,
    pub difficulty: Difficulty,
    pub recommended_age_range: String,
    pub sets: i32,
    pub reps: i32,
    pub weight: i32,
    pub rest: i32,
    pub photo: String,
    pub demo_images: Vec<String>,
    pub video: String,
}

#[derive(Debug, FromRow)]
pub struct ExerciseRow {
    pub id: Uuid,
    pub name: String,
    pub muscle_groups: Vec<String>,
    pub difficulty: String,
    pub recommended_age_range: String,
    pub sets: i32,
    pub reps: i32,
    pub weight: i32,
    pub rest: i32,
    pub photo: String,
    pub demo_images: Vec<String>,
    pub video: String,
}

impl From<ExerciseRow> for Exercise {
    fn from(row: ExerciseRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            muscle_groups: row.muscle_groups,
            difficulty: Difficulty::parse_lossy(&row.difficulty),
            recommended_age_range: row.recommended_age_range,
            sets: row.sets,
            reps: row.reps,
            weight: row.weight,
            rest: row.rest,
            photo: row.photo,
            demo_images: row.demo_images,
            video: row.video,
        }
    }
}

/// Value copy of an exercise as embedded in a workout (JSONB). Snapshots
/// are taken when the workout is created or edited; later catalog edits
/// never reach them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSnapshot {
    pub name: String,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub recommended_age_range: String,
    pub sets: i32,
    pub reps: i32,
    #[serde(default)]
    pub weight: i32,
    #[serde(default)]
    pub rest: i32,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub demo_images: Vec<String>,
    #[serde(default)]
    pub video: String,
}

impl ExerciseSnapshot {
    /// Snapshot a catalog exercise, optionally overriding the
    /// prescription. Missing prescription values fall back to the
    /// catalog defaults of 3 sets x 10 reps, bodyweight, 60s rest.
    pub fn from_catalog(
        exercise: &Exercise,
        sets: Option<i32>,
        reps: Option<i32>,
        weight: Option<i32>,
        rest: Option<i32>,
    ) -> Self {
        Self {
            name: exercise.name.clone(),
            muscle_groups: exercise.muscle_groups.clone(),
            difficulty: exercise.difficulty,
            recommended_age_range: exercise.recommended_age_range.clone(),
            sets: sets.unwrap_or(if exercise.sets > 0 { exercise.sets } else { 3 }),
            reps: reps.unwrap_or(if exercise.reps > 0 { exercise.reps } else { 10 }),
            weight: weight.unwrap_or(exercise.weight),
            rest: rest.unwrap_or(if exercise.rest > 0 { exercise.rest } else { 60 }),
            photo: exercise.photo.clone(),
            demo_images: exercise.demo_images.clone(),
            video: exercise.video.clone(),
        }
    }
}
