use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::exercise::{Exercise, ExerciseSnapshot};

/// Auto-generated workouts always carry this many exercises.
pub const AUTO_WORKOUT_SIZE: usize = 5;

/// Pick a random workout-sized sample from the catalog. This is the one
/// explicitly random operation in the product; the recommendation path
/// stays deterministic. Returns `None` when the catalog is too small.
pub fn generate_exercises<R: Rng + ?Sized>(
    exercises: &[Exercise],
    rng: &mut R,
) -> Option<Vec<ExerciseSnapshot>> {
    if exercises.len() < AUTO_WORKOUT_SIZE {
        return None;
    }
    let picked = exercises
        .choose_multiple(rng, AUTO_WORKOUT_SIZE)
        .map(|ex| ExerciseSnapshot::from_catalog(ex, None, None, None, None))
        .collect();
    Some(picked)
}

pub fn auto_workout_name(now: DateTime<Utc>) -> String {
    format!("Auto workout {}", now.format("%Y-%m-%d"))
}
