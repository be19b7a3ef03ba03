use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::completed_workout::{CompletedWorkout, WorkoutStatus};
use crate::models::exercise::Exercise;
use crate::models::user::{ProgressEntry, UserProfile};
use crate::models::workout::Workout;
use crate::utils::age_range::age_in_range;
use crate::utils::dates::calendar_day;

/// Intensity multiplier derived from the mean performance across the
/// progress log. An empty log has nothing to judge and stays neutral.
pub fn intensity_multiplier(progress: &[ProgressEntry]) -> f64 {
    if progress.is_empty() {
        return 1.0;
    }
    let average = progress.iter().map(|p| p.performance).sum::<f64>() / progress.len() as f64;
    if average > 80.0 {
        1.2
    } else if average < 50.0 {
        0.8
    } else {
        1.0
    }
}

/// An exercise suits a user when their age falls inside the recommended
/// range and its difficulty is compatible with their fitness level.
fn suitable_exercises<'a>(profile: &UserProfile, exercises: &'a [Exercise]) -> Vec<&'a Exercise> {
    exercises
        .iter()
        .filter(|ex| {
            age_in_range(profile.age, &ex.recommended_age_range)
                && ex.difficulty.suits(profile.fitness_level)
        })
        .collect()
}

/// How many workouts the user completed on the current calendar day.
pub fn completed_today_count(completed: &[CompletedWorkout], now: DateTime<Utc>) -> usize {
    let today = calendar_day(now);
    completed
        .iter()
        .filter(|cw| cw.status == WorkoutStatus::Completed && calendar_day(cw.completed_at) == today)
        .count()
}

/// Pick at most one workout to recommend.
///
/// Suppressed entirely while any history record is still incomplete.
/// Candidates exclude workouts completed today and workouts ever
/// completed; when that leaves nothing, availability widens to exclude
/// only today's completions, and as a last resort the first widened
/// entry is repeated rather than recommending nothing. The returned
/// workout is a copy with reps and sets scaled by the intensity
/// multiplier. First-match in catalog order is the only tie-break.
pub fn recommend_workout(
    profile: &UserProfile,
    workouts: &[Workout],
    exercises: &[Exercise],
    completed: &[CompletedWorkout],
    now: DateTime<Utc>,
) -> Option<Workout> {
    if workouts.is_empty() {
        return None;
    }
    if completed
        .iter()
        .any(|cw| cw.status == WorkoutStatus::Incomplete)
    {
        return None;
    }

    let suitable = suitable_exercises(profile, exercises);
    let multiplier = intensity_multiplier(&profile.progress);

    let today = calendar_day(now);
    let completed_today: HashSet<Uuid> = completed
        .iter()
        .filter(|cw| {
            cw.status == WorkoutStatus::Completed && calendar_day(cw.completed_at) == today
        })
        .map(|cw| cw.workout_id)
        .collect();
    let ever_completed: HashSet<Uuid> = completed
        .iter()
        .filter(|cw| cw.status == WorkoutStatus::Completed)
        .map(|cw| cw.workout_id)
        .collect();

    let matches_suitable = |workout: &Workout| {
        workout
            .exercises
            .iter()
            .any(|ex| suitable.iter().any(|se| se.name == ex.name))
    };

    let mut pick = workouts
        .iter()
        .filter(|w| !completed_today.contains(&w.id) && !ever_completed.contains(&w.id))
        .find(|w| matches_suitable(w));

    if pick.is_none() {
        let widened: Vec<&Workout> = workouts
            .iter()
            .filter(|w| !completed_today.contains(&w.id))
            .collect();
        pick = widened
            .iter()
            .copied()
            .find(|w| matches_suitable(w))
            .or_else(|| widened.first().copied());
    }

    pick.map(|w| scale_workout(w, multiplier))
}

fn scale_workout(workout: &Workout, multiplier: f64) -> Workout {
    let mut scaled = workout.clone();
    for ex in &mut scaled.exercises {
        ex.reps = scale(ex.reps, multiplier);
        ex.sets = scale(ex.sets, multiplier);
    }
    scaled
}

fn scale(value: i32, multiplier: f64) -> i32 {
    (f64::from(value) * multiplier).round() as i32
}
