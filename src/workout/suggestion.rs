use std::collections::HashSet;

use crate::models::completed_workout::CompletedWorkout;
use crate::models::muscle_group::MuscleGroup;
use crate::models::workout::Workout;

/// Workouts that touch muscle groups the user has not worked yet, i.e.
/// groups absent from every completed workout's exercise snapshots.
/// Empty history means nothing to balance against, so no suggestions.
pub fn suggest_for_underworked_groups(
    workouts: &[Workout],
    muscle_groups: &[MuscleGroup],
    completed: &[CompletedWorkout],
) -> Vec<Workout> {
    if completed.is_empty() || muscle_groups.is_empty() || workouts.is_empty() {
        return Vec::new();
    }

    let worked: HashSet<&str> = completed
        .iter()
        .flat_map(|cw| cw.exercises.iter())
        .flat_map(|ex| ex.muscle_groups.iter())
        .map(String::as_str)
        .collect();

    let underworked: HashSet<&str> = muscle_groups
        .iter()
        .map(|g| g.name.as_str())
        .filter(|name| !worked.contains(name))
        .collect();

    workouts
        .iter()
        .filter(|w| {
            w.exercises
                .iter()
                .any(|ex| ex.muscle_groups.iter().any(|g| underworked.contains(g.as_str())))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::completed_workout::WorkoutStatus;
    use crate::models::exercise::{Difficulty, ExerciseSnapshot};
    use chrono::Utc;
    use uuid::Uuid;

    fn snapshot(name: &str, groups: &[&str]) -> ExerciseSnapshot {
        ExerciseSnapshot {
            name: name.into(),
            muscle_groups: groups.iter().map(|g| g.to_string()).collect(),
            difficulty: Difficulty::Beginner,
            recommended_age_range: "18-70".into(),
            sets: 3,
            reps: 10,
            weight: 0,
            rest: 60,
            photo: String::new(),
            demo_images: vec![],
            video: String::new(),
        }
    }

    fn workout(name: &str, exercises: Vec<ExerciseSnapshot>) -> Workout {
        Workout {
            id: Uuid::new_v4(),
            name: name.into(),
            exercises,
            trainer_id: Uuid::new_v4(),
            student_id: None,
            group_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn group(name: &str) -> MuscleGroup {
        MuscleGroup {
            id: Uuid::new_v4(),
            name: name.into(),
            image_background: String::new(),
        }
    }

    fn completed_from(workout: &Workout) -> CompletedWorkout {
        CompletedWorkout {
            id: Uuid::new_v4(),
            workout_id: workout.id,
            name: workout.name.clone(),
            exercises: workout.exercises.clone(),
            trainer_id: workout.trainer_id,
            student_id: None,
            completed_at: Utc::now(),
            status: WorkoutStatus::Completed,
        }
    }

    #[test]
    fn suggests_workouts_hitting_untouched_groups() {
        let chest_day = workout("Chest Day", vec![snapshot("Bench", &["Peito"])]);
        let leg_day = workout("Leg Day", vec![snapshot("Squat", &["Pernas"])]);
        let groups = vec![group("Peito"), group("Pernas")];
        let history = vec![completed_from(&chest_day)];

        let suggested = suggest_for_underworked_groups(
            &[chest_day.clone(), leg_day.clone()],
            &groups,
            &history,
        );
        assert_eq!(suggested.len(), 1);
        assert_eq!(suggested[0].id, leg_day.id);
    }

    #[test]
    fn no_history_means_no_suggestions() {
        let leg_day = workout("Leg Day", vec![snapshot("Squat", &["Pernas"])]);
        let groups = vec![group("Pernas")];
        assert!(suggest_for_underworked_groups(&[leg_day], &groups, &[]).is_empty());
    }

    #[test]
    fn fully_balanced_history_suggests_nothing() {
        let full_body = workout(
            "Full Body",
            vec![snapshot("Bench", &["Peito"]), snapshot("Squat", &["Pernas"])],
        );
        let groups = vec![group("Peito"), group("Pernas")];
        let history = vec![completed_from(&full_body)];
        assert!(suggest_for_underworked_groups(&[full_body.clone()], &groups, &history).is_empty());
    }
}
