use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::completed_workout::WorkoutStatus;
use crate::models::workout::Workout;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("No workout session in progress")]
    NoActiveSession,

    #[error("Still resting: {0}s remaining")]
    Resting(i64),

    #[error("Exercise \"{0}\" is not part of this workout")]
    UnknownExercise(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionOutcome {
    /// Exercise newly marked complete; carries the rest window opened by
    /// it (0 when the exercise defines no rest).
    Completed { rest_seconds: i64 },
    /// Marking an already-completed exercise is a no-op.
    AlreadyCompleted,
}

/// One in-flight workout session for one user. Pure over injected `now`
/// timestamps so the rest window is testable without sleeping.
///
/// Lifecycle: exercises move Pending -> Completed one at a time; an
/// exercise with a rest prescription opens a rest window that blocks
/// further completions until the countdown (one-second resolution)
/// reaches zero. Finishing derives the terminal status from how many
/// exercises were completed.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionSession {
    pub workout: Workout,
    pub completed: Vec<String>,
    pub resting_until: Option<DateTime<Utc>>,
    pub started_at: DateTime<Utc>,
}

impl ExecutionSession {
    pub fn new(workout: Workout, now: DateTime<Utc>) -> Self {
        Self {
            workout,
            completed: Vec::new(),
            resting_until: None,
            started_at: now,
        }
    }

    /// Whole seconds left on the rest countdown, 0 when not resting.
    pub fn rest_remaining(&self, now: DateTime<Utc>) -> i64 {
        match self.resting_until {
            Some(until) if until > now => (until - now).num_seconds().max(1),
            _ => 0,
        }
    }

    pub fn is_resting(&self, now: DateTime<Utc>) -> bool {
        self.rest_remaining(now) > 0
    }

    pub fn is_completed(&self, exercise_name: &str) -> bool {
        self.completed.iter().any(|name| name == exercise_name)
    }

    /// Mark one exercise complete. Idempotent per exercise; rejected
    /// while a rest window is open.
    pub fn complete_exercise(
        &mut self,
        exercise_name: &str,
        now: DateTime<Utc>,
    ) -> Result<CompletionOutcome, ExecutionError> {
        if self.is_completed(exercise_name) {
            return Ok(CompletionOutcome::AlreadyCompleted);
        }

        let remaining = self.rest_remaining(now);
        if remaining > 0 {
            return Err(ExecutionError::Resting(remaining));
        }

        let exercise = self
            .workout
            .exercises
            .iter()
            .find(|ex| ex.name == exercise_name)
            .ok_or_else(|| ExecutionError::UnknownExercise(exercise_name.to_string()))?;

        let rest_seconds = i64::from(exercise.rest.max(0));
        self.completed.push(exercise.name.clone());
        self.resting_until = if rest_seconds > 0 {
            Some(now + Duration::seconds(rest_seconds))
        } else {
            None
        };

        Ok(CompletionOutcome::Completed { rest_seconds })
    }

    pub fn all_completed(&self) -> bool {
        self.completed.len() == self.workout.exercises.len()
    }

    /// Terminal status: incomplete only when fewer exercises were
    /// completed than the workout contains.
    pub fn finish_status(&self) -> WorkoutStatus {
        if self.all_completed() {
            WorkoutStatus::Completed
        } else {
            WorkoutStatus::Incomplete
        }
    }

    /// Share of exercises completed, as a 0-100 performance score.
    pub fn completion_percent(&self) -> f64 {
        if self.workout.exercises.is_empty() {
            return 0.0;
        }
        (self.completed.len() as f64 / self.workout.exercises.len() as f64 * 100.0).round()
    }
}

/// In-memory store of at most one active session per user. Replacing a
/// session discards the previous one; there is nothing durable here by
/// design, the durable record is written only when a session finishes.
#[derive(Debug, Default)]
pub struct ExecutionSessions {
    inner: Mutex<HashMap<Uuid, ExecutionSession>>,
}

impl ExecutionSessions {
    pub fn start(&self, user_id: Uuid, session: ExecutionSession) {
        self.lock().insert(user_id, session);
    }

    pub fn snapshot(&self, user_id: Uuid) -> Option<ExecutionSession> {
        self.lock().get(&user_id).cloned()
    }

    /// Run a closure against the user's active session.
    pub fn with_session<R>(
        &self,
        user_id: Uuid,
        f: impl FnOnce(&mut ExecutionSession) -> R,
    ) -> Result<R, ExecutionError> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(&user_id)
            .ok_or(ExecutionError::NoActiveSession)?;
        Ok(f(session))
    }

    /// Remove and return the user's active session.
    pub fn take(&self, user_id: Uuid) -> Option<ExecutionSession> {
        self.lock().remove(&user_id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, ExecutionSession>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exercise::{Difficulty, ExerciseSnapshot};
    use chrono::TimeZone;

    fn snapshot(name: &str, rest: i32) -> ExerciseSnapshot {
        ExerciseSnapshot {
            name: name.into(),
            muscle_groups: vec![],
            difficulty: Difficulty::Beginner,
            recommended_age_range: "18-70".into(),
            sets: 3,
            reps: 10,
            weight: 0,
            rest,
            photo: String::new(),
            demo_images: vec![],
            video: String::new(),
        }
    }

    fn workout(exercises: Vec<ExerciseSnapshot>) -> Workout {
        Workout {
            id: Uuid::new_v4(),
            name: "Leg Day".into(),
            exercises,
            trainer_id: Uuid::new_v4(),
            student_id: None,
            group_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 15, 10, 0, 0).unwrap()
    }

    #[test]
    fn completing_opens_rest_window() {
        let mut session = ExecutionSession::new(
            workout(vec![snapshot("Squat", 60), snapshot("Lunge", 0)]),
            t0(),
        );

        let outcome = session.complete_exercise("Squat", t0()).unwrap();
        assert_eq!(outcome, CompletionOutcome::Completed { rest_seconds: 60 });
        assert!(session.is_resting(t0() + Duration::seconds(59)));

        // Blocked until the countdown runs out
        let err = session
            .complete_exercise("Lunge", t0() + Duration::seconds(30))
            .unwrap_err();
        assert_eq!(err, ExecutionError::Resting(30));

        // Free again once the window closes
        let outcome = session
            .complete_exercise("Lunge", t0() + Duration::seconds(60))
            .unwrap();
        assert_eq!(outcome, CompletionOutcome::Completed { rest_seconds: 0 });
        assert!(session.all_completed());
    }

    #[test]
    fn completion_is_idempotent() {
        let mut session = ExecutionSession::new(workout(vec![snapshot("Squat", 60)]), t0());
        session.complete_exercise("Squat", t0()).unwrap();

        // A repeat mark is a no-op even during the rest window
        let outcome = session
            .complete_exercise("Squat", t0() + Duration::seconds(5))
            .unwrap();
        assert_eq!(outcome, CompletionOutcome::AlreadyCompleted);
        assert_eq!(session.completed.len(), 1);
    }

    #[test]
    fn unknown_exercise_is_rejected() {
        let mut session = ExecutionSession::new(workout(vec![snapshot("Squat", 0)]), t0());
        let err = session.complete_exercise("Deadlift", t0()).unwrap_err();
        assert_eq!(err, ExecutionError::UnknownExercise("Deadlift".into()));
    }

    #[test]
    fn status_derives_from_completed_count() {
        let mut session = ExecutionSession::new(
            workout(vec![snapshot("Squat", 0), snapshot("Lunge", 0)]),
            t0(),
        );
        assert_eq!(session.finish_status(), WorkoutStatus::Incomplete);

        session.complete_exercise("Squat", t0()).unwrap();
        assert_eq!(session.finish_status(), WorkoutStatus::Incomplete);
        assert_eq!(session.completion_percent(), 50.0);

        session.complete_exercise("Lunge", t0()).unwrap();
        assert_eq!(session.finish_status(), WorkoutStatus::Completed);
        assert_eq!(session.completion_percent(), 100.0);
    }

    #[test]
    fn store_keeps_one_session_per_user() {
        let store = ExecutionSessions::default();
        let user = Uuid::new_v4();
        assert!(matches!(
            store.with_session(user, |_| ()),
            Err(ExecutionError::NoActiveSession)
        ));

        store.start(user, ExecutionSession::new(workout(vec![]), t0()));
        assert!(store.snapshot(user).is_some());

        // A fresh start replaces the previous session
        let other = workout(vec![snapshot("Row", 0)]);
        store.start(user, ExecutionSession::new(other, t0()));
        let current = store.snapshot(user).unwrap();
        assert_eq!(current.workout.exercises.len(), 1);

        assert!(store.take(user).is_some());
        assert!(store.snapshot(user).is_none());
    }
}
