pub mod completed_workouts;
pub mod exercises;
pub mod muscle_groups;
pub mod seed;
pub mod users;
pub mod workout_groups;
pub mod workouts;
