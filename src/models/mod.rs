pub mod auth;
pub mod common;
pub mod completed_workout;
pub mod exercise;
pub mod muscle_group;
pub mod user;
pub mod workout;
pub mod workout_group;
