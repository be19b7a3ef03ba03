use actix_web::web;

pub mod auth;
pub mod backend_health;
pub mod dashboard;
pub mod execution;
pub mod exercises;
pub mod history;
pub mod muscle_groups;
pub mod profile;
pub mod registration;
pub mod students;
pub mod workout_groups;
pub mod workouts;

use crate::middleware::auth::AuthMiddleware;
use crate::middleware::trainer::TrainerMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    // Profile routes (any authenticated user)
    cfg.service(
        web::scope("/profile")
            .wrap(AuthMiddleware)
            .service(profile::get_me)
            .service(profile::update_me)
            .service(profile::role_toggle),
    );
    // Exercise catalog (any authenticated user; seeds itself when empty)
    cfg.service(
        web::scope("/exercises")
            .wrap(AuthMiddleware)
            .service(exercises::list),
    );
    // Muscle group management (trainers only)
    cfg.service(
        web::scope("/muscle_groups")
            .wrap(TrainerMiddleware)
            .service(muscle_groups::list)
            .service(muscle_groups::create)
            .service(muscle_groups::update)
            .service(muscle_groups::delete)
            .service(muscle_groups::assign_exercise),
    );
    // Workout authoring (trainers only)
    cfg.service(
        web::scope("/workouts")
            .wrap(TrainerMiddleware)
            .service(workouts::list)
            .service(workouts::create)
            .service(workouts::auto_generate)
            .service(workouts::update)
            .service(workouts::delete),
    );
    // Workout group authoring (trainers only)
    cfg.service(
        web::scope("/workout_groups")
            .wrap(TrainerMiddleware)
            .service(workout_groups::list)
            .service(workout_groups::create)
            .service(workout_groups::update)
            .service(workout_groups::delete),
    );
    // Student management (trainers only)
    cfg.service(
        web::scope("/students")
            .wrap(TrainerMiddleware)
            .service(students::list)
            .service(students::claim)
            .service(students::assign),
    );
    // Dashboard (any authenticated user)
    cfg.service(
        web::scope("/dashboard")
            .wrap(AuthMiddleware)
            .service(dashboard::recommendation)
            .service(dashboard::suggestions),
    );
    // Workout execution (any authenticated user)
    cfg.service(
        web::scope("/execution")
            .wrap(AuthMiddleware)
            .service(execution::start)
            .service(execution::current)
            .service(execution::complete_exercise)
            .service(execution::finish),
    );
    // Workout history (any authenticated user)
    cfg.service(
        web::scope("/history")
            .wrap(AuthMiddleware)
            .service(history::list)
            .service(history::delete),
    );
}
